//! 共享库
//!
//! 包含所有 crate 共用的配置、错误处理和日志初始化代码。

pub mod config;
pub mod error;
pub mod observability;

pub use config::{AppConfig, MockDataConfig, SelectionPolicy, TargetingConfig};
pub use error::{ButcherError, Result};

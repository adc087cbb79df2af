//! 测试数据模块

pub mod fixtures;

pub use fixtures::*;

//! Mock Services
//!
//! 肉类配送后台的模拟数据与服务，供 CLI、集成测试和基准测试使用。
//!
//! # 主要模块
//!
//! - `models`: 商品目录
//! - `generators`: 按固定种子生成订单
//! - `store`: 保持插入顺序的内存存储
//! - `services`: 带模拟延迟的订单服务、优惠提示发件箱
//! - `dataset`: JSON/YAML 数据集文件
//!
//! # 使用示例
//!
//! ```rust
//! use chrono::Utc;
//! use mock_services::generators::{DataGenerator, GeneratorConfig};
//! use mock_services::store::MemoryStore;
//! use targeting_engine::OrderRecord;
//!
//! let orders: MemoryStore<OrderRecord> = MemoryStore::new();
//! let config = GeneratorConfig {
//!     customer_count: 10,
//!     orders_per_customer: 1..=4,
//!     history_days: 60,
//!     seed: 42,
//! };
//! let stats = DataGenerator::new(config).populate_store(&orders, Utc::now());
//! assert_eq!(stats.customers_count, 10);
//! ```

pub mod cli;
pub mod dataset;
pub mod generators;
pub mod models;
pub mod services;
pub mod store;

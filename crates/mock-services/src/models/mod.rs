//! 模拟数据模型
//!
//! 店铺的肉类商品目录。订单和客户记录直接使用定向引擎里的模型。

pub mod catalog;

pub use catalog::{CATALOG, MeatCategory, Product};

//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `filter` - 看板订单筛选
//! - `customers` - 客户分析（按手机号聚合后筛选）
//! - `offer` - 向选中的订单或客户发送优惠
//! - `populate` - 批量生成订单数据
//!
//! # 使用示例
//!
//! ```bash
//! # 最近 30 天金额大于 1000 的订单
//! butcher-admin filter --amount ">1000" --days 30
//!
//! # 下单超过 2 次的客户
//! butcher-admin customers --order-count ">2"
//!
//! # 向筛选出的全部客户发送 10% 折扣
//! butcher-admin offer --customers --order-count ">2" --select-all -d 10
//!
//! # 生成数据集文件
//! butcher-admin populate -c 50 --orders 1-8 -o orders.yaml
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands, FilterArgs, OfferKind, SourceArgs};
pub use runner::{CommandRunner, OfferRequest};

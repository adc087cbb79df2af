//! 定向营销端到端测试
//!
//! 从模拟订单服务加载数据，经过筛选、勾选到发送优惠的完整流程：
//! - 看板订单筛选
//! - 客户分析（按手机号聚合）
//! - 会员回馈（订单数条件）
//! - 优惠发送与拒绝
//! - 生成数据上的一致性

pub mod data;
pub mod suites;

pub use setup::TestEnvironment;

//! 测试套件模块
//!
//! 按后台页面组织的测试用例集合。

pub mod customer_analysis;
pub mod dashboard_filter;
pub mod generated_data;
pub mod loyalty_targeting;
pub mod offer_flow;

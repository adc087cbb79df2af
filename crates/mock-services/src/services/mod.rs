//! Mock 服务模块
//!
//! 模拟后台依赖的订单接口与通知提示，不做任何网络调用。

pub mod latency;
pub mod notification_service;
pub mod order_service;

pub use latency::{Latency, NoLatency, SimulatedLatency};
pub use notification_service::{NotificationOutbox, Toast};
pub use order_service::OrderService;

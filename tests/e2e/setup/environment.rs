//! 测试环境
//!
//! 无延迟的模拟订单服务、固定时钟和内存发件箱。

use std::sync::Arc;

use butcher_shared::{SelectionPolicy, TargetingConfig};
use mock_services::services::{NoLatency, NotificationOutbox, OrderService};
use targeting_engine::{
    CustomerSummary, FilterPipeline, FixedClock, OrderRecord, TargetingSession,
};

use crate::data::{TestOrders, fixed_now};

pub struct TestEnvironment {
    pub service: OrderService,
    pub outbox: NotificationOutbox,
    pub config: TargetingConfig,
}

impl TestEnvironment {
    pub fn setup() -> Self {
        Self::with_orders(TestOrders::all())
    }

    pub fn with_orders(orders: Vec<OrderRecord>) -> Self {
        Self {
            service: OrderService::with_orders(orders, Arc::new(NoLatency)),
            outbox: NotificationOutbox::new(),
            config: TargetingConfig::default(),
        }
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.config.selection_policy = policy;
        self
    }

    pub fn pipeline(&self) -> FilterPipeline {
        FilterPipeline::new(Arc::new(FixedClock(fixed_now())))
    }

    /// 看板订单页
    pub async fn order_session(&self) -> TargetingSession<OrderRecord> {
        let orders = self.service.list_orders().await;
        TargetingSession::new(orders, self.pipeline(), &self.config)
    }

    /// 客户分析页
    pub async fn customer_session(&self) -> TargetingSession<CustomerSummary> {
        let customers = self.service.list_customers().await;
        TargetingSession::new(customers, self.pipeline(), &self.config)
    }
}

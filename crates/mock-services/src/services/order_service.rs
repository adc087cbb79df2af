//! Mock 订单服务
//!
//! 后台各页面的数据来源。每次读取都先等待注入的 [`Latency`]，
//! 模拟页面的加载过程；数据本身来自内存存储。

use std::sync::Arc;

use butcher_shared::MockDataConfig;
use chrono::{DateTime, Utc};
use targeting_engine::{CustomerSummary, OrderRecord, aggregate_customers};
use tracing::info;

use super::latency::{Latency, NoLatency, SimulatedLatency};
use crate::generators::{DataGenerator, GeneratorConfig};
use crate::store::MemoryStore;

/// 订单服务
///
/// 克隆后共享同一份存储
#[derive(Clone)]
pub struct OrderService {
    orders: MemoryStore<OrderRecord>,
    latency: Arc<dyn Latency>,
}

impl OrderService {
    pub fn new(orders: MemoryStore<OrderRecord>, latency: Arc<dyn Latency>) -> Self {
        Self { orders, latency }
    }

    /// 按模拟数据配置生成订单并创建服务
    pub fn from_config(config: &MockDataConfig, now: DateTime<Utc>) -> Self {
        let store = MemoryStore::new();
        let stats = DataGenerator::new(GeneratorConfig::from(config)).populate_store(&store, now);
        info!(
            customers = stats.customers_count,
            orders = stats.orders_count,
            latency_ms = config.latency_ms,
            "mock order service ready"
        );
        Self::new(store, Arc::new(SimulatedLatency::from_millis(config.latency_ms)))
    }

    /// 用给定订单创建服务，保持给定顺序
    pub fn with_orders(orders: Vec<OrderRecord>, latency: Arc<dyn Latency>) -> Self {
        let store = MemoryStore::new();
        store.insert_many(orders, |order| order.order_id.clone());
        Self::new(store, latency)
    }

    pub fn store(&self) -> &MemoryStore<OrderRecord> {
        &self.orders
    }

    /// 看板订单列表
    pub async fn list_orders(&self) -> Vec<OrderRecord> {
        self.latency.wait().await;
        self.orders.list()
    }

    /// 客户分析页的客户列表
    pub async fn list_customers(&self) -> Vec<CustomerSummary> {
        self.latency.wait().await;
        aggregate_customers(&self.orders.list())
    }
}

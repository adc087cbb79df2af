//! 数据生成器
//!
//! 按固定种子批量生成订单，用于填充模拟订单服务。同一个种子和同一个
//! 基准时间总是得到同一份数据，方便复现后台的筛选结果。

use crate::models::CATALOG;
use crate::store::MemoryStore;
use butcher_shared::MockDataConfig;
use chrono::{DateTime, Duration, Utc};
use fake::Fake;
use fake::faker::name::en::Name;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::ops::RangeInclusive;
use targeting_engine::{LineItem, OrderRecord, OrderStatus};

/// 数据生成器配置
///
/// 控制生成数据的数量和分布
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub customer_count: usize,
    /// 每个客户的订单数量范围
    pub orders_per_customer: RangeInclusive<usize>,
    /// 订单时间分布在过去多少天内
    pub history_days: i64,
    pub seed: u64,
}

impl From<&MockDataConfig> for GeneratorConfig {
    fn from(config: &MockDataConfig) -> Self {
        let min = config.min_orders_per_customer;
        Self {
            customer_count: config.customer_count,
            orders_per_customer: min..=config.max_orders_per_customer.max(min),
            history_days: config.history_days.max(1),
            seed: config.seed,
        }
    }
}

/// 批量数据生成器
pub struct DataGenerator {
    config: GeneratorConfig,
}

/// 生成过程中的客户身份
#[derive(Debug, Clone)]
struct Customer {
    name: String,
    mobile: String,
}

impl DataGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// 生成全部订单，按下单时间倒序（最新在前）
    ///
    /// 订单号在排序后按顺序编号，`now` 是订单时间的基准。
    pub fn generate_orders(&self, now: DateTime<Utc>) -> Vec<OrderRecord> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let customers = self.generate_customers(&mut rng);

        let mut orders: Vec<OrderRecord> = Vec::new();
        for customer in &customers {
            let count = rng.random_range(self.config.orders_per_customer.clone());
            for _ in 0..count {
                orders.push(self.random_order(&mut rng, customer, now));
            }
        }

        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for (i, order) in orders.iter_mut().enumerate() {
            order.order_id = format!("ORD-{:05}", i + 1);
        }

        tracing::debug!(
            customers = customers.len(),
            orders = orders.len(),
            seed = self.config.seed,
            "mock orders generated"
        );
        orders
    }

    /// 生成订单并写入存储
    pub fn populate_store(
        &self,
        store: &MemoryStore<OrderRecord>,
        now: DateTime<Utc>,
    ) -> GenerationStats {
        store.insert_many(self.generate_orders(now), |order| order.order_id.clone());
        GenerationStats::from_store(store)
    }

    fn generate_customers(&self, rng: &mut StdRng) -> Vec<Customer> {
        let mut seen = HashSet::new();
        let mut customers = Vec::with_capacity(self.config.customer_count);

        while customers.len() < self.config.customer_count {
            // 10 位手机号，首位 6-9
            let mobile = format!(
                "{}{:09}",
                rng.random_range(6..=9),
                rng.random_range(0..1_000_000_000u32)
            );
            if !seen.insert(mobile.clone()) {
                continue;
            }
            customers.push(Customer {
                name: Name().fake_with_rng(rng),
                mobile,
            });
        }

        customers
    }

    fn random_order(&self, rng: &mut StdRng, customer: &Customer, now: DateTime<Utc>) -> OrderRecord {
        let item_count = rng.random_range(1..=3);
        let items: Vec<LineItem> = index::sample(rng, CATALOG.len(), item_count)
            .into_iter()
            .map(|i| {
                let product = &CATALOG[i];
                LineItem::new(product.name, rng.random_range(1..=3), product.price)
            })
            .collect();

        let minutes_ago = rng.random_range(0..self.config.history_days * 24 * 60);
        let created_at = now - Duration::minutes(minutes_ago);

        let status = if minutes_ago < 60 {
            OrderStatus::Pending
        } else if minutes_ago < 3 * 60 {
            OrderStatus::OutForDelivery
        } else if rng.random_bool(0.05) {
            OrderStatus::Cancelled
        } else {
            OrderStatus::Delivered
        };

        OrderRecord::new("", &customer.name, &customer.mobile, items, created_at).with_status(status)
    }
}

/// 统计数据生成结果
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    pub customers_count: usize,
    pub orders_count: usize,
    pub revenue: f64,
}

impl GenerationStats {
    /// 从存储中收集统计信息
    pub fn from_store(store: &MemoryStore<OrderRecord>) -> Self {
        let orders = store.list();
        let customers: HashSet<&str> = orders.iter().map(|o| o.mobile.as_str()).collect();
        Self {
            customers_count: customers.len(),
            orders_count: store.count(),
            revenue: orders.iter().map(|o| o.total_amount).sum(),
        }
    }
}

//! 测试数据 Fixtures
//!
//! 固定的订单数据，金额和时间都相对 [`fixed_now`] 计算。

use chrono::{DateTime, Duration, TimeZone, Utc};
use targeting_engine::{LineItem, OrderRecord, OrderStatus};

pub const RAVI: &str = "9876543210";
pub const PRIYA: &str = "9123456780";
pub const ANIL: &str = "9988776655";

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
}

fn order(
    id: &str,
    name: &str,
    mobile: &str,
    days_ago: i64,
    items: &[(&str, u32, f64)],
) -> OrderRecord {
    OrderRecord::new(
        id,
        name,
        mobile,
        items
            .iter()
            .map(|(product, qty, price)| LineItem::new(*product, *qty, *price))
            .collect(),
        fixed_now() - Duration::days(days_ago),
    )
    .with_status(OrderStatus::Delivered)
}

/// 看板订单
///
/// Ravi 三单、Priya 两单、Anil 一单
pub struct TestOrders;

impl TestOrders {
    pub fn all() -> Vec<OrderRecord> {
        vec![
            order("ORD-1001", "Ravi Kumar", RAVI, 10, &[("Mutton Curry Cut", 1, 1070.0)]),
            order("ORD-1002", "Priya Nair", PRIYA, 40, &[("Rohu Fish Steaks", 1, 336.0)]),
            order(
                "ORD-1003",
                "Ravi Kumar",
                RAVI,
                5,
                &[("Tiger Prawns", 1, 1500.0), ("Chicken Wings", 1, 280.0)],
            ),
            order("ORD-1004", "Anil Menon", ANIL, 2, &[("Farm Eggs (12)", 2, 120.0)]),
            order(
                "ORD-1005",
                "Priya N",
                PRIYA,
                3,
                &[("Tandoori Chicken Marinade", 1, 349.0)],
            ),
            order("ORD-1006", "Ravi K", RAVI, 60, &[("Chicken Curry Cut", 2, 260.0)]),
        ]
    }

    /// 金额分别为 1070、336、1780 的三笔订单
    pub fn amount_sample() -> Vec<OrderRecord> {
        Self::all().into_iter().take(3).collect()
    }
}

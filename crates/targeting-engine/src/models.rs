//! 定向引擎领域模型
//!
//! 订单记录与客户聚合记录都实现 [`Targetable`]，同一条筛选流水线可以作用于两者。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 可被筛选、勾选并发放优惠的记录
pub trait Targetable: Clone {
    /// 确认消息里的计数单位，如 "笔订单"
    const TARGET_UNIT: &'static str;

    /// 选中集合使用的唯一键（订单号或手机号）
    fn key(&self) -> &str;

    fn display_name(&self) -> &str;

    fn mobile(&self) -> &str;

    /// 参与金额阈值比较的数值
    fn amount(&self) -> f64;

    fn timestamp(&self) -> DateTime<Utc>;

    /// 商品名列表，品类筛选在其上做子串匹配
    fn item_names(&self) -> impl Iterator<Item = &str>;

    /// 统计订单数时用来判断"同一客户"的标识
    fn customer_identity(&self) -> &str {
        self.mobile()
    }

    /// 记录自带的订单数（客户聚合记录），为 None 时按数据源统计
    fn order_count_hint(&self) -> Option<usize> {
        None
    }
}

/// 订单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    OutForDelivery,
    Delivered,
    Cancelled,
}

/// 订单项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(product_name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// 订单记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_name: String,
    pub mobile: String,
    pub items: Vec<LineItem>,
    pub total_amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OrderRecord {
    /// 按订单项小计求和得到总金额
    pub fn new(
        order_id: impl Into<String>,
        customer_name: impl Into<String>,
        mobile: impl Into<String>,
        items: Vec<LineItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let total_amount = items.iter().map(LineItem::subtotal).sum();
        Self {
            order_id: order_id.into(),
            customer_name: customer_name.into(),
            mobile: mobile.into(),
            items,
            total_amount,
            status: OrderStatus::default(),
            created_at,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}

impl Targetable for OrderRecord {
    const TARGET_UNIT: &'static str = "笔订单";

    fn key(&self) -> &str {
        &self.order_id
    }

    fn display_name(&self) -> &str {
        &self.customer_name
    }

    fn mobile(&self) -> &str {
        &self.mobile
    }

    fn amount(&self) -> f64 {
        self.total_amount
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.product_name.as_str())
    }
}

/// 客户聚合记录（按手机号归并订单）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub mobile: String,
    pub name: String,
    pub order_ids: Vec<String>,
    pub order_count: usize,
    pub total_spent: f64,
    pub last_order_at: DateTime<Utc>,
    pub products: Vec<String>,
}

impl CustomerSummary {
    pub fn average_order_value(&self) -> f64 {
        if self.order_count == 0 {
            return 0.0;
        }
        self.total_spent / self.order_count as f64
    }
}

impl Targetable for CustomerSummary {
    const TARGET_UNIT: &'static str = "位客户";

    fn key(&self) -> &str {
        &self.mobile
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn mobile(&self) -> &str {
        &self.mobile
    }

    fn amount(&self) -> f64 {
        self.total_spent
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.last_order_at
    }

    fn item_names(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(String::as_str)
    }

    fn order_count_hint(&self) -> Option<usize> {
        Some(self.order_count)
    }
}

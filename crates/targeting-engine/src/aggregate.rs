//! 客户聚合
//!
//! 客户分析页按手机号把订单归并成客户记录，再交给同一条筛选流水线。

use crate::models::{CustomerSummary, OrderRecord};
use std::collections::HashMap;

/// 按手机号归并订单
///
/// 输出顺序为客户首次出现的顺序；姓名取最近一笔订单上的姓名，
/// 商品名去重后保留首次出现的顺序。
pub fn aggregate_customers(orders: &[OrderRecord]) -> Vec<CustomerSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<CustomerSummary> = Vec::new();

    for order in orders {
        let position = *index.entry(order.mobile.as_str()).or_insert_with(|| {
            summaries.push(CustomerSummary {
                mobile: order.mobile.clone(),
                name: order.customer_name.clone(),
                order_ids: Vec::new(),
                order_count: 0,
                total_spent: 0.0,
                last_order_at: order.created_at,
                products: Vec::new(),
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[position];
        summary.order_ids.push(order.order_id.clone());
        summary.order_count += 1;
        summary.total_spent += order.total_amount;
        if order.created_at >= summary.last_order_at {
            summary.last_order_at = order.created_at;
            summary.name = order.customer_name.clone();
        }
        for item in &order.items {
            if !summary.products.contains(&item.product_name) {
                summary.products.push(item.product_name.clone());
            }
        }
    }

    summaries
}

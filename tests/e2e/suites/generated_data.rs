//! 生成数据一致性测试套件
//!
//! 在按种子生成的模拟数据上检查筛选流水线的通用性质。

use std::sync::Arc;

use crate::data::fixed_now;
use butcher_shared::MockDataConfig;
use mock_services::services::{NoLatency, OrderService};
use targeting_engine::{
    FilterField, FilterPipeline, FilterState, FixedClock, OrderRecord, order_counts,
};

fn service() -> OrderService {
    let config = MockDataConfig {
        latency_ms: 0,
        seed: 2024,
        customer_count: 30,
        ..Default::default()
    };
    let generated = OrderService::from_config(&config, fixed_now());
    OrderService::new(generated.store().clone(), Arc::new(NoLatency))
}

fn pipeline() -> FilterPipeline {
    FilterPipeline::new(Arc::new(FixedClock(fixed_now())))
}

#[cfg(test)]
mod property_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_state_is_identity() {
        let orders = service().list_orders().await;
        let filtered = pipeline().apply(&orders, &FilterState::default());
        assert_eq!(filtered, orders);
    }

    #[tokio::test]
    async fn test_each_stage_narrows_and_holds() {
        let orders = service().list_orders().await;
        let pipeline = pipeline();

        let cases = [
            (FilterField::Amount, ">800"),
            (FilterField::Days, "14"),
            (FilterField::Category, "Mutton"),
            (FilterField::OrderCount, ">=4"),
        ];

        let counts = order_counts(&orders);
        let cutoff = fixed_now() - chrono::Duration::days(14);
        for (field, value) in cases {
            let mut state = FilterState::default();
            state.set(field, value);
            let filtered = pipeline.apply(&orders, &state);

            let holds = |order: &OrderRecord| match field {
                FilterField::Amount => order.total_amount > 800.0,
                FilterField::Days => order.created_at >= cutoff,
                FilterField::Category => order
                    .items
                    .iter()
                    .any(|i| i.product_name.to_lowercase().contains("mutton")),
                FilterField::OrderCount => counts[order.mobile.as_str()] >= 4,
                _ => unreachable!(),
            };

            assert!(filtered.len() <= orders.len());
            for order in &filtered {
                assert!(holds(order), "{:?} {} kept {}", field, value, order.order_id);
            }
            // 符合条件的记录一条不少，且保持原始顺序
            let expected: Vec<_> = orders.iter().filter(|o| holds(*o)).cloned().collect();
            assert!(!expected.is_empty(), "{:?} {} matches nothing", field, value);
            assert_eq!(filtered, expected, "{:?} {} dropped a qualifying record", field, value);
        }
    }

    #[tokio::test]
    async fn test_huge_day_count_keeps_all_history() {
        let orders = service().list_orders().await;
        let mut state = FilterState::default();
        state.set(FilterField::Days, "100000000");

        assert_eq!(pipeline().apply(&orders, &state), orders);
    }

    #[tokio::test]
    async fn test_customer_view_matches_order_view_count() {
        let service = service();
        let orders = service.list_orders().await;
        let customers = service.list_customers().await;

        let mut state = FilterState::default();
        state.set(FilterField::OrderCount, ">3");

        let order_mobiles: std::collections::BTreeSet<String> = pipeline()
            .apply(&orders, &state)
            .into_iter()
            .map(|o| o.mobile)
            .collect();
        let customer_mobiles: std::collections::BTreeSet<String> = pipeline()
            .apply(&customers, &state)
            .into_iter()
            .map(|c| c.mobile)
            .collect();

        assert_eq!(order_mobiles, customer_mobiles);
    }
}

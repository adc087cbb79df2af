//! 看板订单筛选测试套件
//!
//! 各输入框单独和组合使用时的筛选结果。

use crate::data::*;
use crate::setup::TestEnvironment;
use targeting_engine::{FilterField, OrderRecord, TargetingSession};

fn ids(session: &TargetingSession<OrderRecord>) -> Vec<&str> {
    session.filtered().iter().map(|o| o.order_id.as_str()).collect()
}

#[cfg(test)]
mod single_field_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_filter_returns_source() {
        let env = TestEnvironment::setup();
        let session = env.order_session().await;

        assert_eq!(session.filtered(), session.source());
        assert_eq!(session.filtered().len(), 6);
    }

    #[tokio::test]
    async fn test_amount_greater_than() {
        let env = TestEnvironment::with_orders(TestOrders::amount_sample());
        let mut session = env.order_session().await;

        session.set_field(FilterField::Amount, ">1000");

        let amounts: Vec<f64> = session.filtered().iter().map(|o| o.total_amount).collect();
        assert_eq!(amounts, vec![1070.0, 1780.0]);
    }

    #[tokio::test]
    async fn test_amount_without_operator_means_equal() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;

        session.set_field(FilterField::Amount, "1070");
        assert_eq!(ids(&session), vec!["ORD-1001"]);
    }

    #[tokio::test]
    async fn test_past_days_window() {
        let env = TestEnvironment::with_orders(TestOrders::amount_sample());
        let mut session = env.order_session().await;

        // 10 天前与 40 天前的订单，最近 30 天只保留前者
        session.set_field(FilterField::Days, "30");
        assert_eq!(ids(&session), vec!["ORD-1001", "ORD-1003"]);
        assert!(!ids(&session).contains(&"ORD-1002"));
    }

    #[tokio::test]
    async fn test_category_substring_case_insensitive() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;

        session.set_field(FilterField::Category, "chicken");
        assert_eq!(ids(&session), vec!["ORD-1003", "ORD-1005", "ORD-1006"]);
    }

    #[tokio::test]
    async fn test_name_and_mobile_substring() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;

        session.set_field(FilterField::Name, "RAVI");
        assert_eq!(ids(&session), vec!["ORD-1001", "ORD-1003", "ORD-1006"]);

        session.clear_filters();
        session.set_field(FilterField::Mobile, "98");
        assert_eq!(
            ids(&session),
            vec!["ORD-1001", "ORD-1003", "ORD-1004", "ORD-1006"]
        );
    }
}

#[cfg(test)]
mod fail_open_tests {
    use super::*;

    #[tokio::test]
    async fn test_unparseable_inputs_are_ignored() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;

        for input in ["abc", ">", ">>5", "1000-2000", "  "] {
            session.set_field(FilterField::Amount, input);
            assert_eq!(session.filtered().len(), 6, "amount input {:?}", input);
        }

        session.clear_filters();
        for input in ["abc", "0", "-3"] {
            session.set_field(FilterField::Days, input);
            assert_eq!(session.filtered().len(), 6, "days input {:?}", input);
        }
    }
}

#[cfg(test)]
mod combined_tests {
    use super::*;

    #[tokio::test]
    async fn test_fields_combine_with_and() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;

        session.set_field(FilterField::Category, "Chicken");
        session.set_field(FilterField::Days, "30");
        session.set_field(FilterField::Amount, ">300");

        assert_eq!(ids(&session), vec!["ORD-1003", "ORD-1005"]);
    }

    #[tokio::test]
    async fn test_result_is_ordered_subsequence() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;
        session.set_field(FilterField::Amount, ">=300");

        let source_ids: Vec<&str> = session.source().iter().map(|o| o.order_id.as_str()).collect();
        let mut cursor = 0;
        for id in ids(&session) {
            let position = source_ids[cursor..]
                .iter()
                .position(|s| *s == id)
                .expect("filtered id must appear later in source");
            cursor += position + 1;
        }
    }
}

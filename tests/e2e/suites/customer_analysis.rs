//! 客户分析测试套件
//!
//! 按手机号聚合后的客户记录走同一条筛选流水线。

use crate::data::*;
use crate::setup::TestEnvironment;
use targeting_engine::{CustomerSummary, FilterField, TargetingSession};

fn mobiles(session: &TargetingSession<CustomerSummary>) -> Vec<&str> {
    session.filtered().iter().map(|c| c.mobile.as_str()).collect()
}

#[cfg(test)]
mod aggregation_tests {
    use super::*;

    #[tokio::test]
    async fn test_customers_grouped_by_mobile() {
        let env = TestEnvironment::setup();
        let session = env.customer_session().await;

        assert_eq!(mobiles(&session), vec![RAVI, PRIYA, ANIL]);

        let ravi = &session.source()[0];
        assert_eq!(ravi.name, "Ravi Kumar");
        assert_eq!(ravi.order_count, 3);
        assert_eq!(ravi.total_spent, 3370.0);
        assert_eq!(ravi.order_ids, vec!["ORD-1001", "ORD-1003", "ORD-1006"]);

        let priya = &session.source()[1];
        assert_eq!(priya.name, "Priya N");
        assert_eq!(priya.total_spent, 685.0);
    }
}

#[cfg(test)]
mod customer_filter_tests {
    use super::*;

    #[tokio::test]
    async fn test_order_count_uses_customer_total() {
        let env = TestEnvironment::setup();
        let mut session = env.customer_session().await;

        session.set_field(FilterField::OrderCount, ">2");
        assert_eq!(mobiles(&session), vec![RAVI]);

        session.set_field(FilterField::OrderCount, ">1");
        assert_eq!(mobiles(&session), vec![RAVI, PRIYA]);
    }

    #[tokio::test]
    async fn test_amount_on_total_spent() {
        let env = TestEnvironment::setup();
        let mut session = env.customer_session().await;

        session.set_field(FilterField::Amount, ">500");
        assert_eq!(mobiles(&session), vec![RAVI, PRIYA]);
    }

    #[tokio::test]
    async fn test_days_on_last_order() {
        let env = TestEnvironment::setup();
        let mut session = env.customer_session().await;

        session.set_field(FilterField::Days, "4");
        assert_eq!(mobiles(&session), vec![PRIYA, ANIL]);
    }

    #[tokio::test]
    async fn test_category_over_all_products() {
        let env = TestEnvironment::setup();
        let mut session = env.customer_session().await;

        session.set_field(FilterField::Category, "Fish");
        assert_eq!(mobiles(&session), vec![PRIYA]);
    }
}

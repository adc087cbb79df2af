//! 会员回馈测试套件
//!
//! 订单数条件按完整数据源统计，不受其他筛选条件影响。

use crate::data::*;
use crate::setup::TestEnvironment;
use targeting_engine::FilterField;

#[cfg(test)]
mod order_count_tests {
    use super::*;

    #[tokio::test]
    async fn test_more_than_two_orders() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;

        session.set_field(FilterField::OrderCount, ">2");

        assert!(session.filtered().iter().all(|o| o.mobile == RAVI));
        assert_eq!(session.filtered().len(), 3);
    }

    #[tokio::test]
    async fn test_count_uses_full_source_not_filtered_result() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;

        // 最近 30 天 Ravi 只有两单，但总共三单
        session.set_field(FilterField::Days, "30");
        session.set_field(FilterField::OrderCount, ">2");

        let ids: Vec<&str> = session.filtered().iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-1001", "ORD-1003"]);
    }

    #[tokio::test]
    async fn test_count_operators() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;

        session.set_field(FilterField::OrderCount, ">=2");
        assert_eq!(session.filtered().len(), 5);

        session.set_field(FilterField::OrderCount, "1");
        let mobiles: Vec<&str> = session.filtered().iter().map(|o| o.mobile.as_str()).collect();
        assert_eq!(mobiles, vec![ANIL]);

        session.set_field(FilterField::OrderCount, "<2");
        assert_eq!(session.filtered().len(), 1);
    }
}

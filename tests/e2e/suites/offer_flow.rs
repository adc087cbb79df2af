//! 优惠发送测试套件
//!
//! 勾选、可用性判断、发送确认和发件箱记录。

use crate::data::*;
use crate::setup::TestEnvironment;
use butcher_shared::SelectionPolicy;
use targeting_engine::{
    Availability, FilterField, OfferDraft, OfferType, TargetingError, UnavailableReason,
};

fn percent(discount: &str) -> OfferDraft {
    OfferDraft::new(OfferType::Percentage, discount, 7)
}

#[cfg(test)]
mod availability_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_selection_rejected() {
        let env = TestEnvironment::setup();
        let session = env.order_session().await;

        assert_eq!(
            session.offer_availability(&percent("10")),
            Availability::Unavailable(UnavailableReason::EmptySelection)
        );

        let result = session.submit_offer(percent("10"), &env.outbox);
        assert!(matches!(
            result,
            Err(TargetingError::OfferUnavailable(UnavailableReason::EmptySelection))
        ));
        assert!(env.outbox.is_empty());
    }

    #[tokio::test]
    async fn test_missing_or_non_positive_discount_rejected() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;
        session.toggle("ORD-1001", true);

        for discount in ["", "0", "-5", "free"] {
            assert_eq!(
                session.offer_availability(&percent(discount)),
                Availability::Unavailable(UnavailableReason::MissingDiscount),
                "discount {:?}",
                discount
            );
        }

        assert_eq!(
            session.offer_availability(&percent("150")),
            Availability::Unavailable(UnavailableReason::DiscountOutOfRange { max: 100.0 })
        );
        assert!(env.outbox.is_empty());
    }
}

#[cfg(test)]
mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn test_two_selected_orders_receive_offer() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;
        session.set_field(FilterField::Amount, ">1000");
        session.toggle_all(true);
        assert!(session.is_all_selected());

        let confirmation = session.submit_offer(percent("10"), &env.outbox).unwrap();

        assert_eq!(confirmation.targeted_count, 2);
        assert_eq!(confirmation.targeted_keys, vec!["ORD-1001", "ORD-1003"]);
        assert_eq!(confirmation.issued_at, fixed_now());
        assert_eq!(
            confirmation.message,
            "已向 2 笔订单发送优惠：10% 折扣，有效期 7 天"
        );

        let toast = env.outbox.latest().unwrap();
        assert_eq!(toast.body, confirmation.message);

        // 发送后选中集合保持不变
        assert_eq!(session.selection().len(), 2);
    }

    #[tokio::test]
    async fn test_select_all_on_change_policy() {
        let env = TestEnvironment::setup().with_policy(SelectionPolicy::SelectAllOnChange);
        let mut session = env.order_session().await;
        assert_eq!(session.selection().len(), 6);

        session.set_field(FilterField::Category, "chicken");
        assert!(session.is_all_selected());

        let draft = OfferDraft::new(OfferType::FreeDelivery, "40", 3);
        let confirmation = session.submit_offer(draft, &env.outbox).unwrap();
        assert_eq!(
            confirmation.targeted_keys,
            vec!["ORD-1003", "ORD-1005", "ORD-1006"]
        );
        assert_eq!(
            confirmation.message,
            "已向 3 笔订单发送优惠：免配送费（最高 40 元），有效期 3 天"
        );
    }

    #[tokio::test]
    async fn test_loyal_customers_offer() {
        let env = TestEnvironment::setup();
        let mut session = env.customer_session().await;
        session.set_field(FilterField::OrderCount, ">2");
        session.toggle_all(true);

        let draft = OfferDraft::new(OfferType::FixedAmount, "100", 14);
        let confirmation = session.submit_offer(draft, &env.outbox).unwrap();

        assert_eq!(confirmation.targeted_keys, vec![RAVI]);
        assert_eq!(
            confirmation.message,
            "已向 1 位客户发送优惠：立减 100 元，有效期 14 天"
        );
        assert_eq!(env.outbox.len(), 1);
    }

    #[tokio::test]
    async fn test_narrowing_filter_drops_hidden_selection() {
        let env = TestEnvironment::setup();
        let mut session = env.order_session().await;
        session.toggle("ORD-1002", true);
        session.toggle("ORD-1003", true);

        session.set_field(FilterField::Days, "30");
        let confirmation = session.submit_offer(percent("5"), &env.outbox).unwrap();

        assert_eq!(confirmation.targeted_keys, vec!["ORD-1003"]);
    }
}

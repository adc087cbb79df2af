//! 优惠定向动作
//!
//! 把当前选中集合与优惠草稿打包成一次"发送"。没有任何网络调用，
//! 结果只是交给 [`ConfirmationSink`] 的一条确认消息，草稿随即丢弃。

use crate::error::{Result, TargetingError, UnavailableReason};
use butcher_shared::TargetingConfig;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};
use validator::Validate;

/// 优惠类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferType {
    /// 折扣百分比（如 10% off）
    #[default]
    Percentage,
    /// 固定金额（如减 50 元）
    FixedAmount,
    /// 免配送费，额度为可抵扣的最高配送费
    FreeDelivery,
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Percentage => "percentage",
            Self::FixedAmount => "fixed_amount",
            Self::FreeDelivery => "free_delivery",
        };
        write!(f, "{}", s)
    }
}

impl OfferType {
    /// 面向用户的优惠条款描述
    pub fn describe(&self, discount: f64) -> String {
        match self {
            Self::Percentage => format!("{}% 折扣", discount),
            Self::FixedAmount => format!("立减 {} 元", discount),
            Self::FreeDelivery => format!("免配送费（最高 {} 元）", discount),
        }
    }
}

/// 优惠草稿
///
/// 额度保留输入框原文，由 [`OfferDraft::discount`] 解析。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OfferDraft {
    pub offer_type: OfferType,
    pub discount_value: String,
    #[validate(range(min = 1, max = 365, message = "有效天数必须在1-365之间"))]
    pub validity_days: u32,
}

impl OfferDraft {
    pub fn new(offer_type: OfferType, discount_value: impl Into<String>, validity_days: u32) -> Self {
        Self {
            offer_type,
            discount_value: discount_value.into(),
            validity_days,
        }
    }

    /// 大于 0 的有限额度，否则 None
    pub fn discount(&self) -> Option<f64> {
        self.discount_value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
    }
}

/// 发送按钮是否可用
#[derive(Debug, Clone, PartialEq)]
pub enum Availability {
    Available { discount: f64 },
    Unavailable(UnavailableReason),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// 发送成功后的确认
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferConfirmation {
    pub targeted_count: usize,
    pub targeted_keys: Vec<String>,
    pub offer_type: OfferType,
    pub discount: f64,
    pub validity_days: u32,
    pub issued_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub message: String,
}

/// 确认消息的接收方（界面上就是一条 toast）
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationSink: Send + Sync {
    fn notify(&self, confirmation: &OfferConfirmation);
}

/// 优惠发送动作
#[derive(Debug, Clone)]
pub struct OfferAction {
    max_percentage: f64,
}

impl Default for OfferAction {
    fn default() -> Self {
        Self::new(&TargetingConfig::default())
    }
}

impl OfferAction {
    pub fn new(config: &TargetingConfig) -> Self {
        Self {
            max_percentage: config.max_percentage,
        }
    }

    /// 判断当前选中数量和草稿能否发送
    pub fn availability(&self, selected: usize, draft: &OfferDraft) -> Availability {
        if selected == 0 {
            return Availability::Unavailable(UnavailableReason::EmptySelection);
        }

        let Some(discount) = draft.discount() else {
            return Availability::Unavailable(UnavailableReason::MissingDiscount);
        };

        if draft.offer_type == OfferType::Percentage && discount > self.max_percentage {
            return Availability::Unavailable(UnavailableReason::DiscountOutOfRange {
                max: self.max_percentage,
            });
        }

        if let Err(errors) = draft.validate() {
            return Availability::Unavailable(UnavailableReason::InvalidDraft(errors.to_string()));
        }

        Availability::Available { discount }
    }

    /// 发送优惠
    ///
    /// `targeted_keys` 为当前选中的记录键，`unit` 是消息里的计数单位；
    /// 不可用时返回 [`TargetingError::OfferUnavailable`]，不会通知 sink。
    pub fn submit(
        &self,
        targeted_keys: Vec<String>,
        unit: &str,
        draft: OfferDraft,
        now: DateTime<Utc>,
        sink: &dyn ConfirmationSink,
    ) -> Result<OfferConfirmation> {
        let discount = match self.availability(targeted_keys.len(), &draft) {
            Availability::Available { discount } => discount,
            Availability::Unavailable(reason) => {
                warn!(reason = %reason, selected = targeted_keys.len(), "offer submission rejected");
                return Err(TargetingError::OfferUnavailable(reason));
            }
        };

        let targeted_count = targeted_keys.len();
        let message = format!(
            "已向 {} {}发送优惠：{}，有效期 {} 天",
            targeted_count,
            unit,
            draft.offer_type.describe(discount),
            draft.validity_days
        );

        let confirmation = OfferConfirmation {
            targeted_count,
            targeted_keys,
            offer_type: draft.offer_type,
            discount,
            validity_days: draft.validity_days,
            issued_at: now,
            valid_until: now + Duration::days(i64::from(draft.validity_days)),
            message,
        };

        info!(
            targeted = targeted_count,
            offer_type = %confirmation.offer_type,
            discount,
            validity_days = confirmation.validity_days,
            "offer sent"
        );
        sink.notify(&confirmation);

        Ok(confirmation)
    }
}

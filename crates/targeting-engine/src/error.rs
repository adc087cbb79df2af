//! 定向引擎错误类型

use std::fmt;
use thiserror::Error;

/// 优惠动作不可用的原因
///
/// 前端据此禁用发送按钮，库层在提交时以错误形式返回。
#[derive(Debug, Clone, PartialEq)]
pub enum UnavailableReason {
    EmptySelection,
    MissingDiscount,
    DiscountOutOfRange { max: f64 },
    InvalidDraft(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "未选择任何记录"),
            Self::MissingDiscount => write!(f, "优惠额度缺失或不大于 0"),
            Self::DiscountOutOfRange { max } => write!(f, "折扣比例不能超过 {}%", max),
            Self::InvalidDraft(msg) => write!(f, "优惠草稿无效: {}", msg),
        }
    }
}

#[derive(Debug, Error)]
pub enum TargetingError {
    #[error("优惠不可发送: {0}")]
    OfferUnavailable(UnavailableReason),

    #[error("JSON 序列化错误: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TargetingError>;

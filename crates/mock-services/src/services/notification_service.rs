//! Mock 通知服务
//!
//! 优惠发送成功后界面弹出的提示（toast）。这里只把确认消息记录在内存里，
//! 供 CLI 打印和测试断言。

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use targeting_engine::{ConfirmationSink, OfferConfirmation};
use tracing::info;
use uuid::Uuid;

/// 提示记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub body: String,
    pub targeted_count: usize,
    pub shown_at: DateTime<Utc>,
}

impl From<&OfferConfirmation> for Toast {
    fn from(confirmation: &OfferConfirmation) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            title: "优惠已发送".to_string(),
            body: confirmation.message.clone(),
            targeted_count: confirmation.targeted_count,
            shown_at: confirmation.issued_at,
        }
    }
}

/// 内存中的提示发件箱
///
/// 克隆后共享同一份记录
#[derive(Debug, Clone, Default)]
pub struct NotificationOutbox {
    toasts: Arc<RwLock<Vec<Toast>>>,
}

impl NotificationOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按弹出顺序返回全部提示
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    pub fn latest(&self) -> Option<Toast> {
        self.toasts.read().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.toasts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.read().is_empty()
    }

    pub fn clear(&self) {
        self.toasts.write().clear();
    }
}

impl ConfirmationSink for NotificationOutbox {
    fn notify(&self, confirmation: &OfferConfirmation) {
        let toast = Toast::from(confirmation);
        info!(toast_id = %toast.id, targeted = toast.targeted_count, "{}", toast.body);
        self.toasts.write().push(toast);
    }
}

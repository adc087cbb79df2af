//! 定向营销引擎
//!
//! 管理后台"客户分析 / 会员回馈 / 看板筛选"共用的筛选与发券逻辑：
//! - 自由文本比较条件解析（`>1000`、`>=5`），无法解析即视为未启用
//! - 固定阶段顺序的筛选流水线（AND 语义，保持原有顺序）
//! - 按手机号的客户聚合
//! - 选中集合及其同步策略
//! - 优惠草稿校验与发送确认

pub mod aggregate;
pub mod clock;
pub mod error;
pub mod evaluator;
pub mod filter;
pub mod models;
pub mod offer;
pub mod operators;
pub mod predicate;
pub mod selection;
pub mod session;

pub use aggregate::aggregate_customers;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, TargetingError, UnavailableReason};
pub use evaluator::{CompiledFilter, PredicateEvaluator};
pub use filter::{FilterField, FilterPipeline, FilterStage, FilterState, order_counts};
pub use models::{CustomerSummary, LineItem, OrderRecord, OrderStatus, Targetable};
pub use offer::{
    Availability, ConfirmationSink, OfferAction, OfferConfirmation, OfferDraft, OfferType,
};
pub use operators::ComparisonOperator;
pub use predicate::{CategoryMatch, DateWindow, NumericPredicate, TextMatch, ThresholdInput};
pub use selection::SelectionSet;
pub use session::TargetingSession;

pub use butcher_shared::{SelectionPolicy, TargetingConfig};

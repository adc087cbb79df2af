//! 谓词评估器
//!
//! 把一份 [`FilterState`] 编译成已解析的谓词集合，再按阶段逐条评估记录。

use crate::filter::{FilterStage, FilterState};
use crate::models::Targetable;
use crate::predicate::{CategoryMatch, DateWindow, TextMatch, ThresholdInput};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// 单字段评估入口
///
/// 每次调用都重新解析输入文本，适合一次性的判断；流水线内部使用 [`CompiledFilter`]。
pub struct PredicateEvaluator;

impl PredicateEvaluator {
    /// `">1000"` 之类的比较文本作用于数值，无法解析时返回 true
    pub fn threshold(text: &str, value: f64) -> bool {
        ThresholdInput::parse(text).matches(value)
    }

    /// 最近 N 天，N 不是正整数时返回 true
    pub fn within_past_days(text: &str, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        DateWindow::parse(text).matches(timestamp, now)
    }

    /// 任一商品名包含品类名即返回 true
    pub fn category<'a, I>(text: &str, item_names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        CategoryMatch::parse(text).matches(item_names)
    }
}

/// 编译后的筛选条件
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    pub name: TextMatch,
    pub mobile: TextMatch,
    pub amount: ThresholdInput,
    pub window: DateWindow,
    pub category: CategoryMatch,
    pub order_count: ThresholdInput,
    now: DateTime<Utc>,
}

impl CompiledFilter {
    pub fn compile(state: &FilterState, now: DateTime<Utc>) -> Self {
        Self {
            name: TextMatch::case_insensitive(&state.name),
            mobile: TextMatch::exact_case(&state.mobile),
            amount: ThresholdInput::parse(&state.amount),
            window: DateWindow::parse(&state.days),
            category: CategoryMatch::parse(&state.category),
            order_count: ThresholdInput::parse(&state.order_count),
            now,
        }
    }

    pub fn is_active(&self, stage: FilterStage) -> bool {
        match stage {
            FilterStage::Text => self.name.is_active() || self.mobile.is_active(),
            FilterStage::Amount => self.amount.is_active(),
            FilterStage::DateWindow => self.window.is_active(),
            FilterStage::Category => self.category.is_active(),
            FilterStage::OrderCount => self.order_count.is_active(),
        }
    }

    pub fn active_stages(&self) -> Vec<FilterStage> {
        FilterStage::ORDER
            .into_iter()
            .filter(|stage| self.is_active(*stage))
            .collect()
    }

    /// 评估单个阶段
    ///
    /// `order_counts` 必须基于完整数据源统计，不能来自部分筛选后的结果。
    pub fn passes<R: Targetable>(
        &self,
        stage: FilterStage,
        record: &R,
        order_counts: &HashMap<&str, usize>,
    ) -> bool {
        match stage {
            FilterStage::Text => {
                self.name.matches(record.display_name()) && self.mobile.matches(record.mobile())
            }
            FilterStage::Amount => self.amount.matches(record.amount()),
            FilterStage::DateWindow => self.window.matches(record.timestamp(), self.now),
            FilterStage::Category => self.category.matches(record.item_names()),
            FilterStage::OrderCount => {
                let count = record.order_count_hint().unwrap_or_else(|| {
                    order_counts
                        .get(record.customer_identity())
                        .copied()
                        .unwrap_or(0)
                });
                self.order_count.matches(count as f64)
            }
        }
    }

    /// 依次评估全部阶段（AND）
    pub fn passes_all<R: Targetable>(
        &self,
        record: &R,
        order_counts: &HashMap<&str, usize>,
    ) -> bool {
        FilterStage::ORDER
            .into_iter()
            .all(|stage| !self.is_active(stage) || self.passes(stage, record, order_counts))
    }
}

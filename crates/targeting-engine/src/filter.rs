//! 筛选流水线
//!
//! 纯函数：输入完整记录列表和当前筛选状态，返回保持原有顺序的子序列。
//! 不修改输入，也不缓存上一次结果；数据量很小，每次变化都全量重算。

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::evaluator::CompiledFilter;
use crate::models::Targetable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 与界面输入框一一对应的筛选字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Name,
    Mobile,
    Amount,
    Days,
    Category,
    OrderCount,
}

/// 当前筛选状态
///
/// 保存输入框的原始文本，每次按键都会更新；解析放到流水线里做。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub name: String,
    pub mobile: String,
    /// 金额比较，如 `">1000"`
    pub amount: String,
    /// 最近 N 天
    pub days: String,
    pub category: String,
    /// 订单数比较，如 `">=5"`
    pub order_count: String,
}

impl FilterState {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Mobile => &self.mobile,
            FilterField::Amount => &self.amount,
            FilterField::Days => &self.days,
            FilterField::Category => &self.category,
            FilterField::OrderCount => &self.order_count,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Name => self.name = value,
            FilterField::Mobile => self.mobile = value,
            FilterField::Amount => self.amount = value,
            FilterField::Days => self.days = value,
            FilterField::Category => self.category = value,
            FilterField::OrderCount => self.order_count = value,
        }
    }

    /// "清除筛选"
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// 所有输入框都为空白
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.mobile,
            &self.amount,
            &self.days,
            &self.category,
            &self.order_count,
        ]
        .iter()
        .all(|value| value.trim().is_empty())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// 流水线阶段，顺序固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterStage {
    /// 姓名 / 手机号子串
    Text,
    Amount,
    DateWindow,
    Category,
    OrderCount,
}

impl FilterStage {
    pub const ORDER: [FilterStage; 5] = [
        FilterStage::Text,
        FilterStage::Amount,
        FilterStage::DateWindow,
        FilterStage::Category,
        FilterStage::OrderCount,
    ];
}

impl fmt::Display for FilterStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Amount => "amount",
            Self::DateWindow => "date_window",
            Self::Category => "category",
            Self::OrderCount => "order_count",
        };
        write!(f, "{}", s)
    }
}

/// 按客户标识统计完整数据源中的记录数
pub fn order_counts<R: Targetable>(records: &[R]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.customer_identity()).or_insert(0) += 1;
    }
    counts
}

/// 筛选流水线
#[derive(Clone)]
pub struct FilterPipeline {
    clock: Arc<dyn Clock>,
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl fmt::Debug for FilterPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPipeline").finish_non_exhaustive()
    }
}

impl FilterPipeline {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// 执行筛选
    ///
    /// 各阶段按 [`FilterStage::ORDER`] 依次收窄；未启用的阶段直接跳过。
    /// 订单数阶段的计数始终来自完整的 `records`。
    pub fn apply<R: Targetable>(&self, records: &[R], state: &FilterState) -> Vec<R> {
        let compiled = CompiledFilter::compile(state, self.clock.now());
        let stages = compiled.active_stages();
        if stages.is_empty() {
            return records.to_vec();
        }

        let counts = if stages.contains(&FilterStage::OrderCount) {
            order_counts(records)
        } else {
            HashMap::new()
        };

        let mut survivors: Vec<&R> = records.iter().collect();
        for stage in stages {
            survivors.retain(|record| compiled.passes(stage, *record, &counts));
            debug!(stage = %stage, remaining = survivors.len(), "filter stage applied");
        }

        debug!(
            total = records.len(),
            matched = survivors.len(),
            "filter pipeline finished"
        );
        survivors.into_iter().cloned().collect()
    }
}

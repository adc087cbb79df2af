//! 筛选谓词
//!
//! 把输入框里的自由文本解析成强类型谓词。解析失败一律视为"未启用"，
//! 对应的筛选条件放行所有记录，而不是报错。

use crate::operators::ComparisonOperator;
use chrono::{DateTime, TimeDelta, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::trace;

/// `[操作符][数字]`，允许首尾和中间的空白
static COMPARISON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(>=|<=|>|<|=)?\s*([+-]?\d+(?:\.\d+)?)\s*$")
        .expect("comparison pattern is a valid regex")
});

/// 操作符 + 阈值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericPredicate {
    pub operator: ComparisonOperator,
    pub threshold: f64,
}

impl NumericPredicate {
    pub fn new(operator: ComparisonOperator, threshold: f64) -> Self {
        Self {
            operator,
            threshold,
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        self.operator.apply(value, self.threshold)
    }
}

/// 数值阈值输入
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThresholdInput {
    #[default]
    Inactive,
    Active(NumericPredicate),
}

impl ThresholdInput {
    /// 解析 `">1000"`、`">= 5"`、`"20"` 这类输入
    ///
    /// 空串、`"abc"`、`">>5"`、`"5-10"` 等都得到 `Inactive`。
    pub fn parse(text: &str) -> Self {
        let Some(caps) = COMPARISON_PATTERN.captures(text) else {
            if !text.trim().is_empty() {
                trace!(input = text, "comparison input not recognised, filter inactive");
            }
            return Self::Inactive;
        };

        let operator = match caps.get(1) {
            Some(symbol) => ComparisonOperator::from_symbol(symbol.as_str()),
            None => Some(ComparisonOperator::Eq),
        };
        let threshold = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok());

        match (operator, threshold) {
            (Some(operator), Some(threshold)) if threshold.is_finite() => {
                Self::Active(NumericPredicate::new(operator, threshold))
            }
            _ => {
                trace!(input = text, "comparison threshold not usable, filter inactive");
                Self::Inactive
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// 未启用时放行
    pub fn matches(&self, value: f64) -> bool {
        match self {
            Self::Inactive => true,
            Self::Active(predicate) => predicate.matches(value),
        }
    }
}

/// "最近 N 天" 时间窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    Inactive,
    PastDays(u32),
}

impl DateWindow {
    /// 只接受正整数天数，其余输入（含 0 和负数）视为未启用
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<u32>() {
            Ok(0) | Err(_) => Self::Inactive,
            Ok(days) => Self::PastDays(days),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::PastDays(_))
    }

    /// `now - N 天`
    ///
    /// 天数大到超出可表示的时间范围时返回 `None`，窗口覆盖全部历史。
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Inactive => None,
            Self::PastDays(days) => TimeDelta::try_days(i64::from(*days))
                .and_then(|span| now.checked_sub_signed(span)),
        }
    }

    pub fn matches(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.cutoff(now) {
            None => true,
            Some(cutoff) => timestamp >= cutoff,
        }
    }
}

/// 子串匹配（姓名不区分大小写，手机号原样匹配）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextMatch {
    needle: Option<String>,
    case_insensitive: bool,
}

impl TextMatch {
    pub fn case_insensitive(text: &str) -> Self {
        let trimmed = text.trim();
        Self {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
            case_insensitive: true,
        }
    }

    pub fn exact_case(text: &str) -> Self {
        let trimmed = text.trim();
        Self {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            case_insensitive: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        match &self.needle {
            None => true,
            Some(needle) if self.case_insensitive => haystack.to_lowercase().contains(needle),
            Some(needle) => haystack.contains(needle.as_str()),
        }
    }
}

/// 品类匹配：任一商品名包含品类名（不区分大小写）即通过
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryMatch {
    category: Option<String>,
}

impl CategoryMatch {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        Self {
            category: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.category.is_some()
    }

    pub fn matches<'a, I>(&self, item_names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match &self.category {
            None => true,
            Some(category) => item_names
                .into_iter()
                .any(|name| name.to_lowercase().contains(category.as_str())),
        }
    }
}

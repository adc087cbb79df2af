//! 比较操作符定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 数值比较操作符
///
/// 对应筛选输入框里可以手写的 `>`、`>=`、`<`、`<=`、`=`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    Gt,
    Gte,
    Lt,
    Lte,
    /// 省略操作符时按相等处理
    #[default]
    Eq,
}

impl ComparisonOperator {
    /// 从输入符号解析操作符，不认识的符号返回 None
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Gte),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Lte),
            "=" => Some(Self::Eq),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Eq => "=",
        }
    }

    /// 以 `value <op> threshold` 的方向比较
    ///
    /// 两侧先取整到分再比较：订单总额由明细小计累加而来，
    /// 304.2 可能实际存成 304.20000000000005。
    pub fn apply(&self, value: f64, threshold: f64) -> bool {
        let (value, threshold) = (to_cents(value), to_cents(threshold));
        match self {
            Self::Gt => value > threshold,
            Self::Gte => value >= threshold,
            Self::Lt => value < threshold,
            Self::Lte => value <= threshold,
            Self::Eq => value == threshold,
        }
    }
}

fn to_cents(amount: f64) -> f64 {
    (amount * 100.0).round()
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

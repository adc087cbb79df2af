//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::observability::ObservabilityConfig;

/// 选中集合在筛选结果变化时的同步策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// 保留人工勾选，只剔除已不在结果中的记录
    #[default]
    PreserveManual,
    /// 每次筛选变化后自动全选新的结果
    SelectAllOnChange,
}

/// 定向营销配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    pub selection_policy: SelectionPolicy,
    /// 新建优惠草稿的默认有效天数
    pub default_validity_days: u32,
    /// 百分比折扣允许的上限
    pub max_percentage: f64,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            selection_policy: SelectionPolicy::default(),
            default_validity_days: 7,
            max_percentage: 100.0,
        }
    }
}

/// 模拟数据配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MockDataConfig {
    /// 模拟加载延迟（毫秒），0 表示不延迟
    pub latency_ms: u64,
    /// 随机种子，固定种子可复现同一份数据
    pub seed: u64,
    pub customer_count: usize,
    pub min_orders_per_customer: usize,
    pub max_orders_per_customer: usize,
    /// 订单时间分布在过去多少天内
    pub history_days: i64,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        Self {
            latency_ms: 800,
            seed: 42,
            customer_count: 20,
            min_orders_per_customer: 1,
            max_orders_per_customer: 6,
            history_days: 90,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub targeting: TargetingConfig,
    #[serde(default)]
    pub mock: MockDataConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. .env 文件（仅注入进程环境变量）
    /// 2. config/default.toml（默认配置）
    /// 3. config/{environment}.toml（环境特定配置）
    /// 4. config/{service_name}.toml（服务特定配置）
    /// 5. 环境变量（BUTCHER_ 前缀，如 BUTCHER_MOCK__LATENCY_MS -> mock.latency_ms）
    pub fn load(service_name: &str) -> Result<Self> {
        // .env 不存在是正常情况
        let _ = dotenvy::dotenv();

        let env = std::env::var("BUTCHER_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            .add_source(File::from(Path::new(&config_dir).join("default.toml")).required(false))
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", env))).required(false),
            )
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", service_name)))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("BUTCHER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Ok(builder.build()?.try_deserialize()?)
    }
}

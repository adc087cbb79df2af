//! 订单数据集文件
//!
//! `populate` 命令输出、`filter` / `customers` / `offer` 命令读取的数据文件。
//! 按扩展名选择格式：`.yaml` / `.yml` 为 YAML，其余按 JSON 处理。

use std::fs;
use std::path::Path;

use butcher_shared::{ButcherError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use targeting_engine::OrderRecord;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// 订单数据集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    pub orders: Vec<OrderRecord>,
}

impl Dataset {
    pub fn new(orders: Vec<OrderRecord>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: Some(generated_at),
            orders,
        }
    }

    pub fn parse(content: &str, format: DatasetFormat) -> Result<Self> {
        match format {
            DatasetFormat::Json => Ok(serde_json::from_str(content)?),
            DatasetFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ButcherError::Dataset(format!("YAML 解析失败: {}", e))),
        }
    }

    pub fn render(&self, format: DatasetFormat) -> Result<String> {
        match format {
            DatasetFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            DatasetFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| ButcherError::Dataset(format!("YAML 序列化失败: {}", e))),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let dataset = Self::parse(&content, DatasetFormat::from_path(path))?;
        info!(path = %path.display(), orders = dataset.orders.len(), "dataset loaded");
        Ok(dataset)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render(DatasetFormat::from_path(path))?)?;
        info!(path = %path.display(), orders = self.orders.len(), "dataset written");
        Ok(())
    }
}

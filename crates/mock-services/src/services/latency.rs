//! 模拟加载延迟
//!
//! 后台页面加载数据时会有一段等待，测试中换成 [`NoLatency`]。

use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait Latency: Send + Sync {
    async fn wait(&self);
}

/// 固定时长的延迟
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// 立即返回
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self) {}
}

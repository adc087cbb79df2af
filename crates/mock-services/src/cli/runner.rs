//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。
//! 把命令行参数转成筛选状态和选中集合，再交给定向会话处理。

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use butcher_shared::AppConfig;
use targeting_engine::{
    Availability, Clock, FilterPipeline, FilterState, OfferConfirmation, OfferDraft,
    OrderRecord, SystemClock, Targetable, TargetingSession, aggregate_customers,
};

use super::commands::{FilterArgs, OfferKind, SourceArgs};
use crate::dataset::Dataset;
use crate::generators::{DataGenerator, GenerationStats, GeneratorConfig};
use crate::services::{NoLatency, NotificationOutbox, OrderService};
use crate::store::MemoryStore;

/// offer 命令的参数
#[derive(Debug, Clone)]
pub struct OfferRequest {
    pub customers: bool,
    pub select_all: bool,
    pub select: Vec<String>,
    pub offer_type: OfferKind,
    pub discount: String,
    pub validity_days: Option<u32>,
}

/// 命令执行器
///
/// 持有应用配置与时钟，是 CLI 与定向引擎之间的桥梁。
pub struct CommandRunner {
    config: AppConfig,
    clock: Arc<dyn Clock>,
    no_delay: bool,
    outbox: NotificationOutbox,
}

impl CommandRunner {
    pub fn new(config: AppConfig, no_delay: bool) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
            no_delay,
            outbox: NotificationOutbox::new(),
        }
    }

    /// 替换时钟，测试中固定"现在"
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn outbox(&self) -> &NotificationOutbox {
        &self.outbox
    }

    /// 执行 filter 命令，返回打印的表格
    pub async fn run_filter(&self, source: &SourceArgs, filters: FilterArgs) -> Result<String> {
        let orders = self.load_orders(source).await?;
        let session = self.session(orders, filters.into());
        info!(matched = session.filtered().len(), "orders filtered");
        Ok(render_table(session.filtered(), session.source().len()))
    }

    /// 执行 customers 命令
    pub async fn run_customers(&self, source: &SourceArgs, filters: FilterArgs) -> Result<String> {
        let orders = self.load_orders(source).await?;
        let session = self.session(aggregate_customers(&orders), filters.into());
        info!(matched = session.filtered().len(), "customers filtered");
        Ok(render_table(session.filtered(), session.source().len()))
    }

    /// 执行 offer 命令
    pub async fn run_offer(
        &self,
        source: &SourceArgs,
        filters: FilterArgs,
        request: OfferRequest,
    ) -> Result<OfferConfirmation> {
        let orders = self.load_orders(source).await?;
        let state: FilterState = filters.into();

        if request.customers {
            let mut session = self.session(aggregate_customers(&orders), state);
            self.send_offer(&mut session, &request)
        } else {
            let mut session = self.session(orders, state);
            self.send_offer(&mut session, &request)
        }
    }

    /// 执行 populate 命令
    ///
    /// 生成订单数据，可输出到文件供其他命令读取。
    pub fn run_populate(
        &self,
        customers: usize,
        orders: &str,
        seed: Option<u64>,
        output: Option<&str>,
    ) -> Result<GenerationStats> {
        let (min_orders, max_orders) = parse_range(orders)?;
        let config = GeneratorConfig {
            customer_count: customers,
            orders_per_customer: min_orders..=max_orders,
            history_days: self.config.mock.history_days.max(1),
            seed: seed.unwrap_or(self.config.mock.seed),
        };
        info!(customers, min_orders, max_orders, seed = config.seed, "批量生成订单数据");

        let now = self.clock.now();
        let store: MemoryStore<OrderRecord> = MemoryStore::new();
        let stats = DataGenerator::new(config).populate_store(&store, now);

        if let Some(path) = output {
            Dataset::new(store.list(), now)
                .save(path)
                .with_context(|| format!("写入数据集失败: {}", path))?;
        }

        Ok(stats)
    }

    // ========================================================================
    // 辅助方法
    // ========================================================================

    async fn load_orders(&self, source: &SourceArgs) -> Result<Vec<OrderRecord>> {
        if let Some(path) = &source.input {
            let dataset = Dataset::load(path)
                .inspect_err(|err| warn!(path = %path, code = err.code(), "dataset unavailable"))
                .with_context(|| format!("读取数据集失败: {}", path))?;
            return Ok(dataset.orders);
        }

        let service = OrderService::from_config(&self.config.mock, self.clock.now());
        let service = if self.no_delay {
            OrderService::new(service.store().clone(), Arc::new(NoLatency))
        } else {
            service
        };
        Ok(service.list_orders().await)
    }

    fn session<R: Targetable>(&self, records: Vec<R>, state: FilterState) -> TargetingSession<R> {
        let mut session = TargetingSession::new(
            records,
            FilterPipeline::new(Arc::clone(&self.clock)),
            &self.config.targeting,
        );
        session.set_state(state);
        session
    }

    fn send_offer<R: Targetable>(
        &self,
        session: &mut TargetingSession<R>,
        request: &OfferRequest,
    ) -> Result<OfferConfirmation> {
        if request.select_all {
            session.toggle_all(true);
        }
        for key in &request.select {
            if !session.toggle(key, true) {
                bail!("记录 {} 不在当前筛选结果中", key);
            }
        }

        let draft = OfferDraft::new(
            request.offer_type.into(),
            request.discount.clone(),
            request
                .validity_days
                .unwrap_or(self.config.targeting.default_validity_days),
        );
        if let Availability::Unavailable(reason) = session.offer_availability(&draft) {
            bail!("无法发送优惠: {}", reason);
        }

        Ok(session.submit_offer(draft, &self.outbox)?)
    }
}

/// 解析范围字符串 (格式: "min-max"，允许 min == max)
fn parse_range(range_str: &str) -> Result<(usize, usize)> {
    let Some((min, max)) = range_str.split_once('-') else {
        bail!("无效的范围格式: {}，预期格式: min-max", range_str);
    };

    let min: usize = min
        .trim()
        .parse()
        .with_context(|| format!("无效的最小值: {}", min))?;
    let max: usize = max
        .trim()
        .parse()
        .with_context(|| format!("无效的最大值: {}", max))?;

    if min > max {
        bail!("无效的范围: min ({}) 不能大于 max ({})", min, max);
    }

    Ok((min, max))
}

/// 渲染筛选结果表格
fn render_table<R: Targetable>(records: &[R], total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<24} {:<12} {:>10}  {}",
        "KEY", "NAME", "MOBILE", "AMOUNT", "DATE"
    );
    let _ = writeln!(out, "{}", "-".repeat(72));
    for record in records {
        let _ = writeln!(
            out,
            "{:<12} {:<24} {:<12} {:>10.2}  {}",
            record.key(),
            record.display_name(),
            record.mobile(),
            record.amount(),
            format_date(record.timestamp())
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(72));
    let _ = writeln!(out, "{} / {} 条记录", records.len(), total);
    out
}

fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

// ============================================================================
// 单元测试
// ============================================================================

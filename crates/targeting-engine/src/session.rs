//! 定向会话
//!
//! 一个管理页面实例持有的全部可变状态：数据源、筛选状态、筛选结果和选中集合。
//! 任何输入变化都会触发全量重算，再按策略同步选中集合。

use crate::error::Result;
use crate::filter::{FilterField, FilterPipeline, FilterState};
use crate::models::Targetable;
use crate::offer::{Availability, ConfirmationSink, OfferAction, OfferConfirmation, OfferDraft};
use crate::selection::SelectionSet;
use butcher_shared::TargetingConfig;
use tracing::{debug, warn};

pub struct TargetingSession<R: Targetable> {
    source: Vec<R>,
    state: FilterState,
    filtered: Vec<R>,
    selection: SelectionSet,
    pipeline: FilterPipeline,
    action: OfferAction,
}

impl<R: Targetable> TargetingSession<R> {
    /// 创建会话并立即计算一次筛选结果
    pub fn new(source: Vec<R>, pipeline: FilterPipeline, config: &TargetingConfig) -> Self {
        let mut session = Self {
            source,
            state: FilterState::default(),
            filtered: Vec::new(),
            selection: SelectionSet::new(config.selection_policy),
            pipeline,
            action: OfferAction::new(config),
        };
        session.recompute();
        session
    }

    fn recompute(&mut self) {
        self.filtered = self.pipeline.apply(&self.source, &self.state);
        self.selection
            .reconcile(self.filtered.iter().map(Targetable::key));
        debug!(
            source = self.source.len(),
            filtered = self.filtered.len(),
            selected = self.selection.len(),
            "targeting session recomputed"
        );
    }

    /// 单个输入框变化
    pub fn set_field(&mut self, field: FilterField, value: impl Into<String>) {
        self.state.set(field, value);
        self.recompute();
    }

    /// 整体替换筛选状态（例如恢复保存的筛选）
    pub fn set_state(&mut self, state: FilterState) {
        self.state = state;
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.state.clear();
        self.recompute();
    }

    /// 数据源变化（例如模拟加载完成）
    pub fn replace_source(&mut self, source: Vec<R>) {
        self.source = source;
        self.recompute();
    }

    pub fn source(&self) -> &[R] {
        &self.source
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// 勾选或取消单行；不在当前筛选结果中的键被忽略并返回 false
    pub fn toggle(&mut self, key: &str, checked: bool) -> bool {
        if !self.filtered.iter().any(|record| record.key() == key) {
            warn!(key, "ignoring selection of a record outside the filtered result");
            return false;
        }
        self.selection.select_one(key, checked);
        true
    }

    pub fn toggle_all(&mut self, checked: bool) {
        self.selection
            .select_all(self.filtered.iter().map(Targetable::key), checked);
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.filtered.len())
    }

    /// 选中的记录，按筛选结果顺序
    pub fn selected_records(&self) -> Vec<&R> {
        self.filtered
            .iter()
            .filter(|record| self.selection.contains(record.key()))
            .collect()
    }

    pub fn offer_availability(&self, draft: &OfferDraft) -> Availability {
        self.action.availability(self.selection.len(), draft)
    }

    /// 向选中记录发送优惠，草稿在发送后被消费
    pub fn submit_offer(
        &self,
        draft: OfferDraft,
        sink: &dyn ConfirmationSink,
    ) -> Result<OfferConfirmation> {
        let keys = self
            .selected_records()
            .into_iter()
            .map(|record| record.key().to_string())
            .collect();
        self.action
            .submit(keys, R::TARGET_UNIT, draft, self.pipeline.clock().now(), sink)
    }
}

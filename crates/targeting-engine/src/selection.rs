//! 选中集合管理
//!
//! 记录被勾选用于批量发放优惠的记录键。筛选结果变化后必须调用
//! [`SelectionSet::reconcile`]，保证集合里不存在已被筛掉的键。

use butcher_shared::SelectionPolicy;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    policy: SelectionPolicy,
    keys: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            keys: BTreeSet::new(),
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// 表头"全选"复选框
    pub fn select_all<'a, I>(&mut self, filtered_keys: I, checked: bool)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.keys.clear();
        if checked {
            self.keys
                .extend(filtered_keys.into_iter().map(str::to_string));
        }
    }

    /// 单行复选框
    pub fn select_one(&mut self, key: &str, checked: bool) {
        if checked {
            self.keys.insert(key.to_string());
        } else {
            self.keys.remove(key);
        }
    }

    /// 选中数量等于筛选结果数量且结果非空
    pub fn is_all_selected(&self, filtered_len: usize) -> bool {
        filtered_len > 0 && self.keys.len() == filtered_len
    }

    /// 筛选结果变化后按策略同步
    pub fn reconcile<'a, I>(&mut self, filtered_keys: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let before = self.keys.len();
        match self.policy {
            SelectionPolicy::SelectAllOnChange => self.select_all(filtered_keys, true),
            SelectionPolicy::PreserveManual => {
                let visible: BTreeSet<&str> = filtered_keys.into_iter().collect();
                self.keys.retain(|key| visible.contains(key.as_str()));
            }
        }
        debug!(
            policy = ?self.policy,
            before,
            after = self.keys.len(),
            "selection reconciled"
        );
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

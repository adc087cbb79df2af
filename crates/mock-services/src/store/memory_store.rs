//! 内存存储
//!
//! 使用 DashMap 保存数据，额外记录插入顺序。后台列表和筛选结果
//! 都要求稳定的原始顺序，所以 `list` 按首次插入的顺序返回。

use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// 通用内存存储
#[derive(Debug)]
pub struct MemoryStore<T> {
    data: Arc<DashMap<String, T>>,
    order: Arc<RwLock<Vec<String>>>,
}

impl<T: Clone> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> MemoryStore<T> {
    /// 创建新的内存存储实例
    pub fn new() -> Self {
        Self {
            data: Arc::new(DashMap::new()),
            order: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 插入或更新数据
    ///
    /// 覆盖已存在的 key 时保留其原有位置
    pub fn insert(&self, id: &str, value: T) {
        if self.data.insert(id.to_string(), value).is_none() {
            self.order.write().push(id.to_string());
        }
    }

    /// 获取数据的克隆
    pub fn get(&self, id: &str) -> Option<T> {
        self.data.get(id).map(|v| v.clone())
    }

    /// 按插入顺序列出所有数据
    pub fn list(&self) -> Vec<T> {
        self.order
            .read()
            .iter()
            .filter_map(|key| self.get(key))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// 批量插入数据
    ///
    /// 接收一个迭代器，提取每个元素的 key 并插入
    pub fn insert_many<I, F>(&self, items: I, key_fn: F)
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> String,
    {
        for item in items {
            let key = key_fn(&item);
            self.insert(&key, item);
        }
    }
}

impl<T: Clone> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            order: Arc::clone(&self.order),
        }
    }
}

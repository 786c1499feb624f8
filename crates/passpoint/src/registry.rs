//! 检查点注册表
//!
//! 管理一组具名检查点。注册表由宿主显式创建和持有，不提供全局实例。

use crate::checkpoint::{Checkpoint, CheckpointSnapshot};
use crate::config::CheckpointConfig;
use crate::error::{PasspointError, Result};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// 检查点注册表
#[derive(Debug, Default)]
pub struct CheckpointRegistry {
    checkpoints: RwLock<IndexMap<String, Arc<Checkpoint>>>,
}

impl CheckpointRegistry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self {
            checkpoints: RwLock::new(IndexMap::new()),
        }
    }

    /// 从配置创建注册表
    pub fn from_configs<I>(configs: I) -> Result<Self>
    where
        I: IntoIterator<Item = CheckpointConfig>,
    {
        let registry = Self::new();
        for config in configs {
            registry.register(Checkpoint::from_config(&config))?;
        }
        Ok(registry)
    }

    /// 注册检查点（名称已存在时返回错误）
    pub fn register(&self, checkpoint: Checkpoint) -> Result<Arc<Checkpoint>> {
        let mut checkpoints = self.checkpoints.write();
        if checkpoints.contains_key(checkpoint.name()) {
            warn!("Checkpoint already registered: {}", checkpoint.name());
            return Err(PasspointError::DuplicateCheckpoint(
                checkpoint.name().to_string(),
            ));
        }

        let checkpoint = Arc::new(checkpoint);
        checkpoints.insert(checkpoint.name().to_string(), checkpoint.clone());
        drop(checkpoints);

        info!(
            checkpoint = %checkpoint.name(),
            enabled = checkpoint.is_enabled(),
            "Checkpoint registered"
        );
        Ok(checkpoint)
    }

    /// 获取检查点，不存在时注册一个未启用的新检查点
    pub fn get_or_register(&self, name: &str) -> Arc<Checkpoint> {
        if let Some(existing) = self.get(name) {
            return existing;
        }

        let mut checkpoints = self.checkpoints.write();
        checkpoints
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Checkpoint::new(name)))
            .clone()
    }

    /// 获取检查点
    pub fn get(&self, name: &str) -> Option<Arc<Checkpoint>> {
        self.checkpoints.read().get(name).cloned()
    }

    /// 是否已注册
    pub fn contains(&self, name: &str) -> bool {
        self.checkpoints.read().contains_key(name)
    }

    /// 移除检查点
    pub fn remove(&self, name: &str) -> Option<Arc<Checkpoint>> {
        self.checkpoints.write().shift_remove(name)
    }

    /// 所有检查点名称（按注册顺序）
    pub fn names(&self) -> Vec<String> {
        self.checkpoints.read().keys().cloned().collect()
    }

    /// 检查点数量
    pub fn len(&self) -> usize {
        self.checkpoints.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.read().is_empty()
    }

    /// 统一设置所有检查点的开关
    pub fn set_all_enabled(&self, enabled: bool) {
        for checkpoint in self.all() {
            checkpoint.set_enabled(enabled);
        }
    }

    /// 清空所有检查点的记录
    pub fn clear_all(&self) {
        for checkpoint in self.all() {
            checkpoint.clear();
        }
    }

    /// 所有检查点的快照（按注册顺序）
    pub fn snapshot_all(&self) -> Vec<CheckpointSnapshot> {
        self.all().iter().map(|cp| cp.snapshot()).collect()
    }

    /// 复制出检查点列表，避免在操作检查点时持有注册表锁
    fn all(&self) -> Vec<Arc<Checkpoint>> {
        self.checkpoints.read().values().cloned().collect()
    }
}

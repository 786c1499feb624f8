//! 检查点快照类型

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// 经过检查点的线程标识快照
///
/// 按首次到达顺序排列，创建后不可变；之后的记录不会反映到已返回的快照中。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ThreadSnapshot(Arc<[String]>);

impl ThreadSnapshot {
    /// 是否包含指定线程
    pub fn contains(&self, thread_id: &str) -> bool {
        self.0.iter().any(|id| id == thread_id)
    }

    /// 复制为 Vec
    pub fn to_vec(&self) -> Vec<String> {
        self.0.to_vec()
    }
}

impl Default for ThreadSnapshot {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl Deref for ThreadSnapshot {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for ThreadSnapshot {
    fn from(ids: Vec<String>) -> Self {
        Self(Arc::from(ids))
    }
}

impl From<ThreadSnapshot> for Vec<String> {
    fn from(snapshot: ThreadSnapshot) -> Self {
        snapshot.0.to_vec()
    }
}

impl<'a> IntoIterator for &'a ThreadSnapshot {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 检查点状态快照（供监控工具读取）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointSnapshot {
    /// 检查点名称
    pub name: String,
    /// 是否启用
    pub enabled: bool,
    /// 已经过的线程
    pub threads: ThreadSnapshot,
    /// 自上次清空以来的记录次数（含重复）
    pub total_passes: u64,
}

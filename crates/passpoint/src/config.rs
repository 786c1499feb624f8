//! 检查点配置
//!
//! 解析检查点定义。读取配置文件由宿主负责，这里只接收文本。

use crate::error::{PasspointError, Result};
use serde::{Deserialize, Serialize};

/// 控制检查点默认启用状态的环境变量
pub const ENABLE_CHECKPOINTS_ENV: &str = "PASSPOINT_CHECKPOINTS_ENABLED";

/// 检查点定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointConfig {
    /// 检查点名称
    pub name: String,
    /// 是否启用（缺省时读取环境变量）
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl CheckpointConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: default_enabled(),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// 检查环境变量是否默认启用检查点
pub fn default_enabled() -> bool {
    std::env::var(ENABLE_CHECKPOINTS_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// 配置文本结构（对象格式）
#[derive(Debug, Deserialize)]
struct CheckpointsDocument {
    checkpoints: Vec<CheckpointConfig>,
}

/// 配置文本结构：`{ "checkpoints": [...] }` 或直接数组
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigShape {
    Document(CheckpointsDocument),
    List(Vec<CheckpointConfig>),
}

/// 解析检查点定义
///
/// 名称会去除首尾空白，空名称返回 `InvalidName`。
pub fn parse_checkpoint_configs(json: &str) -> Result<Vec<CheckpointConfig>> {
    let shape: ConfigShape = serde_json::from_str(json)?;
    let configs = match shape {
        ConfigShape::Document(doc) => doc.checkpoints,
        ConfigShape::List(list) => list,
    };

    configs
        .into_iter()
        .map(|mut config| {
            let trimmed = config.name.trim();
            if trimmed.is_empty() {
                return Err(PasspointError::InvalidName(config.name));
            }
            config.name = trimmed.to_string();
            Ok(config)
        })
        .collect()
}

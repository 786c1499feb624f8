//! 错误类型
//!
//! 检查点本身的操作不会失败；这里只覆盖配置解析和注册表注册。

use thiserror::Error;

/// Result type alias for passpoint operations
pub type Result<T> = std::result::Result<T, PasspointError>;

/// Error types for the fallible passpoint surfaces
#[derive(Debug, Error)]
pub enum PasspointError {
    /// A checkpoint with this name is already registered
    #[error("Checkpoint already registered: {0}")]
    DuplicateCheckpoint(String),

    /// Checkpoint name is empty or blank
    #[error("Invalid checkpoint name: {0:?}")]
    InvalidName(String),

    /// Checkpoint definitions could not be parsed
    #[error("Failed to parse checkpoint config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

//! # passpoint
//!
//! 线程通过检查点（checkpoint）
//!
//! 检查点是一个具名、可开关的标记，记录哪些线程经过了它，并可随时清空。
//! 提供：
//! - `Checkpoint`：单个检查点，记录经过的线程
//! - `PassPolicy` / `CheckpointInterceptor`：调用方的记录策略
//! - `CheckpointRegistry`：显式持有的多检查点表
//! - `CheckpointConfig`：检查点定义的解析
//!
//! ## 快速开始
//!
//! ```rust
//! use passpoint::{Checkpoint, WhenEnabled};
//!
//! let checkpoint = Checkpoint::new("cp1").with_enabled(true);
//! checkpoint.pass_with(&WhenEnabled);
//! assert_eq!(checkpoint.pass_over_threads().len(), 1);
//! ```

pub mod checkpoint;
pub mod config;
pub mod error;
pub mod logging;
pub mod policy;
pub mod registry;

pub use checkpoint::{current_thread_id, Checkpoint, CheckpointSnapshot, ThreadSnapshot};
pub use config::{
    default_enabled, parse_checkpoint_configs, CheckpointConfig, ENABLE_CHECKPOINTS_ENV,
};
pub use error::{PasspointError, Result};
pub use logging::{init_logging, LOG_FILTER_ENV};
pub use policy::{Always, CheckpointInterceptor, Never, PassPolicy, WhenEnabled};
pub use registry::CheckpointRegistry;

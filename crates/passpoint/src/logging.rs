//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 日志过滤环境变量（`EnvFilter` 语法）
pub const LOG_FILTER_ENV: &str = "PASSPOINT_LOG";

const DEFAULT_FILTER: &str = "info";

/// 安装 fmt 订阅者
///
/// 已有全局订阅者时不做任何事，返回 `false`。
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

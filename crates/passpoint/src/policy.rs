//! 记录策略
//!
//! 是否在经过检查点时记录线程，由调用方（拦截器）决定，检查点本身不做判断。

use crate::checkpoint::Checkpoint;
use std::fmt;
use std::sync::Arc;

/// 决定当前线程经过检查点时是否记录
pub trait PassPolicy: Send + Sync {
    fn should_record(&self, checkpoint: &Checkpoint) -> bool;
}

/// 仅在检查点启用时记录
#[derive(Debug, Clone, Copy, Default)]
pub struct WhenEnabled;

impl PassPolicy for WhenEnabled {
    fn should_record(&self, checkpoint: &Checkpoint) -> bool {
        checkpoint.is_enabled()
    }
}

/// 总是记录
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl PassPolicy for Always {
    fn should_record(&self, _checkpoint: &Checkpoint) -> bool {
        true
    }
}

/// 从不记录
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl PassPolicy for Never {
    fn should_record(&self, _checkpoint: &Checkpoint) -> bool {
        false
    }
}

impl<F> PassPolicy for F
where
    F: Fn(&Checkpoint) -> bool + Send + Sync,
{
    fn should_record(&self, checkpoint: &Checkpoint) -> bool {
        self(checkpoint)
    }
}

/// 拦截器适配
///
/// 在执行被拦截的调用前，按策略记录当前线程。
#[derive(Clone)]
pub struct CheckpointInterceptor {
    checkpoint: Arc<Checkpoint>,
    policy: Arc<dyn PassPolicy>,
}

impl CheckpointInterceptor {
    /// 创建拦截器（默认策略：启用时记录）
    pub fn new(checkpoint: Arc<Checkpoint>) -> Self {
        Self {
            checkpoint,
            policy: Arc::new(WhenEnabled),
        }
    }

    /// 设置记录策略
    pub fn with_policy(mut self, policy: impl PassPolicy + 'static) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// 获取检查点
    pub fn checkpoint(&self) -> &Arc<Checkpoint> {
        &self.checkpoint
    }

    /// 记录（若策略允许）后执行调用
    pub fn intercept<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.checkpoint.pass_with(self.policy.as_ref());
        f()
    }
}

impl fmt::Debug for CheckpointInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckpointInterceptor")
            .field("checkpoint", &self.checkpoint.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_when_enabled_follows_flag() {
        let checkpoint = Checkpoint::new("gate");
        assert!(!checkpoint.pass_with(&WhenEnabled));
        assert_eq!(checkpoint.visited_count(), 0);

        checkpoint.set_enabled(true);
        assert!(checkpoint.pass_with(&WhenEnabled));
        assert_eq!(checkpoint.visited_count(), 1);
    }

    #[test]
    fn test_always_and_never() {
        let checkpoint = Checkpoint::new("gate");
        assert!(checkpoint.pass_with(&Always));
        assert!(!checkpoint.pass_with(&Never));
        assert_eq!(checkpoint.total_passes(), 1);
    }

    #[test]
    fn test_closure_policy() {
        let checkpoint = Checkpoint::new("only-cp");
        let policy = |cp: &Checkpoint| cp.name().starts_with("only");
        assert!(checkpoint.pass_with(&policy));
        assert!(checkpoint.has_passed(&crate::current_thread_id()));
    }

    #[test]
    fn test_interceptor_records_then_runs() {
        let checkpoint = Arc::new(Checkpoint::new("intercept").with_enabled(true));
        let interceptor = CheckpointInterceptor::new(checkpoint.clone());

        let value = interceptor.intercept(|| 42);
        assert_eq!(value, 42);
        assert_eq!(checkpoint.visited_count(), 1);
    }

    #[test]
    fn test_interceptor_disabled_still_runs() {
        let checkpoint = Arc::new(Checkpoint::new("intercept"));
        let interceptor = CheckpointInterceptor::new(checkpoint.clone());

        let value = interceptor.intercept(|| "ran");
        assert_eq!(value, "ran");
        assert!(checkpoint.pass_over_threads().is_empty());
    }

    #[test]
    fn test_interceptor_custom_policy() {
        let checkpoint = Arc::new(Checkpoint::new("intercept"));
        let interceptor = CheckpointInterceptor::new(checkpoint.clone()).with_policy(Always);

        interceptor.intercept(|| ());
        interceptor.intercept(|| ());
        assert_eq!(checkpoint.visited_count(), 1);
        assert_eq!(checkpoint.total_passes(), 2);
    }
}

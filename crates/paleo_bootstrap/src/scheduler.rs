//! Host schedulers the bootstrap task yields to between batches.

use async_trait::async_trait;

/// Returns control to the host between batches of iterations.
#[async_trait(?Send)]
pub trait Scheduler {
    /// Suspends the task until the host has had a chance to run.
    async fn yield_now(&self);
}

/// Scheduler that never suspends.
///
/// Useful in tests and batch jobs where nothing else needs to run.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

#[async_trait(?Send)]
impl Scheduler for ImmediateScheduler {
    async fn yield_now(&self) {}
}

/// Scheduler yielding to the tokio runtime.
#[cfg(feature = "tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

#[cfg(feature = "tokio")]
#[async_trait(?Send)]
impl Scheduler for TokioScheduler {
    async fn yield_now(&self) {
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_scheduler_completes() {
        tokio_test::block_on(ImmediateScheduler.yield_now());
    }

    #[cfg(feature = "tokio")]
    #[tokio::test]
    async fn test_tokio_scheduler_yields() {
        TokioScheduler.yield_now().await;
    }
}

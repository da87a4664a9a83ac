//! Progress reporting sinks.
//!
//! The engine calls [`ProgressSink::update`] after every iteration and
//! [`ProgressSink::done`] once on successful completion.

use paleo_estimators::EstimatorKind;
use tracing::info;

use crate::summary::ConfidenceSummary;

/// Receives progress notifications from a running bootstrap.
pub trait ProgressSink {
    /// Called after each iteration with `current` in `0..=total`.
    fn update(&mut self, current: usize, total: usize);

    /// Called once when the run completes.
    fn done(&mut self, _summary: &ConfidenceSummary) {}
}

/// Sink that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn update(&mut self, _current: usize, _total: usize) {}
}

/// Sink that logs progress through `tracing` at a fixed percentage interval.
#[derive(Clone, Debug)]
pub struct TracingProgress {
    kind: EstimatorKind,
    interval_percent: usize,
    next_percent: usize,
}

impl TracingProgress {
    /// Logs every 10 percent.
    pub fn new(kind: EstimatorKind) -> Self {
        Self::with_interval(kind, 10)
    }

    /// Logs every `interval_percent` percent (at least 1).
    pub fn with_interval(kind: EstimatorKind, interval_percent: usize) -> Self {
        let interval_percent = interval_percent.clamp(1, 100);
        Self {
            kind,
            interval_percent,
            next_percent: interval_percent,
        }
    }
}

impl ProgressSink for TracingProgress {
    fn update(&mut self, current: usize, total: usize) {
        if total == 0 {
            return;
        }
        let percent = current * 100 / total;
        if percent >= self.next_percent {
            info!(kind = %self.kind, current, total, "Bootstrap {}% complete", percent);
            while self.next_percent <= percent {
                self.next_percent += self.interval_percent;
            }
        }
    }

    fn done(&mut self, summary: &ConfidenceSummary) {
        info!(
            kind = %self.kind,
            lower = summary.lower,
            upper = summary.upper,
            "Bootstrap finished: {}",
            summary.describe()
        );
    }
}

/// Sink forwarding updates to a closure.
///
/// # Examples
///
/// ```
/// use paleo_bootstrap::{FnProgress, ProgressSink};
///
/// let mut last = 0;
/// let mut sink = FnProgress::new(|current, _total| last = current);
/// sink.update(7, 10);
/// drop(sink);
/// assert_eq!(last, 7);
/// ```
pub struct FnProgress<F>
where
    F: FnMut(usize, usize),
{
    on_update: F,
}

impl<F> FnProgress<F>
where
    F: FnMut(usize, usize),
{
    /// Wraps `on_update`.
    pub fn new(on_update: F) -> Self {
        Self { on_update }
    }
}

impl<F> ProgressSink for FnProgress<F>
where
    F: FnMut(usize, usize),
{
    fn update(&mut self, current: usize, total: usize) {
        (self.on_update)(current, total);
    }
}

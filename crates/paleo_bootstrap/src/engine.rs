//! Chunked, cancellable bootstrap engine.
//!
//! A run is a [`BootstrapTask`] advanced one batch at a time. Iteration 0
//! evaluates the kernel on the measured data; iterations `1..=N` evaluate it
//! on resamples drawn with replacement. Between batches the task returns to
//! its driver, which yields to the host [`Scheduler`] so a single-threaded
//! caller stays responsive.
//!
//! # Lifecycle
//!
//! 1. [`BootstrapEngine::start`] acquires the running flag for the kernel's
//!    kind and validates the input
//! 2. [`BootstrapTask::step`] runs up to `cadence` iterations, reporting
//!    progress after each one
//! 3. After iteration `N` the outcomes are summarised, the flag is released
//!    and a [`BootstrapReport`] is returned
//!
//! Cancellation and kernel failures release the flag and discard partial
//! results.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use paleo_core::rng::ResampleRng;
use paleo_core::types::Direction;
use paleo_estimators::{EstimatorError, EstimatorKernel, EstimatorKind, KernelOutput};
use tracing::{debug, info, warn};

use crate::config::BootstrapOptions;
use crate::controller::{RunController, RunGuard};
use crate::error::BootstrapError;
use crate::progress::{NoopProgress, ProgressSink};
use crate::scheduler::Scheduler;
use crate::summary::ConfidenceSummary;

/// Requests cooperative cancellation of a running task.
///
/// The task observes the request at its next batch boundary.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Creates a handle with no cancellation requested.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Result of a completed bootstrap run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BootstrapReport<C> {
    /// Estimator kind
    pub kind: EstimatorKind,
    /// Confidence bounds and distribution of the resampled outcomes
    pub summary: ConfidenceSummary,
    /// Kernel output on the measured data
    pub actual: KernelOutput<C>,
    /// Curves of the first resampled outcomes
    pub sampled_curves: Vec<C>,
    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,
    /// Time from start to completion
    pub elapsed: Duration,
    /// Seed of the resampling generator
    pub seed: u64,
}

impl<C> BootstrapReport<C> {
    /// "`successful` out of `attempted`".
    pub fn describe(&self) -> String {
        self.summary.describe()
    }
}

/// Outcome of one [`BootstrapTask::step`].
#[derive(Clone, Debug)]
pub enum TaskStatus<C> {
    /// The batch finished; more iterations remain.
    Yielded {
        /// Next iteration to run
        iteration: usize,
        /// Last iteration index
        total: usize,
    },
    /// The run completed.
    Finished(BootstrapReport<C>),
}

/// Starts bootstrap runs, at most one per estimator kind at a time.
///
/// # Examples
///
/// ```
/// use paleo_bootstrap::{BootstrapEngine, BootstrapOptions, RunController};
/// use paleo_core::synthetic::elliptical_ring;
/// use paleo_core::types::Direction;
/// use paleo_estimators::UnflattenEstimator;
///
/// let engine = BootstrapEngine::new(RunController::shared());
/// let directions = elliptical_ring(&Direction::new(0.0, 40.0), 12.0, 6.0, 20);
/// let options = BootstrapOptions::builder().iterations(20).seed(1).build().unwrap();
///
/// let report = engine
///     .start(&directions, UnflattenEstimator::new(), options)
///     .unwrap()
///     .run_blocking()
///     .unwrap();
/// assert_eq!(report.summary.attempted, 20);
/// ```
#[derive(Clone, Debug)]
pub struct BootstrapEngine {
    controller: Arc<RunController>,
}

impl BootstrapEngine {
    /// Creates an engine sharing `controller`'s running flags.
    pub fn new(controller: Arc<RunController>) -> Self {
        Self { controller }
    }

    /// Returns the run controller.
    pub fn controller(&self) -> &Arc<RunController> {
        &self.controller
    }

    /// Whether a run of `kind` is in progress.
    pub fn is_running(&self, kind: EstimatorKind) -> bool {
        self.controller.is_running(kind)
    }

    /// Starts a run of `kernel` over `directions`.
    ///
    /// The directions are copied; the caller's set is only read.
    ///
    /// # Errors
    ///
    /// - `AlreadyRunning` if a run of the same kind is active
    /// - `EmptyInput` if `directions` is empty
    /// - `InsufficientDirections` below the kernel minimum
    /// - `InvalidInput` for other kernel preconditions
    pub fn start<K: EstimatorKernel>(
        &self,
        directions: &[Direction],
        kernel: K,
        options: BootstrapOptions,
    ) -> Result<BootstrapTask<K>, BootstrapError> {
        let kind = kernel.kind();
        let guard = self.controller.try_acquire(kind)?;

        if directions.is_empty() {
            return Err(BootstrapError::EmptyInput);
        }
        kernel.validate(directions).map_err(|err| match err {
            EstimatorError::InsufficientDirections { required, provided } => {
                BootstrapError::insufficient_directions(required, provided)
            }
            other => BootstrapError::invalid_input(other.to_string()),
        })?;

        let rng = match options.seed() {
            Some(seed) => ResampleRng::from_seed(seed),
            None => ResampleRng::from_entropy(),
        };
        let cadence = options.cadence().unwrap_or_else(|| kind.default_cadence());

        debug!(
            %kind,
            directions = directions.len(),
            iterations = options.iterations(),
            seed = rng.seed(),
            cadence,
            "Starting bootstrap"
        );

        Ok(BootstrapTask {
            kind,
            kernel,
            directions: directions.to_vec(),
            total: options.iterations(),
            options,
            rng,
            cadence,
            progress: Box::new(NoopProgress),
            cancel: CancelHandle::new(),
            guard: Some(guard),
            next: 0,
            actual: None,
            outcomes: Vec::new(),
            sampled_curves: Vec::new(),
            started_at: Utc::now(),
            started: Instant::now(),
        })
    }
}

/// One in-flight bootstrap run.
///
/// Holds the running flag of its kind until it finishes, fails, is
/// cancelled or is dropped.
pub struct BootstrapTask<K: EstimatorKernel> {
    kind: EstimatorKind,
    kernel: K,
    directions: Vec<Direction>,
    options: BootstrapOptions,
    rng: ResampleRng,
    cadence: usize,
    progress: Box<dyn ProgressSink>,
    cancel: CancelHandle,
    guard: Option<RunGuard>,
    next: usize,
    total: usize,
    actual: Option<KernelOutput<K::Curve>>,
    outcomes: Vec<f64>,
    sampled_curves: Vec<K::Curve>,
    started_at: DateTime<Utc>,
    started: Instant,
}

impl<K: EstimatorKernel> BootstrapTask<K> {
    /// Replaces the progress sink.
    pub fn with_progress(mut self, progress: impl ProgressSink + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Returns a handle that cancels this task.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Estimator kind.
    pub fn kind(&self) -> EstimatorKind {
        self.kind
    }

    /// Next iteration to run.
    pub fn iteration(&self) -> usize {
        self.next
    }

    /// Number of resampling iterations.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Seed of the resampling generator.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether the task still holds its running flag.
    pub fn is_active(&self) -> bool {
        self.guard.is_some()
    }

    /// Runs one batch of up to `cadence` iterations.
    ///
    /// # Errors
    ///
    /// - `Cancelled` if cancellation was requested before this batch
    /// - `Kernel` if the estimator failed; the run is aborted
    /// - `InvalidInput` if the task already finished or aborted
    pub fn step(&mut self) -> Result<TaskStatus<K::Curve>, BootstrapError> {
        if self.guard.is_none() {
            return Err(BootstrapError::invalid_input(
                "bootstrap task is no longer active",
            ));
        }
        if self.cancel.is_cancelled() {
            self.guard = None;
            warn!(kind = %self.kind, iteration = self.next, "Bootstrap cancelled");
            return Err(BootstrapError::Cancelled);
        }

        for _ in 0..self.cadence {
            if self.next > self.total {
                break;
            }
            if let Err(source) = self.run_iteration() {
                self.guard = None;
                warn!(
                    kind = %self.kind,
                    iteration = self.next,
                    error = %source,
                    "Bootstrap aborted by estimator failure"
                );
                return Err(BootstrapError::kernel(self.next, source));
            }
            self.progress.update(self.next, self.total);
            self.next += 1;
        }

        if self.next > self.total {
            return self.finish().map(TaskStatus::Finished);
        }

        debug!(kind = %self.kind, iteration = self.next, total = self.total, "Yielding");
        Ok(TaskStatus::Yielded {
            iteration: self.next,
            total: self.total,
        })
    }

    /// Runs every remaining batch without yielding.
    pub fn run_blocking(mut self) -> Result<BootstrapReport<K::Curve>, BootstrapError> {
        loop {
            if let TaskStatus::Finished(report) = self.step()? {
                return Ok(report);
            }
        }
    }

    /// Runs every remaining batch, yielding to `scheduler` in between.
    pub async fn drive<S>(mut self, scheduler: &S) -> Result<BootstrapReport<K::Curve>, BootstrapError>
    where
        S: Scheduler + ?Sized,
    {
        loop {
            match self.step()? {
                TaskStatus::Finished(report) => return Ok(report),
                TaskStatus::Yielded { .. } => scheduler.yield_now().await,
            }
        }
    }

    fn run_iteration(&mut self) -> Result<(), EstimatorError> {
        if self.next == 0 {
            self.actual = Some(self.kernel.estimate(&self.directions)?);
            return Ok(());
        }

        let sample = self.rng.resample(&self.directions);
        let output = self.kernel.estimate(&sample)?;
        if output.degenerate && !self.options.include_degenerate() {
            return Ok(());
        }

        self.outcomes.push(output.value);
        if self.sampled_curves.len() < self.options.curve_samples() {
            self.sampled_curves.push(output.curve);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<BootstrapReport<K::Curve>, BootstrapError> {
        let actual = self
            .actual
            .take()
            .ok_or_else(|| BootstrapError::invalid_input("actual-data estimate missing"))?;
        if let Some(guard) = self.guard.take() {
            guard.release();
        }

        let summary = ConfidenceSummary::from_outcomes(std::mem::take(&mut self.outcomes), self.total);
        let elapsed = self.started.elapsed();
        self.progress.done(&summary);

        info!(
            kind = %self.kind,
            successful = summary.successful,
            attempted = summary.attempted,
            lower = summary.lower,
            upper = summary.upper,
            elapsed_ms = elapsed.as_millis() as u64,
            "Bootstrap complete"
        );

        Ok(BootstrapReport {
            kind: self.kind,
            summary,
            actual,
            sampled_curves: std::mem::take(&mut self.sampled_curves),
            started_at: self.started_at,
            elapsed,
            seed: self.rng.seed(),
        })
    }
}

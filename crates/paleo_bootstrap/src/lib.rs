//! # paleo_bootstrap
//!
//! Bootstrap confidence intervals for the estimator kernels of
//! `paleo_estimators`.
//!
//! ## Architecture Position
//!
//! Layer 3 of the workspace. Depends on `paleo_core` (resampling) and
//! `paleo_estimators` (kernels).
//!
//! ## Execution Model
//!
//! Runs execute cooperatively on the caller's thread. A [`BootstrapTask`]
//! advances in batches; between batches it yields to a [`Scheduler`]. A shared
//! [`RunController`] allows at most one run per [`EstimatorKind`].
//!
//! ## Example
//!
//! ```rust
//! use paleo_bootstrap::{BootstrapEngine, BootstrapOptions, ImmediateScheduler, RunController};
//! use paleo_core::synthetic::tilt;
//! use paleo_core::types::{Bedding, Direction};
//! use paleo_estimators::UnfoldEstimator;
//!
//! let directions: Vec<Direction> = (0..12)
//!     .flat_map(|i| {
//!         let bedding = Bedding::new(30.0 * i as f64, 20.0 + (i % 3) as f64 * 10.0);
//!         tilt(&[Direction::new(15.0, 45.0)], &bedding)
//!     })
//!     .collect();
//!
//! let engine = BootstrapEngine::new(RunController::shared());
//! let options = BootstrapOptions::builder().iterations(50).seed(7).build().unwrap();
//! let task = engine.start(&directions, UnfoldEstimator::default(), options).unwrap();
//!
//! let report = tokio_test::block_on(task.drive(&ImmediateScheduler)).unwrap();
//! assert_eq!(report.actual.value, 100.0);
//! println!("{} ({})", report.summary, report.describe());
//! ```
//!
//! [`EstimatorKind`]: paleo_estimators::EstimatorKind

pub mod config;
pub mod controller;
pub mod engine;
pub mod progress;
pub mod scheduler;
pub mod summary;

mod error;

pub use config::{BootstrapOptions, BootstrapOptionsBuilder, DEFAULT_CURVE_SAMPLES};
pub use controller::{RunController, RunGuard};
pub use engine::{BootstrapEngine, BootstrapReport, BootstrapTask, CancelHandle, TaskStatus};
pub use error::{BootstrapError, ConfigError, MAX_ITERATIONS};
pub use progress::{FnProgress, NoopProgress, ProgressSink, TracingProgress};
#[cfg(feature = "tokio")]
pub use scheduler::TokioScheduler;
pub use scheduler::{ImmediateScheduler, Scheduler};
pub use summary::{CdfPoint, ConfidenceSummary};

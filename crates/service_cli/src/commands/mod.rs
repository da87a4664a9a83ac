//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod demo;
pub mod ei;
pub mod fold;

use paleo_bootstrap::{
    BootstrapEngine, BootstrapError, BootstrapOptions, BootstrapReport, TokioScheduler,
    TracingProgress,
};
use paleo_core::types::Direction;
use paleo_estimators::EstimatorKernel;
use tracing::warn;

use crate::config::OutputFormat;
use crate::Result;

/// Per-run settings resolved from config and command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Resampling iterations
    pub iterations: usize,
    /// Resampling seed
    pub seed: Option<u64>,
    /// Bootstrap curves kept
    pub curve_samples: usize,
    /// Output format
    pub format: OutputFormat,
}

impl RunSettings {
    /// Builds validated bootstrap options.
    pub fn options(&self) -> Result<BootstrapOptions> {
        let options = BootstrapOptions::builder()
            .iterations(self.iterations)
            .curve_samples(self.curve_samples)
            .maybe_seed(self.seed)
            .build()
            .map_err(BootstrapError::from)?;
        Ok(options)
    }
}

/// Runs one bootstrap to completion on the current runtime.
///
/// Ctrl-C requests cooperative cancellation; the run then fails with
/// `BootstrapError::Cancelled`.
pub async fn execute<K: EstimatorKernel>(
    engine: &BootstrapEngine,
    directions: &[Direction],
    kernel: K,
    options: BootstrapOptions,
) -> Result<BootstrapReport<K::Curve>> {
    let kind = kernel.kind();
    let task = engine
        .start(directions, kernel, options)?
        .with_progress(TracingProgress::new(kind));

    let cancel = task.cancel_handle();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling {} bootstrap", kind);
            cancel.cancel();
        }
    });

    let result = task.drive(&TokioScheduler).await;
    interrupt.abort();
    Ok(result?)
}

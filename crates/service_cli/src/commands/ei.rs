//! E/I command implementation
//!
//! Bootstraps the inclination-shallowing correction of a direction file.

use std::path::Path;

use paleo_bootstrap::BootstrapEngine;
use paleo_estimators::UnflattenEstimator;
use tracing::info;

use super::{execute, RunSettings};
use crate::input::load_directions;
use crate::output::{print_report, unflatten_table};
use crate::Result;

/// Run the ei command
pub async fn run(engine: &BootstrapEngine, input: &Path, settings: &RunSettings) -> Result<()> {
    info!("Starting E/I bootstrap...");
    info!("  Input: {}", input.display());
    info!("  Iterations: {}", settings.iterations);

    let directions = load_directions(input)?;
    let report = execute(
        engine,
        &directions,
        UnflattenEstimator::new(),
        settings.options()?,
    )
    .await?;

    print_report(&report, settings.format, unflatten_table)?;
    info!("E/I bootstrap complete: {}", report.describe());
    Ok(())
}

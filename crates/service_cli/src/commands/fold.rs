//! Fold command implementation
//!
//! Bootstraps the fold test of a direction file with bedding attitudes.

use std::path::Path;

use paleo_bootstrap::BootstrapEngine;
use paleo_estimators::{UnfoldConfig, UnfoldEstimator};
use tracing::info;

use super::{execute, RunSettings};
use crate::input::load_directions;
use crate::output::{print_report, unfold_table};
use crate::Result;

/// Run the fold command
pub async fn run(
    engine: &BootstrapEngine,
    input: &Path,
    range: UnfoldConfig,
    settings: &RunSettings,
) -> Result<()> {
    info!("Starting fold test bootstrap...");
    info!("  Input: {}", input.display());
    info!("  Unfolding range: {}% to {}%", range.min(), range.max());
    info!("  Iterations: {}", settings.iterations);

    let directions = load_directions(input)?;
    let report = execute(
        engine,
        &directions,
        UnfoldEstimator::new(range),
        settings.options()?,
    )
    .await?;

    print_report(&report, settings.format, unfold_table)?;
    info!("Fold test bootstrap complete: {}", report.describe());
    Ok(())
}

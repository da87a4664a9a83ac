//! Check command implementation
//!
//! Prints the resolved configuration and build features.

use std::path::Path;

use paleo_bootstrap::{DEFAULT_CURVE_SAMPLES, MAX_ITERATIONS};

use crate::config::PaleoConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &PaleoConfig, config_path: &Path) -> Result<()> {
    println!("paleo {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration");
    println!(
        "  File:              {} ({})",
        config_path.display(),
        if config_path.exists() { "loaded" } else { "not found, using defaults" }
    );
    println!("  Log level:         {}", config.log_level);
    println!("  Output:            {:?}", config.output);
    println!("  E/I iterations:    {}", config.bootstrap.iterations_ei);
    println!("  Fold iterations:   {}", config.bootstrap.iterations_fold);
    println!(
        "  Curve samples:     {} (default {})",
        config.bootstrap.curve_samples, DEFAULT_CURVE_SAMPLES
    );
    match config.bootstrap.seed {
        Some(seed) => println!("  Seed:              {}", seed),
        None => println!("  Seed:              from entropy"),
    }
    println!(
        "  Unfolding range:   {}% to {}%",
        config.fold.min_percent, config.fold.max_percent
    );
    println!();
    println!("Limits");
    println!("  Max iterations:    {}", MAX_ITERATIONS);
    println!();
    println!("Configuration valid");
    Ok(())
}

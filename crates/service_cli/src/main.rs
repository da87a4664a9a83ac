//! paleo CLI - bootstrap confidence bounds for palaeomagnetic estimators
//!
//! # Commands
//!
//! - `paleo ei --input <file>` - E/I inclination-shallowing correction
//! - `paleo fold --input <file>` - fold test (percent unfolding at maximum τ1)
//! - `paleo demo` - both estimators on synthetic data
//! - `paleo check` - print the resolved configuration
//!
//! Settings resolve in order: command-line arguments, `PALEO_*` environment
//! variables, `paleo.toml`, built-in defaults.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use paleo_bootstrap::{BootstrapEngine, RunController};
use paleo_estimators::UnfoldConfig;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod output;

use commands::RunSettings;
use config::{OutputFormat, PaleoConfig};
pub use error::{CliError, Result};

/// Palaeomagnetic bootstrap CLI
#[derive(Parser)]
#[command(name = "paleo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "paleo.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap the E/I inclination-shallowing correction
    Ei {
        /// Path to direction file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Resampling iterations
        #[arg(short = 'n', long)]
        iterations: Option<usize>,

        /// Resampling seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Bootstrap the fold test
    Fold {
        /// Path to direction file with bedding (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Lowest percent unfolding searched
        #[arg(long, allow_hyphen_values = true)]
        min: Option<i32>,

        /// Highest percent unfolding searched
        #[arg(long, allow_hyphen_values = true)]
        max: Option<i32>,

        /// Resampling iterations
        #[arg(short = 'n', long)]
        iterations: Option<usize>,

        /// Resampling seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Run both estimators on synthetic data
    Demo {
        /// Resampling iterations for each estimator
        #[arg(short = 'n', long, default_value = "200")]
        iterations: usize,

        /// Seed for data generation and resampling
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check configuration
    Check,
}

fn run_settings(
    config: &PaleoConfig,
    iterations: usize,
    seed: Option<u64>,
    format: Option<OutputFormat>,
) -> RunSettings {
    RunSettings {
        iterations,
        seed: seed.or(config.bootstrap.seed),
        curve_samples: config.bootstrap.curve_samples,
        format: format.unwrap_or(config.output),
    }
}

fn unfold_range(config: &PaleoConfig, min: Option<i32>, max: Option<i32>) -> Result<UnfoldConfig> {
    Ok(UnfoldConfig::new(
        min.unwrap_or(config.fold.min_percent),
        max.unwrap_or(config.fold.max_percent),
    )?)
}

fn init_tracing(config: &PaleoConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = PaleoConfig::load_or_default(&cli.config)?.with_env_override()?;
    config.validate()?;

    init_tracing(&config, cli.verbose);
    debug!(config = %cli.config.display(), "Configuration loaded");

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let engine = BootstrapEngine::new(RunController::shared());

    runtime.block_on(async {
        match cli.command {
            Commands::Ei {
                input,
                iterations,
                seed,
                format,
            } => {
                let iterations = iterations.unwrap_or(config.bootstrap.iterations_ei);
                let settings = run_settings(&config, iterations, seed, format);
                commands::ei::run(&engine, &input, &settings).await
            }
            Commands::Fold {
                input,
                min,
                max,
                iterations,
                seed,
                format,
            } => {
                let range = unfold_range(&config, min, max)?;
                let iterations = iterations.unwrap_or(config.bootstrap.iterations_fold);
                let settings = run_settings(&config, iterations, seed, format);
                commands::fold::run(&engine, &input, range, &settings).await
            }
            Commands::Demo {
                iterations,
                seed,
                format,
            } => {
                let settings = run_settings(&config, iterations, seed, format);
                let range = unfold_range(&config, None, None)?;
                commands::demo::run(&engine, &settings, range).await
            }
            Commands::Check => commands::check::run(&config, &cli.config),
        }
    })
}

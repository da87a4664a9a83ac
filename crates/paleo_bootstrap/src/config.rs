//! Bootstrap run options.
//!
//! Options are immutable once built; use [`BootstrapOptions::builder`] to
//! construct them with validation at build time.

use crate::error::{ConfigError, MAX_ITERATIONS};

/// Default number of bootstrap curves kept for visualisation.
pub const DEFAULT_CURVE_SAMPLES: usize = 25;

/// Options for one bootstrap run.
///
/// # Examples
///
/// ```rust
/// use paleo_bootstrap::BootstrapOptions;
///
/// let options = BootstrapOptions::builder()
///     .iterations(1000)
///     .seed(42)
///     .build()
///     .expect("valid options");
///
/// assert_eq!(options.iterations(), 1000);
/// assert_eq!(options.curve_samples(), 25);
/// assert!(options.include_degenerate());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapOptions {
    /// Number of resampling iterations.
    iterations: usize,
    /// Number of bootstrap curves to keep.
    curve_samples: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Iterations per batch; `None` uses the estimator's default.
    cadence: Option<usize>,
    /// Whether degenerate outcomes enter the statistics.
    include_degenerate: bool,
}

impl BootstrapOptions {
    /// Creates a new options builder.
    #[inline]
    pub fn builder() -> BootstrapOptionsBuilder {
        BootstrapOptionsBuilder::default()
    }

    /// Returns the number of resampling iterations.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the number of bootstrap curves to keep.
    #[inline]
    pub fn curve_samples(&self) -> usize {
        self.curve_samples
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the batch size override.
    #[inline]
    pub fn cadence(&self) -> Option<usize> {
        self.cadence
    }

    /// Whether degenerate outcomes are counted as zero-valued results.
    #[inline]
    pub fn include_degenerate(&self) -> bool {
        self.include_degenerate
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `iterations` is 0 or greater than 1,000,000
    /// - `cadence` is set to 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::InvalidIterationCount(self.iterations));
        }
        if self.cadence == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "cadence",
                value: "0 (must be at least 1)".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`BootstrapOptions`].
#[derive(Clone, Debug, Default)]
pub struct BootstrapOptionsBuilder {
    iterations: Option<usize>,
    curve_samples: Option<usize>,
    seed: Option<u64>,
    cadence: Option<usize>,
    include_degenerate: Option<bool>,
}

impl BootstrapOptionsBuilder {
    /// Sets the number of resampling iterations.
    ///
    /// # Arguments
    ///
    /// * `iterations` - Number of iterations in [1, 1_000_000]
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the number of bootstrap curves to keep.
    #[inline]
    pub fn curve_samples(mut self, curve_samples: usize) -> Self {
        self.curve_samples = Some(curve_samples);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seed if one is given.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of iterations per batch.
    #[inline]
    pub fn cadence(mut self, cadence: usize) -> Self {
        self.cadence = Some(cadence);
        self
    }

    /// Sets whether degenerate outcomes are counted.
    #[inline]
    pub fn include_degenerate(mut self, include: bool) -> Self {
        self.include_degenerate = Some(include);
        self
    }

    /// Builds the options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `iterations` is not set or any value is invalid.
    pub fn build(self) -> Result<BootstrapOptions, ConfigError> {
        let iterations = self.iterations.ok_or(ConfigError::InvalidParameter {
            name: "iterations",
            value: "must be specified".to_string(),
        })?;

        let options = BootstrapOptions {
            iterations,
            curve_samples: self.curve_samples.unwrap_or(DEFAULT_CURVE_SAMPLES),
            seed: self.seed,
            cadence: self.cadence,
            include_degenerate: self.include_degenerate.unwrap_or(true),
        };

        options.validate()?;
        Ok(options)
    }
}

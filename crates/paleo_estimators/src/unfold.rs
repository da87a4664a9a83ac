//! Fold test by progressive unfolding.
//!
//! Each direction is rotated about its bed's strike by a percentage of the
//! bedding dip. The percentage maximising τ1 (the concentration of the
//! corrected set) is the unfolding outcome: near 100 for pre-folding
//! magnetisation, near 0 for post-folding.
//!
//! ## Search
//!
//! 1. Coarse pass from `min` to `max` in steps of 10 percent; every point is
//!    recorded on the curve.
//! 2. Fine pass over ±9 percent around the coarse argmax, clamped to
//!    `[min, max]`, continuing the coarse running maximum; fine points are
//!    not recorded.
//!
//! Only a strictly larger τ1 replaces the running maximum, so ties keep the
//! earliest percentage.

use paleo_core::math::{eigen_decompose, tilt_correct};
use paleo_core::types::{Bedding, Direction};

use crate::error::EstimatorError;
use crate::kernel::{EstimatorKernel, EstimatorKind, KernelOutput};

/// Coarse pass step, in percent.
pub const COARSE_STEP: usize = 10;

/// Fine pass half-width around the coarse argmax, in percent.
pub const FINE_HALF_WIDTH: i32 = 9;

/// Percent range searched by the fold test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnfoldConfig {
    min: i32,
    max: i32,
}

impl UnfoldConfig {
    /// Default lower bound, in percent.
    pub const DEFAULT_MIN: i32 = -50;
    /// Default upper bound, in percent.
    pub const DEFAULT_MAX: i32 = 150;

    /// Creates a search range.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::InvalidConfig` if `min >= max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use paleo_estimators::UnfoldConfig;
    ///
    /// assert!(UnfoldConfig::new(0, 100).is_ok());
    /// assert!(UnfoldConfig::new(100, 100).is_err());
    /// ```
    pub fn new(min: i32, max: i32) -> Result<Self, EstimatorError> {
        if min >= max {
            return Err(EstimatorError::invalid_config(format!(
                "unfolding range min ({}) must be below max ({})",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Lower bound, in percent.
    #[inline]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound, in percent.
    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }
}

impl Default for UnfoldConfig {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// One coarse point of the unfolding curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnfoldingPoint {
    /// Percent unfolding
    pub percent: i32,
    /// Largest normalised eigenvalue at this percent
    pub tau1: f64,
}

/// Outcome of one fold test run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnfoldResult {
    curve: Vec<UnfoldingPoint>,
    coarse_argmax: i32,
    argmax: i32,
    max_tau1: f64,
}

impl UnfoldResult {
    /// Percent unfolding maximising τ1 after the fine pass.
    pub fn argmax(&self) -> i32 {
        self.argmax
    }

    /// τ1 at [`argmax`](Self::argmax).
    pub fn max_tau1(&self) -> f64 {
        self.max_tau1
    }

    /// Percent maximising τ1 on the coarse grid.
    pub fn coarse_argmax(&self) -> i32 {
        self.coarse_argmax
    }

    /// Coarse unfolding curve.
    pub fn curve(&self) -> &[UnfoldingPoint] {
        &self.curve
    }

    /// Consumes the result, returning the coarse curve.
    pub fn into_curve(self) -> Vec<UnfoldingPoint> {
        self.curve
    }
}

/// Fold test estimator.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnfoldEstimator {
    config: UnfoldConfig,
}

impl UnfoldEstimator {
    /// Creates an estimator searching `config`'s range.
    pub fn new(config: UnfoldConfig) -> Self {
        Self { config }
    }

    /// Returns the search range.
    pub fn config(&self) -> &UnfoldConfig {
        &self.config
    }

    /// Runs the coarse and fine unfolding search on one direction set.
    ///
    /// # Errors
    ///
    /// - `InsufficientDirections` for fewer than two directions
    /// - `MissingBedding` if any direction has no bedding
    /// - `Geometry` if the eigen-decomposition fails
    pub fn unfold(&self, directions: &[Direction]) -> Result<UnfoldResult, EstimatorError> {
        self.validate(directions)?;

        let beddings = collect_beddings(directions)?;
        let mut corrected: Vec<Direction> = Vec::with_capacity(directions.len());
        let mut tau1_at = |percent: i32| -> Result<f64, EstimatorError> {
            let fraction = f64::from(percent) / 100.0;
            corrected.clear();
            corrected.extend(
                directions
                    .iter()
                    .zip(&beddings)
                    .map(|(d, b)| tilt_correct(d, b, fraction)),
            );
            Ok(eigen_decompose(&corrected)?.tau1)
        };

        let (min, max) = (self.config.min, self.config.max);
        let mut curve = Vec::new();
        let mut best = (min, f64::NEG_INFINITY);

        for percent in (min..=max).step_by(COARSE_STEP) {
            let tau1 = tau1_at(percent)?;
            curve.push(UnfoldingPoint { percent, tau1 });
            if tau1 > best.1 {
                best = (percent, tau1);
            }
        }
        let coarse_argmax = best.0;

        let lo = (coarse_argmax - FINE_HALF_WIDTH).max(min);
        let hi = (coarse_argmax + FINE_HALF_WIDTH).min(max);
        let mut fine_best = best;
        for percent in lo..=hi {
            let tau1 = tau1_at(percent)?;
            if tau1 > fine_best.1 {
                fine_best = (percent, tau1);
            }
        }

        Ok(UnfoldResult {
            curve,
            coarse_argmax,
            argmax: fine_best.0,
            max_tau1: fine_best.1,
        })
    }
}

fn collect_beddings(directions: &[Direction]) -> Result<Vec<Bedding>, EstimatorError> {
    directions
        .iter()
        .enumerate()
        .map(|(index, d)| d.bedding().copied().ok_or(EstimatorError::MissingBedding { index }))
        .collect()
}

impl EstimatorKernel for UnfoldEstimator {
    type Curve = Vec<UnfoldingPoint>;

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::Unfold
    }

    fn validate(&self, directions: &[Direction]) -> Result<(), EstimatorError> {
        if directions.len() < self.min_directions() {
            return Err(EstimatorError::insufficient_directions(
                self.min_directions(),
                directions.len(),
            ));
        }
        if let Some(index) = directions.iter().position(|d| d.bedding().is_none()) {
            return Err(EstimatorError::MissingBedding { index });
        }
        Ok(())
    }

    fn estimate(
        &self,
        directions: &[Direction],
    ) -> Result<KernelOutput<Self::Curve>, EstimatorError> {
        let result = self.unfold(directions)?;
        let value = f64::from(result.argmax());
        Ok(KernelOutput::defined(value, result.into_curve()))
    }
}

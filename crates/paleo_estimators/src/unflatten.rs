//! E/I inclination-shallowing correction.
//!
//! Sedimentary remanence is often shallower than the field that produced it.
//! The King (1955) relation `tan(I_obs) = f · tan(I_field)` is inverted for a
//! descending sequence of trial flattening factors. For each trial the mean
//! inclination and the elongation (τ2/τ3) of the unflattened set trace an
//! elongation/inclination path; the estimate is the first point where that
//! path reaches the TK03.GAD reference curve.
//!
//! ## Algorithm
//!
//! For `k` in `0..=80`, `f = (100 - k) / 100`:
//!
//! 1. `I' = atan(tan(I) / f)` for every direction, declination unchanged
//! 2. Mean inclination `|I_mean|` of the Fisher mean
//! 3. Elongation `τ2/τ3` of the orientation matrix
//! 4. Append `(f, |I_mean|, E)` to the curve
//! 5. If `|E_TK03(|I_mean|)| <= E` the curve has intersected the reference
//!
//! A crossing on the very first trial (`f = 1`) has no preceding segment: that
//! point is dropped and the search continues. If no later crossing occurs the
//! outcome is degenerate with an empty curve.

use paleo_core::math::{eigen_decompose, fisher_mean};
use paleo_core::types::Direction;

use crate::error::EstimatorError;
use crate::kernel::{EstimatorKernel, EstimatorKind, KernelOutput};
use crate::reference::tk03_elongation;

/// Largest trial flattening factor, in percent.
const MAX_FLATTENING_PERCENT: u32 = 100;

/// Number of trial flattening factors (1.00 down to 0.20).
pub const FLATTENING_STEPS: u32 = 81;

/// One point of the elongation/inclination path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatteningPoint {
    /// Trial flattening factor `f`
    pub flattening: f64,
    /// Mean inclination magnitude after unflattening (degrees)
    pub inclination: f64,
    /// Elongation τ2/τ3 after unflattening
    pub elongation: f64,
}

/// Outcome of one E/I run.
///
/// The curve is either empty (no intersection) or ends at the first point
/// meeting the TK03.GAD reference.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnflattenResult {
    curve: Vec<FlatteningPoint>,
}

impl UnflattenResult {
    /// Returns the elongation/inclination path.
    pub fn curve(&self) -> &[FlatteningPoint] {
        &self.curve
    }

    /// Consumes the result, returning the path.
    pub fn into_curve(self) -> Vec<FlatteningPoint> {
        self.curve
    }

    /// Whether the path met the reference curve.
    pub fn intersects(&self) -> bool {
        !self.curve.is_empty()
    }

    fn crossing(&self) -> Option<&FlatteningPoint> {
        self.curve.last()
    }

    /// Corrected inclination at the crossing, or 0 with no intersection.
    pub fn inclination(&self) -> f64 {
        self.crossing().map_or(0.0, |p| p.inclination)
    }

    /// Flattening factor at the crossing, or 0 with no intersection.
    pub fn flattening(&self) -> f64 {
        self.crossing().map_or(0.0, |p| p.flattening)
    }

    /// Elongation at the crossing, or 0 with no intersection.
    pub fn elongation(&self) -> f64 {
        self.crossing().map_or(0.0, |p| p.elongation)
    }
}

/// E/I estimator.
///
/// # Examples
///
/// ```
/// use paleo_core::synthetic::elliptical_ring;
/// use paleo_core::types::Direction;
/// use paleo_estimators::UnflattenEstimator;
///
/// let set = elliptical_ring(&Direction::new(0.0, 30.0), 12.0, 6.0, 24);
/// let result = UnflattenEstimator::new().unflatten(&set).unwrap();
/// if result.intersects() {
///     assert!(result.inclination() > 0.0);
/// }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct UnflattenEstimator;

impl UnflattenEstimator {
    /// Creates a new E/I estimator.
    pub fn new() -> Self {
        Self
    }

    /// Runs the E/I search on one direction set.
    ///
    /// # Errors
    ///
    /// - `InsufficientDirections` for fewer than two directions
    /// - `Geometry` if a trial set has no defined mean or eigen-decomposition
    pub fn unflatten(&self, directions: &[Direction]) -> Result<UnflattenResult, EstimatorError> {
        self.validate(directions)?;

        let tangents: Vec<f64> = directions
            .iter()
            .map(|d| d.inclination().to_radians().tan())
            .collect();
        let mut trial: Vec<Direction> = Vec::with_capacity(directions.len());
        let mut curve: Vec<FlatteningPoint> = Vec::new();

        for step in 0..FLATTENING_STEPS {
            let flattening = f64::from(MAX_FLATTENING_PERCENT - step) / 100.0;

            trial.clear();
            trial.extend(directions.iter().zip(&tangents).map(|(d, &tan_inc)| {
                Direction::new(d.declination(), (tan_inc / flattening).atan().to_degrees())
            }));

            let inclination = fisher_mean(&trial)?.inclination.abs();
            let elongation = eigen_decompose(&trial)?.elongation();

            curve.push(FlatteningPoint {
                flattening,
                inclination,
                elongation,
            });

            if tk03_elongation(inclination).abs() <= elongation {
                if curve.len() > 1 {
                    return Ok(UnflattenResult { curve });
                }
                curve.pop();
            }
        }

        Ok(UnflattenResult::default())
    }
}

impl EstimatorKernel for UnflattenEstimator {
    type Curve = Vec<FlatteningPoint>;

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::Unflatten
    }

    fn estimate(
        &self,
        directions: &[Direction],
    ) -> Result<KernelOutput<Self::Curve>, EstimatorError> {
        let result = self.unflatten(directions)?;
        if result.intersects() {
            let value = result.inclination();
            Ok(KernelOutput::defined(value, result.into_curve()))
        } else {
            Ok(KernelOutput::degenerate(Vec::new()))
        }
    }
}

//! The estimator kernel abstraction driven by the bootstrap engine.

use std::fmt;

use paleo_core::types::Direction;

use crate::error::EstimatorError;

/// Minimum number of directions for either kernel: the Fisher mean and the
/// orientation matrix are undefined below this.
pub const MIN_DIRECTIONS: usize = 2;

/// Estimator type. Each kind may have at most one bootstrap run alive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EstimatorKind {
    /// Elongation/Inclination flattening correction
    Unflatten,
    /// Fold test by progressive unfolding
    Unfold,
}

impl EstimatorKind {
    /// All estimator kinds.
    pub const ALL: [EstimatorKind; 2] = [EstimatorKind::Unflatten, EstimatorKind::Unfold];

    /// Returns a stable index in `0..ALL.len()`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Unflatten => 0,
            Self::Unfold => 1,
        }
    }

    /// Returns the display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unflatten => "E/I",
            Self::Unfold => "fold test",
        }
    }

    /// Number of iterations between yields to the host.
    pub fn default_cadence(self) -> usize {
        match self {
            Self::Unflatten => 10,
            Self::Unfold => 5,
        }
    }
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one kernel invocation.
///
/// `value` is the scalar fed into the bootstrap distribution. A `degenerate`
/// outcome is defined but carries no information (E/I without an intersection
/// reports 0 and an empty curve).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KernelOutput<C> {
    /// Scalar outcome
    pub value: f64,
    /// Whether the outcome is the degenerate "no result" placeholder
    pub degenerate: bool,
    /// Auxiliary curve for visualisation
    pub curve: C,
}

impl<C> KernelOutput<C> {
    /// Creates a regular outcome.
    pub fn defined(value: f64, curve: C) -> Self {
        Self {
            value,
            degenerate: false,
            curve,
        }
    }

    /// Creates a degenerate zero-valued outcome.
    pub fn degenerate(curve: C) -> Self {
        Self {
            value: 0.0,
            degenerate: true,
            curve,
        }
    }
}

/// A pure estimator mapping one direction set to one [`KernelOutput`].
///
/// Implementations must be deterministic: the same input yields bit-identical
/// output.
pub trait EstimatorKernel {
    /// Auxiliary curve type.
    type Curve: Clone + fmt::Debug;

    /// Returns the estimator kind used for mutual exclusion and reporting.
    fn kind(&self) -> EstimatorKind;

    /// Minimum number of input directions.
    fn min_directions(&self) -> usize {
        MIN_DIRECTIONS
    }

    /// Checks preconditions on the input set without computing anything.
    ///
    /// # Errors
    ///
    /// `EstimatorError::InsufficientDirections` by default; kernels may add
    /// their own checks.
    fn validate(&self, directions: &[Direction]) -> Result<(), EstimatorError> {
        if directions.len() < self.min_directions() {
            return Err(EstimatorError::insufficient_directions(
                self.min_directions(),
                directions.len(),
            ));
        }
        Ok(())
    }

    /// Runs the kernel on one direction set.
    fn estimate(&self, directions: &[Direction])
        -> Result<KernelOutput<Self::Curve>, EstimatorError>;
}

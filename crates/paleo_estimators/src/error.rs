//! Estimator error types.

use paleo_core::types::GeometryError;
use thiserror::Error;

/// Errors that can occur inside an estimator kernel.
///
/// # Variants
///
/// - `InsufficientDirections`: Fewer directions than the kernel needs
/// - `MissingBedding`: Fold test input without a bedding attitude
/// - `InvalidConfig`: Kernel configuration is inconsistent
/// - `Geometry`: Wrapped failure of a geometry/statistics primitive
///
/// # Examples
///
/// ```
/// use paleo_estimators::EstimatorError;
///
/// let err = EstimatorError::insufficient_directions(2, 0);
/// assert!(err.to_string().contains("at least 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimatorError {
    /// Not enough directions to compute a mean and an orientation matrix.
    #[error("Insufficient directions: need at least {required}, got {provided}")]
    InsufficientDirections {
        /// Minimum number of directions required
        required: usize,
        /// Number of directions provided
        provided: usize,
    },

    /// A direction has no bedding attitude but the kernel needs one.
    #[error("Direction {index} has no bedding attitude")]
    MissingBedding {
        /// Position of the offending direction in the input set
        index: usize,
    },

    /// Invalid kernel configuration.
    #[error("Invalid estimator configuration: {0}")]
    InvalidConfig(String),

    /// Wrapped geometry/statistics error.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

impl EstimatorError {
    /// Create an insufficient directions error.
    pub fn insufficient_directions(required: usize, provided: usize) -> Self {
        Self::InsufficientDirections { required, provided }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Check if this is a precondition failure on the input set.
    ///
    /// Precondition failures are detectable before a run starts; anything else
    /// is a numerical fault inside the computation.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InsufficientDirections { .. } | Self::MissingBedding { .. }
        )
    }
}

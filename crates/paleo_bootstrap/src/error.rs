//! Bootstrap-specific error types.
//!
//! This module provides structured error handling for bootstrap runs, from
//! start-up precondition failures to kernel faults mid-run.

use paleo_estimators::{EstimatorError, EstimatorKind};
use thiserror::Error;

/// Maximum number of bootstrap iterations allowed per run.
pub const MAX_ITERATIONS: usize = 1_000_000;

/// Errors that can occur while starting or running a bootstrap.
///
/// # Variants
///
/// - `AlreadyRunning`: A run of the same estimator kind is active
/// - `EmptyInput`: The direction set is empty
/// - `InsufficientDirections`: Fewer directions than the kernel needs
/// - `InvalidInput`: A kernel-specific precondition failed
/// - `Kernel`: The estimator failed mid-run; the run was aborted
/// - `Cancelled`: The run was cancelled cooperatively
/// - `Config`: Invalid run options
///
/// # Examples
///
/// ```
/// use paleo_bootstrap::BootstrapError;
/// use paleo_estimators::EstimatorKind;
///
/// let err = BootstrapError::already_running(EstimatorKind::Unflatten);
/// assert!(err.is_recoverable());
/// assert!(err.to_string().contains("E/I"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// A bootstrap of this estimator kind is already in progress.
    #[error("A {kind} bootstrap is already running")]
    AlreadyRunning {
        /// Estimator kind holding the running flag
        kind: EstimatorKind,
    },

    /// The direction set is empty.
    #[error("Direction set is empty")]
    EmptyInput,

    /// Not enough directions for the estimator.
    #[error("Insufficient directions: need at least {required}, got {provided}")]
    InsufficientDirections {
        /// Minimum number of directions required
        required: usize,
        /// Number of directions provided
        provided: usize,
    },

    /// A kernel-specific precondition failed before any computation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The estimator failed; the run was aborted.
    #[error("Estimator failed at iteration {iteration}: {source}")]
    Kernel {
        /// Iteration index (0 is the actual data)
        iteration: usize,
        /// Underlying estimator error
        source: EstimatorError,
    },

    /// The run was cancelled before completion.
    #[error("Bootstrap cancelled")]
    Cancelled,

    /// Invalid run options.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BootstrapError {
    /// Create an already running error.
    pub fn already_running(kind: EstimatorKind) -> Self {
        Self::AlreadyRunning { kind }
    }

    /// Create an insufficient directions error.
    pub fn insufficient_directions(required: usize, provided: usize) -> Self {
        Self::InsufficientDirections { required, provided }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a kernel failure error.
    pub fn kernel(iteration: usize, source: EstimatorError) -> Self {
        Self::Kernel { iteration, source }
    }

    /// Check if this is an already running error.
    pub fn is_already_running(&self) -> bool {
        matches!(self, Self::AlreadyRunning { .. })
    }

    /// Check if this is a kernel failure.
    pub fn is_kernel(&self) -> bool {
        matches!(self, Self::Kernel { .. })
    }

    /// Check if this is a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this is a precondition failure on the input set.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::InsufficientDirections { .. } | Self::InvalidInput(_)
        )
    }

    /// Whether the caller may retry the same request later.
    ///
    /// Only a mutual-exclusion conflict clears by itself.
    pub fn is_recoverable(&self) -> bool {
        self.is_already_running()
    }
}

/// Run option validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Iteration count outside valid range [1, 1_000_000].
    #[error("Invalid iteration count {0}: must be in range [1, 1_000_000]")]
    InvalidIterationCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

//! Error types for geometry and statistics primitives.

use thiserror::Error;

/// Errors raised by the geometry/statistics primitives.
///
/// # Variants
/// - `EmptyInput`: The direction set contains no directions
/// - `ZeroResultant`: Unit vectors cancel out and no mean direction exists
/// - `NonFinite`: A computation produced NaN or infinity
/// - `InvalidParameter`: A sampling or correction parameter is out of range
///
/// # Examples
/// ```
/// use paleo_core::types::GeometryError;
///
/// let err = GeometryError::NonFinite { what: "mean inclination" };
/// assert_eq!(format!("{}", err), "Non-finite value computed for mean inclination");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// No directions were supplied.
    #[error("Direction set is empty")]
    EmptyInput,

    /// The resultant vector has (numerically) zero length.
    #[error("Resultant vector has zero length; mean direction is undefined")]
    ZeroResultant,

    /// A computed quantity is NaN or infinite.
    #[error("Non-finite value computed for {what}")]
    NonFinite {
        /// Name of the offending quantity
        what: &'static str,
    },

    /// A parameter is outside its valid range.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },
}

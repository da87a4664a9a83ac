//! Geometry and statistics primitives for direction sets.
//!
//! ## Available Primitives
//!
//! - [`fisher_mean`]: Fisher (1953) mean direction with precision and α95
//! - [`eigen_decompose`]: Normalised eigenvalues τ1 ≥ τ2 ≥ τ3 of the orientation matrix
//! - [`tilt_correct`]: Bedding correction, optionally scaled by an unfolding fraction
//! - [`to_cartesian`] / [`from_cartesian`]: Unit-vector conversions
//!
//! ## Examples
//!
//! ```
//! use paleo_core::math::tilt_correct;
//! use paleo_core::types::{Bedding, Direction};
//!
//! // A direction lying down-dip in a bed dipping 30° east restores to horizontal.
//! let d = Direction::new(90.0, 30.0);
//! let restored = tilt_correct(&d, &Bedding::new(0.0, 30.0), 1.0);
//! assert!((restored.declination() - 90.0).abs() < 1e-9);
//! assert!(restored.inclination().abs() < 1e-9);
//! ```

mod eigen;
mod fisher;
mod tilt;
mod vector;

pub use eigen::{eigen_decompose, orientation_matrix, Eigenvalues};
pub use fisher::{fisher_mean, FisherMean};
pub use tilt::tilt_correct;
pub use vector::{from_cartesian, offset_direction, to_cartesian};

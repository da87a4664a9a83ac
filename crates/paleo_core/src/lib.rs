//! # paleo_core: Geometry and Statistics Foundation for Paleomagnetic Estimators
//!
//! ## Layer 1 (Foundation) Role
//!
//! paleo_core is the bottom layer of the workspace, providing:
//! - Direction types: `Direction`, `Bedding` (`types::direction`)
//! - Error types: `GeometryError` (`types::error`)
//! - Fisher statistics of a direction set (`math::fisher`)
//! - Orientation-matrix eigenvalues τ1 ≥ τ2 ≥ τ3 (`math::eigen`)
//! - Structural (bedding) tilt correction (`math::tilt`)
//! - Seeded resampling with replacement (`rng`)
//! - Synthetic direction sets for demonstrations and tests (`synthetic`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other paleo_* crates:
//! - nalgebra: symmetric 3×3 eigen-decomposition
//! - rand / rand_distr: resampling and synthetic sampling
//! - thiserror: error types
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use paleo_core::math::{eigen_decompose, fisher_mean};
//! use paleo_core::types::Direction;
//!
//! let directions = vec![
//!     Direction::new(350.0, 40.0),
//!     Direction::new(5.0, 45.0),
//!     Direction::new(10.0, 38.0),
//! ];
//!
//! let mean = fisher_mean(&directions).unwrap();
//! assert!(mean.inclination > 35.0 && mean.inclination < 48.0);
//!
//! let eig = eigen_decompose(&directions).unwrap();
//! assert!(eig.tau1 >= eig.tau2 && eig.tau2 >= eig.tau3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Direction` and `Bedding`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod rng;
pub mod synthetic;
pub mod types;

//! # paleo_estimators
//!
//! Single-sample estimator kernels for paleomagnetic direction sets.
//!
//! Each kernel maps one direction set to one scalar outcome plus an auxiliary
//! curve. Kernels perform no resampling and hold no run state; the bootstrap
//! engine in `paleo_bootstrap` drives them over resamples.
//!
//! ## Architecture Position
//!
//! Layer 2 of the workspace. Depends on `paleo_core` (L1) only.
//!
//! ## Modules
//!
//! - `unflatten`: E/I inclination-shallowing correction (King 1955 relation,
//!   TK03.GAD elongation/inclination reference curve)
//! - `unfold`: Fold test by progressive unfolding (Tauxe & Watson 1991)
//! - `reference`: TK03.GAD reference polynomial
//! - `kernel`: The [`EstimatorKernel`] trait shared by both kernels
//!
//! ## Example
//!
//! ```rust
//! use paleo_core::types::{Bedding, Direction};
//! use paleo_estimators::{UnfoldConfig, UnfoldEstimator};
//!
//! let directions = vec![
//!     Direction::new(10.0, 40.0).with_bedding(Bedding::new(0.0, 20.0)),
//!     Direction::new(12.0, 42.0).with_bedding(Bedding::new(90.0, 30.0)),
//!     Direction::new(8.0, 39.0).with_bedding(Bedding::new(200.0, 25.0)),
//! ];
//!
//! let estimator = UnfoldEstimator::new(UnfoldConfig::default());
//! let result = estimator.unfold(&directions).unwrap();
//! assert!((-50..=150).contains(&result.argmax()));
//! ```

pub mod kernel;
pub mod reference;
pub mod unflatten;
pub mod unfold;

mod error;

pub use error::EstimatorError;
pub use kernel::{EstimatorKernel, EstimatorKind, KernelOutput, MIN_DIRECTIONS};
pub use reference::tk03_elongation;
pub use unflatten::{FlatteningPoint, UnflattenEstimator, UnflattenResult};
pub use unfold::{UnfoldConfig, UnfoldEstimator, UnfoldResult, UnfoldingPoint};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::kernel::*;
    pub use crate::unflatten::*;
    pub use crate::unfold::*;
    pub use crate::EstimatorError;
}

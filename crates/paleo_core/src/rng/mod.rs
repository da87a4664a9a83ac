//! # Resampling Infrastructure
//!
//! This module provides the seeded random source used to draw bootstrap
//! resamples of a direction set.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator carries its seed, so any run can be
//!   repeated exactly by re-using the recorded seed
//! - **Non-destructive**: resampling builds a new set and never mutates the source
//!
//! ## Usage Example
//!
//! ```rust
//! use paleo_core::rng::ResampleRng;
//! use paleo_core::types::Direction;
//!
//! let data = vec![Direction::new(0.0, 10.0), Direction::new(90.0, 20.0)];
//!
//! let mut rng = ResampleRng::from_seed(7);
//! let resample = rng.resample(&data);
//! assert_eq!(resample.len(), data.len());
//! ```

mod resample;

pub use resample::ResampleRng;

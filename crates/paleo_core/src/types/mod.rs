//! Core direction and error types.
//!
//! This module provides:
//! - `direction`: Magnetic directions with optional bedding attitude and provenance tag
//! - `error`: Structured error types for geometry/statistics primitives
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Direction`], [`Bedding`] from `direction`
//! - [`GeometryError`] from `error`

pub mod direction;
pub mod error;

pub use direction::{Bedding, Direction};
pub use error::GeometryError;

//! Orientation matrix eigenvalues.

use nalgebra::{Matrix3, SymmetricEigen};

use super::vector::to_cartesian;
use crate::types::{Direction, GeometryError};

/// Normalised eigenvalues of the orientation matrix, ordered τ1 ≥ τ2 ≥ τ3.
///
/// The three values sum to one. Rounding can make the smallest eigenvalue of a
/// rank-deficient matrix slightly negative; such values are clamped to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eigenvalues {
    /// Largest eigenvalue (clustering strength)
    pub tau1: f64,
    /// Intermediate eigenvalue
    pub tau2: f64,
    /// Smallest eigenvalue
    pub tau3: f64,
}

impl Eigenvalues {
    /// Returns the elongation τ2 / τ3 of the distribution.
    ///
    /// Infinite when τ3 is zero (planar data) and NaN when τ2 is also zero.
    #[inline]
    pub fn elongation(&self) -> f64 {
        self.tau2 / self.tau3
    }
}

/// Builds the orientation matrix `(1/N) Σ x xᵀ` of the directions' unit vectors.
///
/// Returns the zero matrix for an empty set.
pub fn orientation_matrix(directions: &[Direction]) -> Matrix3<f64> {
    if directions.is_empty() {
        return Matrix3::zeros();
    }
    let sum = directions
        .iter()
        .map(|d| {
            let v = to_cartesian(d.declination(), d.inclination());
            v * v.transpose()
        })
        .fold(Matrix3::zeros(), |acc, m| acc + m);
    sum / directions.len() as f64
}

/// Computes the normalised eigenvalues of the orientation matrix.
///
/// # Errors
///
/// - `GeometryError::EmptyInput` if `directions` is empty
/// - `GeometryError::NonFinite` if the decomposition does not produce finite values
///
/// # Examples
///
/// ```
/// use paleo_core::math::eigen_decompose;
/// use paleo_core::types::Direction;
///
/// let eig = eigen_decompose(&vec![Direction::new(0.0, 45.0); 4]).unwrap();
/// assert!((eig.tau1 - 1.0).abs() < 1e-12);
/// ```
pub fn eigen_decompose(directions: &[Direction]) -> Result<Eigenvalues, GeometryError> {
    if directions.is_empty() {
        return Err(GeometryError::EmptyInput);
    }

    let eig = SymmetricEigen::new(orientation_matrix(directions));
    let mut values = [
        eig.eigenvalues[0].max(0.0),
        eig.eigenvalues[1].max(0.0),
        eig.eigenvalues[2].max(0.0),
    ];
    values.sort_by(|a, b| b.total_cmp(a));

    let total: f64 = values.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(GeometryError::NonFinite { what: "eigenvalues" });
    }

    Ok(Eigenvalues {
        tau1: values[0] / total,
        tau2: values[1] / total,
        tau3: values[2] / total,
    })
}

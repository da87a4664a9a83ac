//! Fisher (1953) statistics of a direction set.

use nalgebra::Vector3;

use super::vector::{from_cartesian, to_cartesian};
use crate::types::{Direction, GeometryError};

/// Resultant lengths below this are treated as zero.
const ZERO_RESULTANT: f64 = 1e-12;

/// Fisher mean direction and dispersion statistics.
///
/// `kappa` and `alpha95` need at least two directions; for a single direction
/// both are NaN. A perfectly clustered set has infinite `kappa` and zero `alpha95`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FisherMean {
    /// Mean declination (degrees, [0, 360))
    pub declination: f64,
    /// Mean inclination (degrees)
    pub inclination: f64,
    /// Length of the resultant vector R
    pub resultant: f64,
    /// Number of directions N
    pub n: usize,
    /// Precision parameter estimate k = (N - 1) / (N - R)
    pub kappa: f64,
    /// Semi-angle of the 95% cone of confidence (degrees)
    pub alpha95: f64,
}

/// Computes the Fisher mean of a set of directions.
///
/// # Errors
///
/// - `GeometryError::EmptyInput` if `directions` is empty
/// - `GeometryError::ZeroResultant` if the unit vectors sum to zero
///
/// # Examples
///
/// ```
/// use paleo_core::math::fisher_mean;
/// use paleo_core::types::Direction;
///
/// let mean = fisher_mean(&[Direction::new(0.0, 30.0), Direction::new(0.0, 50.0)]).unwrap();
/// assert!((mean.inclination - 40.0).abs() < 1e-9);
/// ```
pub fn fisher_mean(directions: &[Direction]) -> Result<FisherMean, GeometryError> {
    if directions.is_empty() {
        return Err(GeometryError::EmptyInput);
    }

    let sum = directions
        .iter()
        .map(|d| to_cartesian(d.declination(), d.inclination()))
        .fold(Vector3::zeros(), |acc, v| acc + v);

    let resultant = sum.norm();
    if !resultant.is_finite() {
        return Err(GeometryError::NonFinite { what: "resultant" });
    }
    if resultant < ZERO_RESULTANT {
        return Err(GeometryError::ZeroResultant);
    }

    let (declination, inclination) = from_cartesian(&sum);
    let n = directions.len();
    let nf = n as f64;

    let (kappa, alpha95) = if n < 2 {
        (f64::NAN, f64::NAN)
    } else if nf - resultant <= 0.0 {
        (f64::INFINITY, 0.0)
    } else {
        let kappa = (nf - 1.0) / (nf - resultant);
        let cos_a95 =
            1.0 - (nf - resultant) / resultant * (20f64.powf(1.0 / (nf - 1.0)) - 1.0);
        (kappa, cos_a95.clamp(-1.0, 1.0).acos().to_degrees())
    };

    Ok(FisherMean {
        declination,
        inclination,
        resultant,
        n,
        kappa,
        alpha95,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_input() {
        assert_eq!(fisher_mean(&[]), Err(GeometryError::EmptyInput));
    }

    #[test]
    fn test_antipodal_pair_has_zero_resultant() {
        let set = [Direction::new(0.0, 30.0), Direction::new(180.0, -30.0)];
        assert_eq!(fisher_mean(&set), Err(GeometryError::ZeroResultant));
    }

    #[test]
    fn test_single_direction() {
        let mean = fisher_mean(&[Direction::new(123.0, -45.0)]).unwrap();
        assert_abs_diff_eq!(mean.declination, 123.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mean.inclination, -45.0, epsilon = 1e-9);
        assert_eq!(mean.n, 1);
        assert!(mean.kappa.is_nan());
    }

    #[test]
    fn test_identical_directions_infinite_kappa() {
        let set = vec![Direction::new(10.0, 60.0); 5];
        let mean = fisher_mean(&set).unwrap();
        assert_abs_diff_eq!(mean.resultant, 5.0, epsilon = 1e-12);
        assert!(mean.kappa > 1e10);
        assert!(mean.alpha95 < 1e-3);
    }

    #[test]
    fn test_symmetric_declinations_average() {
        let set = [
            Direction::new(350.0, 40.0),
            Direction::new(10.0, 40.0),
            Direction::new(0.0, 30.0),
            Direction::new(0.0, 50.0),
        ];
        let mean = fisher_mean(&set).unwrap();
        let dec = if mean.declination > 180.0 {
            mean.declination - 360.0
        } else {
            mean.declination
        };
        assert_abs_diff_eq!(dec, 0.0, epsilon = 1e-9);
        assert!(mean.inclination > 39.0 && mean.inclination < 41.0);
        assert!(mean.kappa.is_finite() && mean.kappa > 0.0);
        assert!(mean.alpha95 > 0.0 && mean.alpha95 < 30.0);
    }
}

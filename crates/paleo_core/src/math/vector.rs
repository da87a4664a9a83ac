//! Conversions between directions and unit vectors.
//!
//! Cartesian frame: x north, y east, z down.

use nalgebra::Vector3;

use crate::types::Direction;

/// Converts a declination/inclination pair (degrees) to a unit vector.
#[inline]
pub fn to_cartesian(declination: f64, inclination: f64) -> Vector3<f64> {
    let (dec, inc) = (declination.to_radians(), inclination.to_radians());
    Vector3::new(dec.cos() * inc.cos(), dec.sin() * inc.cos(), inc.sin())
}

/// Converts a (not necessarily unit) vector to declination/inclination in degrees.
///
/// Declination is wrapped to [0, 360). A zero vector yields NaN inclination.
#[inline]
pub fn from_cartesian(v: &Vector3<f64>) -> (f64, f64) {
    let r = v.norm();
    let declination = v.y.atan2(v.x).to_degrees().rem_euclid(360.0);
    let inclination = (v.z / r).asin().to_degrees();
    (declination, inclination)
}

/// Returns the direction lying `distance` degrees away from `mean`, towards
/// `azimuth` degrees measured clockwise from the down-inclination meridian.
///
/// Azimuth 0 moves the direction towards steeper inclination, azimuth 90
/// towards larger declination.
pub fn offset_direction(mean: &Direction, distance: f64, azimuth: f64) -> Direction {
    let (dec, inc) = (mean.declination().to_radians(), mean.inclination().to_radians());
    let m = to_cartesian(mean.declination(), mean.inclination());
    let towards_inc = Vector3::new(-inc.sin() * dec.cos(), -inc.sin() * dec.sin(), inc.cos());
    let towards_dec = Vector3::new(-dec.sin(), dec.cos(), 0.0);

    let (rho, az) = (distance.to_radians(), azimuth.to_radians());
    let v = m * rho.cos() + (towards_inc * az.cos() + towards_dec * az.sin()) * rho.sin();
    let (d, i) = from_cartesian(&v);
    Direction::new(d, i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_round_trip_known_directions() {
        for &(d, i) in &[(0.0, 0.0), (90.0, 45.0), (200.0, -30.0), (359.0, 89.0)] {
            let (d2, i2) = from_cartesian(&to_cartesian(d, i));
            assert_abs_diff_eq!(d2, d, epsilon = 1e-9);
            assert_abs_diff_eq!(i2, i, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_down_is_positive_z() {
        let v = to_cartesian(0.0, 90.0);
        assert_abs_diff_eq!(v.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_offset_direction_meridional() {
        let mean = Direction::new(0.0, 40.0);
        let up = offset_direction(&mean, 10.0, 0.0);
        assert_abs_diff_eq!(up.declination(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(up.inclination(), 50.0, epsilon = 1e-9);

        let down = offset_direction(&mean, 10.0, 180.0);
        assert_abs_diff_eq!(down.inclination(), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_offset_direction_preserves_distance() {
        let mean = Direction::new(25.0, -60.0);
        let d = offset_direction(&mean, 7.5, 123.0);
        let cos = to_cartesian(mean.declination(), mean.inclination())
            .dot(&to_cartesian(d.declination(), d.inclination()));
        assert_abs_diff_eq!(cos.acos().to_degrees(), 7.5, epsilon = 1e-9);
    }
}

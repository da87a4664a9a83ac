//! Structural (bedding) tilt correction.

use nalgebra::Vector3;

use super::vector::{from_cartesian, to_cartesian};
use crate::types::{Bedding, Direction};

/// Rotates a direction about the bedding strike line to restore the bed to
/// horizontal.
///
/// `fraction` scales the dip: 0 leaves the direction as measured, 1 applies the
/// full correction, and values outside [0, 1] over- or under-correct (used by
/// progressive unfolding). A negative fraction rotates the other way, so a
/// fraction of -1 undoes a full correction.
///
/// The returned direction carries no bedding or tag.
///
/// # Examples
///
/// ```
/// use paleo_core::math::tilt_correct;
/// use paleo_core::types::{Bedding, Direction};
///
/// let d = Direction::new(40.0, 25.0);
/// let same = tilt_correct(&d, &Bedding::new(120.0, 45.0), 0.0);
/// assert!((same.declination() - 40.0).abs() < 1e-9);
/// assert!((same.inclination() - 25.0).abs() < 1e-9);
/// ```
pub fn tilt_correct(direction: &Direction, bedding: &Bedding, fraction: f64) -> Direction {
    let azimuth = bedding.dip_direction().to_radians();
    let dip = (bedding.dip() * fraction).to_radians();

    let (sa, ca) = (-azimuth.sin(), azimuth.cos());
    let (cdp, sdp) = (dip.cos(), dip.sin());
    let x = to_cartesian(direction.declination(), direction.inclination());

    // Rotation by `dip` about the horizontal strike axis (-sin az, cos az, 0).
    let rotated = Vector3::new(
        x[0] * (sa * sa + ca * ca * cdp) + x[1] * (ca * sa * (1.0 - cdp)) + x[2] * sdp * ca,
        x[0] * ca * sa * (1.0 - cdp) + x[1] * (ca * ca + sa * sa * cdp) - x[2] * sa * sdp,
        -x[0] * ca * sdp + x[1] * sdp * sa + x[2] * cdp,
    );

    let (declination, inclination) = from_cartesian(&rotated);
    Direction::new(declination, inclination)
}

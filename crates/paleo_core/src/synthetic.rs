//! Synthetic direction sets.
//!
//! Generators used by the command-line demo, integration tests and benches:
//! - [`elliptical_ring`]: deterministic ring of directions with chosen
//!   meridional and transverse half-widths
//! - [`fisher_sample`]: Fisher-distributed directions around a mean
//! - [`gaussian_elliptical_sample`]: elongated scatter with independent
//!   meridional/transverse Gaussian offsets
//! - [`flatten`]: forward King (1955) flattening `tan(Io) = f · tan(If)`
//! - [`tilt`]: rotates restored directions into a tilted bed (inverse of the
//!   bedding correction) and records the bedding on each direction

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::math::{offset_direction, tilt_correct};
use crate::types::{Bedding, Direction, GeometryError};

/// Deterministic ring of `n` directions around `mean`.
///
/// Direction `i` sits at angle `θ = 2πi/n` on an ellipse whose half-width is
/// `meridional` degrees along the mean's meridian and `transverse` degrees
/// across it. The ring is symmetric, so its Fisher mean lies close to `mean`.
///
/// # Examples
///
/// ```
/// use paleo_core::synthetic::elliptical_ring;
/// use paleo_core::types::Direction;
///
/// let ring = elliptical_ring(&Direction::new(0.0, 50.0), 12.0, 8.0, 20);
/// assert_eq!(ring.len(), 20);
/// ```
pub fn elliptical_ring(
    mean: &Direction,
    meridional: f64,
    transverse: f64,
    n: usize,
) -> Vec<Direction> {
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / n as f64;
            let along = meridional * theta.cos();
            let across = transverse * theta.sin();
            let distance = along.hypot(across);
            let azimuth = across.atan2(along).to_degrees();
            offset_direction(mean, distance, azimuth)
        })
        .collect()
}

/// Draws `n` directions from a Fisher distribution with precision `kappa`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidParameter` unless `kappa` is finite and positive.
pub fn fisher_sample<R: Rng + ?Sized>(
    rng: &mut R,
    mean: &Direction,
    kappa: f64,
    n: usize,
) -> Result<Vec<Direction>, GeometryError> {
    if !(kappa.is_finite() && kappa > 0.0) {
        return Err(GeometryError::InvalidParameter {
            name: "kappa",
            value: format!("{} (must be finite and positive)", kappa),
        });
    }

    let l = (-2.0 * kappa).exp();
    Ok((0..n)
        .map(|_| {
            let r1: f64 = rng.gen();
            let r2: f64 = rng.gen();
            let a = r1 * (1.0 - l) + l;
            let fac = (-a.ln() / (2.0 * kappa)).sqrt();
            let colatitude = (2.0 * fac.asin()).to_degrees();
            offset_direction(mean, colatitude, 360.0 * r2)
        })
        .collect())
}

/// Draws `n` directions with independent Gaussian angular offsets (degrees)
/// along and across the mean's meridian.
///
/// # Errors
///
/// Returns `GeometryError::InvalidParameter` for a negative or non-finite
/// standard deviation.
pub fn gaussian_elliptical_sample<R: Rng + ?Sized>(
    rng: &mut R,
    mean: &Direction,
    sd_meridional: f64,
    sd_transverse: f64,
    n: usize,
) -> Result<Vec<Direction>, GeometryError> {
    let invalid = |name: &'static str, sd: f64| GeometryError::InvalidParameter {
        name,
        value: format!("{} (must be finite and non-negative)", sd),
    };
    for (name, sd) in [("sd_meridional", sd_meridional), ("sd_transverse", sd_transverse)] {
        if !(sd.is_finite() && sd >= 0.0) {
            return Err(invalid(name, sd));
        }
    }
    let along =
        Normal::new(0.0, sd_meridional).map_err(|_| invalid("sd_meridional", sd_meridional))?;
    let across =
        Normal::new(0.0, sd_transverse).map_err(|_| invalid("sd_transverse", sd_transverse))?;

    Ok((0..n)
        .map(|_| {
            let a: f64 = along.sample(rng);
            let c: f64 = across.sample(rng);
            offset_direction(mean, a.hypot(c), c.atan2(a).to_degrees())
        })
        .collect())
}

/// Applies King's (1955) flattening with factor `f` to every inclination.
///
/// Declinations and metadata are preserved.
pub fn flatten(directions: &[Direction], f: f64) -> Vec<Direction> {
    directions
        .iter()
        .map(|d| {
            let flattened = (f * d.inclination().to_radians().tan()).atan().to_degrees();
            d.with_inclination(flattened)
        })
        .collect()
}

/// Rotates restored (bedding-corrected) directions into the tilted frame of
/// `bedding` and attaches the bedding, so that a full correction recovers
/// the input.
pub fn tilt(directions: &[Direction], bedding: &Bedding) -> Vec<Direction> {
    directions
        .iter()
        .map(|d| {
            let tilted = tilt_correct(d, bedding, -1.0).with_bedding(*bedding);
            match d.tag() {
                Some(tag) => tilted.with_tag(tag),
                None => tilted,
            }
        })
        .collect()
}

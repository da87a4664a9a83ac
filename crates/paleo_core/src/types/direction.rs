//! Magnetic direction and bedding attitude types.
//!
//! All angles are in degrees. Declination is measured clockwise from north,
//! inclination positive downwards. Bedding follows the right-hand rule: the
//! dip direction lies 90° clockwise from the strike.
//!
//! # Examples
//!
//! ```
//! use paleo_core::types::{Bedding, Direction};
//!
//! let d = Direction::new(12.0, 45.0)
//!     .with_bedding(Bedding::new(90.0, 20.0))
//!     .with_tag("site-3/b2");
//!
//! assert_eq!(d.declination(), 12.0);
//! assert_eq!(d.bedding().unwrap().dip_direction(), 180.0);
//! assert_eq!(d.tag(), Some("site-3/b2"));
//! ```

/// Bedding (tilt) attitude of the sampled layer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bedding {
    strike: f64,
    dip: f64,
}

impl Bedding {
    /// Creates a bedding attitude from strike and dip (degrees).
    #[inline]
    pub fn new(strike: f64, dip: f64) -> Self {
        Self { strike, dip }
    }

    /// Returns the strike (degrees).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the dip (degrees).
    #[inline]
    pub fn dip(&self) -> f64 {
        self.dip
    }

    /// Returns the dip direction, `strike + 90` wrapped to [0, 360).
    #[inline]
    pub fn dip_direction(&self) -> f64 {
        (self.strike + 90.0).rem_euclid(360.0)
    }
}

/// A single paleomagnetic direction.
///
/// Immutable once captured: all fields are private and only the builder-style
/// `with_*` methods (which consume `self`) can attach optional metadata.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    declination: f64,
    inclination: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    bedding: Option<Bedding>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    tag: Option<String>,
}

impl Direction {
    /// Creates a direction from declination and inclination (degrees).
    #[inline]
    pub fn new(declination: f64, inclination: f64) -> Self {
        Self {
            declination,
            inclination,
            bedding: None,
            tag: None,
        }
    }

    /// Attaches a bedding attitude.
    #[inline]
    pub fn with_bedding(mut self, bedding: Bedding) -> Self {
        self.bedding = Some(bedding);
        self
    }

    /// Attaches a provenance tag (specimen or site name).
    #[inline]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Returns the declination (degrees).
    #[inline]
    pub fn declination(&self) -> f64 {
        self.declination
    }

    /// Returns the inclination (degrees).
    #[inline]
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Returns the bedding attitude, if any.
    #[inline]
    pub fn bedding(&self) -> Option<&Bedding> {
        self.bedding.as_ref()
    }

    /// Returns the provenance tag, if any.
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns a copy with the inclination replaced, keeping all metadata.
    #[inline]
    pub fn with_inclination(&self, inclination: f64) -> Self {
        Self {
            inclination,
            ..self.clone()
        }
    }
}

//! TK03.GAD elongation/inclination reference curve (Tauxe et al., 2008).

/// Cubic coefficients, highest power first, for inclination in degrees.
pub const TK03_COEFFICIENTS: [f64; 4] = [3.15976125e-6, -3.52459817e-4, -1.46641090e-2, 2.89538539];

/// Returns the TK03.GAD reference elongation at `inclination` (degrees).
///
/// # Examples
///
/// ```
/// use paleo_estimators::tk03_elongation;
///
/// assert!((tk03_elongation(0.0) - 2.89538539).abs() < 1e-12);
/// assert!(tk03_elongation(60.0) < tk03_elongation(30.0));
/// ```
#[inline]
pub fn tk03_elongation(inclination: f64) -> f64 {
    let [c0, c1, c2, c3] = TK03_COEFFICIENTS;
    ((c0 * inclination + c1) * inclination + c2) * inclination + c3
}

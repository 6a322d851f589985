//! Degree arithmetic on directions.
//!
//! Inputs are expected in (-180, 180] (as produced by `Vec2Ext::angle_deg`); the
//! formulas stay well defined for any pair whose difference is within ±360.

/// Unsigned minimal angular difference in degrees, in [0, 180].
#[inline]
pub fn angle_diff(a1: f64, a2: f64) -> f64 {
    180.0 - ((a1 - a2).abs() - 180.0).abs()
}

/// Map any finite angle in degrees into (-180, 180].
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let m = deg.rem_euclid(360.0);
    if m > 180.0 {
        m - 360.0
    } else {
        m
    }
}

//! # Trigonometric Formulas
//!
//! Sine, cosine and tangent of an angle, their inverses, and the
//! degree/radian conversions they rely on.
//!
//! ## Notation
//!
//! - `θ` = Angle (degrees or radians, see [`AngleUnit`])
//! - `x` = Ratio in [-1, 1] for the inverse sine/cosine
//!
//! All functions are plain `f64` formulas. Domain checks (|x| ≤ 1, cos θ ≠ 0)
//! happen in the engine before these are called.

use crate::settings::AngleUnit;

/// Tolerance for deciding that cos θ is zero when θ is given in radians
const RADIAN_POLE_TOLERANCE: f64 = 1e-12;

// =============================================================================
// ANGLE CONVERSION
// =============================================================================

/// Convert degrees to radians
///
/// # Formula
/// rad = deg × π / 180
///
/// # Example
/// ```rust
/// use calc_core::formulas::trig::degrees_to_radians;
///
/// let rad = degrees_to_radians(180.0);
/// assert!((rad - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert radians to degrees
///
/// # Formula
/// deg = rad × 180 / π
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Bring an angle in the given unit into radians
#[inline]
pub fn to_radians(angle: f64, unit: AngleUnit) -> f64 {
    match unit {
        AngleUnit::Degrees => degrees_to_radians(angle),
        AngleUnit::Radians => angle,
    }
}

/// Express an angle in radians in the given unit
#[inline]
pub fn from_radians(radians: f64, unit: AngleUnit) -> f64 {
    match unit {
        AngleUnit::Degrees => radians_to_degrees(radians),
        AngleUnit::Radians => radians,
    }
}

// =============================================================================
// FORWARD FUNCTIONS
// =============================================================================

/// Sine of an angle
///
/// # Example
/// ```rust
/// use calc_core::formulas::trig::sine;
/// use calc_core::settings::AngleUnit;
///
/// assert!((sine(30.0, AngleUnit::Degrees) - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn sine(angle: f64, unit: AngleUnit) -> f64 {
    to_radians(angle, unit).sin()
}

/// Cosine of an angle
#[inline]
pub fn cosine(angle: f64, unit: AngleUnit) -> f64 {
    to_radians(angle, unit).cos()
}

/// Tangent of an angle
///
/// # Formula
/// tan θ = sin θ / cos θ
///
/// Undefined where cos θ = 0; check with [`tangent_is_defined`] first.
#[inline]
pub fn tangent(angle: f64, unit: AngleUnit) -> f64 {
    to_radians(angle, unit).tan()
}

/// Whether tan θ exists for this angle.
///
/// In degrees the poles are exactly 90° + k·180°. `rem_euclid` is exact,
/// so comparing the remainder against 90 holds for any finite angle.
/// In radians π/2 has no exact `f64` representation and a small tolerance
/// on cos θ is used instead.
pub fn tangent_is_defined(angle: f64, unit: AngleUnit) -> bool {
    match unit {
        AngleUnit::Degrees => angle.rem_euclid(180.0) != 90.0,
        AngleUnit::Radians => angle.cos().abs() > RADIAN_POLE_TOLERANCE,
    }
}

// =============================================================================
// INVERSE FUNCTIONS
// =============================================================================

/// Inverse sine, result in the given unit
///
/// # Domain
/// -1 ≤ x ≤ 1, result in [-90°, 90°]
///
/// # Example
/// ```rust
/// use calc_core::formulas::trig::arcsin;
/// use calc_core::settings::AngleUnit;
///
/// assert!((arcsin(0.5, AngleUnit::Degrees) - 30.0).abs() < 1e-9);
/// ```
#[inline]
pub fn arcsin(x: f64, unit: AngleUnit) -> f64 {
    from_radians(x.asin(), unit)
}

/// Inverse cosine, result in the given unit
///
/// # Domain
/// -1 ≤ x ≤ 1, result in [0°, 180°]
#[inline]
pub fn arccos(x: f64, unit: AngleUnit) -> f64 {
    from_radians(x.acos(), unit)
}

/// Inverse tangent, result in the given unit (range (-90°, 90°))
#[inline]
pub fn arctan(x: f64, unit: AngleUnit) -> f64 {
    from_radians(x.atan(), unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_degree_radian_roundtrip() {
        assert!(approx_eq(degrees_to_radians(90.0), FRAC_PI_2));
        assert!(approx_eq(radians_to_degrees(PI), 180.0));
    }

    #[test]
    fn test_known_degree_values() {
        assert!(approx_eq(sine(90.0, AngleUnit::Degrees), 1.0));
        assert!(approx_eq(cosine(60.0, AngleUnit::Degrees), 0.5));
        assert!(approx_eq(tangent(45.0, AngleUnit::Degrees), 1.0));
    }

    #[test]
    fn test_radian_mode() {
        assert!(approx_eq(sine(FRAC_PI_2, AngleUnit::Radians), 1.0));
        assert!(approx_eq(arccos(-1.0, AngleUnit::Radians), PI));
    }

    #[test]
    fn test_tangent_poles() {
        assert!(!tangent_is_defined(90.0, AngleUnit::Degrees));
        assert!(!tangent_is_defined(270.0, AngleUnit::Degrees));
        assert!(!tangent_is_defined(-90.0, AngleUnit::Degrees));
        assert!(tangent_is_defined(180.0, AngleUnit::Degrees));
        assert!(tangent_is_defined(89.999, AngleUnit::Degrees));
        assert!(tangent_is_defined(180_000_000_000_000_096.0, AngleUnit::Degrees));
        assert!(tangent_is_defined(1.8e17, AngleUnit::Degrees));
        assert!(!tangent_is_defined(FRAC_PI_2, AngleUnit::Radians));
        assert!(tangent_is_defined(1.0, AngleUnit::Radians));
    }

    #[test]
    fn test_inverse_ranges() {
        assert!(approx_eq(arcsin(-1.0, AngleUnit::Degrees), -90.0));
        assert!(approx_eq(arccos(0.0, AngleUnit::Degrees), 90.0));
        assert!(approx_eq(arctan(1.0, AngleUnit::Degrees), 45.0));
    }

    proptest! {
        #[test]
        fn arcsin_inverts_sine(x in -FRAC_PI_2..=FRAC_PI_2) {
            let back = arcsin(sine(x, AngleUnit::Radians), AngleUnit::Radians);
            prop_assert!((back - x).abs() < 1e-7, "x = {}, back = {}", x, back);
        }

        #[test]
        fn arccos_inverts_cosine_in_degrees(x in 0.0f64..=180.0) {
            let back = arccos(cosine(x, AngleUnit::Degrees), AngleUnit::Degrees);
            prop_assert!((back - x).abs() < 1e-5, "x = {}, back = {}", x, back);
        }
    }
}

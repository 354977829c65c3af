//! # Logarithm, Power and Root Formulas
//!
//! ## Notation
//!
//! - `x` = Argument of the logarithm (x > 0)
//! - `b` = Base (b > 0, b ≠ 1)
//! - `y` = Exponent
//!
//! The identities used:
//! - log_b(x) = ln(x) / ln(b)
//! - antilog_b(y) = b^y, the inverse of log_b

/// Common (base-10) logarithm
///
/// # Example
/// ```rust
/// use calc_core::formulas::logarithm::log10;
///
/// assert_eq!(log10(1000.0), 3.0);
/// ```
#[inline]
pub fn log10(x: f64) -> f64 {
    x.log10()
}

/// Natural logarithm (base e)
#[inline]
pub fn natural_log(x: f64) -> f64 {
    x.ln()
}

/// Logarithm of `x` in an arbitrary base
///
/// # Formula
/// log_b(x) = ln(x) / ln(b)
///
/// # Example
/// ```rust
/// use calc_core::formulas::logarithm::log_base;
///
/// assert!((log_base(8.0, 2.0) - 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn log_base(x: f64, base: f64) -> f64 {
    // log2/log10 are exact for exact powers, the quotient is not
    if base == 2.0 {
        x.log2()
    } else if base == 10.0 {
        x.log10()
    } else {
        x.ln() / base.ln()
    }
}

/// Antilogarithm: raise the base to the given exponent
///
/// # Formula
/// antilog_b(y) = b^y
#[inline]
pub fn antilog(y: f64, base: f64) -> f64 {
    base.powf(y)
}

/// General power a^n
///
/// Integer exponents go through `powi` so that negative bases work
/// (e.g. (-2)^3 = -8).
#[inline]
pub fn power(base: f64, exponent: f64) -> f64 {
    if exponent.fract() == 0.0 && exponent.abs() <= i32::MAX as f64 {
        base.powi(exponent as i32)
    } else {
        base.powf(exponent)
    }
}

/// Principal square root
#[inline]
pub fn square_root(x: f64) -> f64 {
    x.sqrt()
}

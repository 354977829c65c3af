//! # Integer Formulas
//!
//! Greatest common factor and least common multiple over positive integers.
//! These are exact; no floating-point tolerance applies.

/// Greatest common factor of two integers (Euclid's algorithm)
///
/// # Example
/// ```rust
/// use calc_core::formulas::integer::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// ```
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple of two integers.
///
/// Returns `None` when the result does not fit in a `u64`.
///
/// # Formula
/// lcm(a, b) = a / gcd(a, b) × b
///
/// Dividing first keeps the intermediate value as small as possible.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Greatest common factor of a list of integers
pub fn gcd_all(values: &[u64]) -> u64 {
    values.iter().copied().fold(0, gcd)
}

/// Least common multiple of a list of integers, `None` on overflow
pub fn lcm_all(values: &[u64]) -> Option<u64> {
    values
        .iter()
        .copied()
        .try_fold(1u64, |acc, value| lcm(acc, value))
}

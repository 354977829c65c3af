//! # Result Formatting
//!
//! Fixed-precision formatting for calculator results. Precision comes from
//! the calculator's default unless the settings override it.

use crate::settings::DisplaySettings;

/// Format a real result with a fixed number of decimals.
///
/// Negative zero (and anything that rounds to it) prints as zero.
///
/// # Example
/// ```rust
/// use calc_core::format::format_fixed;
///
/// assert_eq!(format_fixed(0.5, 4, false), "0.5000");
/// assert_eq!(format_fixed(-1e-17, 6, false), "0.000000");
/// assert_eq!(format_fixed(1234567.891, 2, true), "1,234,567.89");
/// ```
pub fn format_fixed(value: f64, precision: u8, thousands_separator: bool) -> String {
    let formatted = format!("{:.*}", precision as usize, value);

    let formatted = match formatted.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => magnitude.to_string(),
        _ => formatted,
    };

    if thousands_separator {
        group_thousands(&formatted)
    } else {
        formatted
    }
}

/// Format an exact integer result.
pub fn format_integer(value: u64, thousands_separator: bool) -> String {
    let formatted = value.to_string();
    if thousands_separator {
        group_thousands(&formatted)
    } else {
        formatted
    }
}

/// Resolve the precision for a calculator: settings override, else default
pub fn effective_precision(display: &DisplaySettings, default_precision: u8) -> u8 {
    display.precision.unwrap_or(default_precision)
}

/// Insert commas every three digits of the integer part
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_precision() {
        assert_eq!(format_fixed(std::f64::consts::PI, 6, false), "3.141593");
        assert_eq!(format_fixed(2.0, 0, false), "2");
        assert_eq!(format_fixed(-0.25, 2, false), "-0.25");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_fixed(-0.0, 2, false), "0.00");
        assert_eq!(format_fixed(-0.0000001, 4, false), "0.0000");
        assert_eq!(format_fixed(-0.0, 0, false), "0");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_fixed(-9876543.21, 1, true), "-9,876,543.2");
        assert_eq!(format_fixed(999.0, 0, true), "999");
        assert_eq!(format_integer(3_600_000, true), "3,600,000");
        assert_eq!(format_integer(3_600_000, false), "3600000");
    }

    #[test]
    fn test_effective_precision() {
        let mut display = DisplaySettings::default();
        assert_eq!(effective_precision(&display, 6), 6);
        display.precision = Some(2);
        assert_eq!(effective_precision(&display, 6), 2);
    }
}

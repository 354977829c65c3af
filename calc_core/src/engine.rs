//! # Calculation Engine
//!
//! The one contract every calculator page follows:
//!
//! ```text
//! raw text ──parse──▶ numbers ──validate──▶ domain-checked ──compute──▶ value ──format──▶ display
//!     │                  │                        │                       │
//!     └── NotANumber     └── NotAnInteger         └── OutOfDomain         └── CalculationFailed
//! ```
//!
//! Every failure is a [`CalcError`] value. Nothing panics and nothing is
//! retried; the caller shows `error.user_message()` in place of the result.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::evaluate;
//! use calc_core::formulas::Calculator;
//! use calc_core::settings::Settings;
//!
//! let settings = Settings::default();
//!
//! let out = evaluate(Calculator::Gcf, &["12", "18"], &settings).unwrap();
//! assert_eq!(out.display, "6");
//!
//! let err = evaluate(Calculator::Arcsin, &["2"], &settings).unwrap_err();
//! assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::format::{effective_precision, format_fixed, format_integer};
use crate::formulas::registry::{Calculator, CalculatorMetadata, InputKind, OutputKind};
use crate::formulas::{conversion, integer, logarithm, trig};
use crate::settings::{AngleUnit, Settings};

// ============================================================================
// Output Types
// ============================================================================

/// A computed value before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ResultValue {
    /// Floating-point result
    Real(f64),
    /// Exact integer result (GCF, LCM)
    Integer(u64),
}

impl ResultValue {
    /// The value as `f64` (integers convert losslessly up to 2^53)
    pub fn as_f64(&self) -> f64 {
        match self {
            ResultValue::Real(v) => *v,
            ResultValue::Integer(v) => *v as f64,
        }
    }
}

/// Successful calculation, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// Which calculator produced this
    pub calculator: Calculator,
    /// Raw computed value
    pub value: ResultValue,
    /// Formatted value (fixed precision, no unit)
    pub display: String,
    /// Label for the result (e.g., "log10(x)")
    pub label: String,
    /// Unit suffix, if any
    pub unit: Option<String>,
}

impl CalculationOutput {
    /// Formatted value followed by its unit ("30.000000°", "745.70 W")
    pub fn display_with_unit(&self) -> String {
        match self.unit.as_deref() {
            Some(unit) if unit == "°" => format!("{}{}", self.display, unit),
            Some(unit) => format!("{} {}", self.display, unit),
            None => self.display.clone(),
        }
    }
}

// ============================================================================
// Public Entry Point
// ============================================================================

/// Evaluate a calculator against raw text inputs.
///
/// # Arguments
///
/// * `calculator` - Which formula to apply
/// * `inputs` - Raw field texts, in the order of the calculator's fields
/// * `settings` - Angle unit and display precision
///
/// # Errors
///
/// - `MissingField` if a required field is absent or blank
/// - `TooManyInputs` if more fields are given than the calculator accepts
/// - `NotANumber` / `NotAnInteger` if a field does not parse
/// - `OutOfDomain` if a value lies outside the formula's domain
/// - `CalculationFailed` if the result is not a finite number or overflows
pub fn evaluate<S: AsRef<str>>(
    calculator: Calculator,
    inputs: &[S],
    settings: &Settings,
) -> CalcResult<CalculationOutput> {
    let meta = calculator.metadata();
    let result = evaluate_with_metadata(calculator, &meta, inputs, settings);
    if let Err(ref error) = result {
        debug!(
            calculator = meta.slug,
            code = error.error_code(),
            %error,
            "calculator input rejected"
        );
    }
    result
}

fn evaluate_with_metadata<S: AsRef<str>>(
    calculator: Calculator,
    meta: &CalculatorMetadata,
    inputs: &[S],
    settings: &Settings,
) -> CalcResult<CalculationOutput> {
    check_arity(meta, inputs.len())?;

    let value = match meta.input_kind {
        InputKind::Real => {
            let values = parse_fields(meta, inputs, parse_real)?;
            let texts: Vec<&str> = inputs.iter().map(|raw| raw.as_ref().trim()).collect();
            compute_real(calculator, meta, &values, &texts, settings)?
        }
        InputKind::PositiveInteger => {
            let values = parse_fields(meta, inputs, parse_positive_integer)?;
            compute_integer(calculator, meta, &values)?
        }
    };

    let unit = match meta.output {
        OutputKind::Angle => Some(settings.angle_unit.symbol().to_string()),
        _ => meta.result_unit.map(str::to_string),
    };

    Ok(CalculationOutput {
        calculator,
        value,
        display: format_value(value, meta, settings),
        label: meta.result_label.to_string(),
        unit,
    })
}

// ============================================================================
// Parsing
// ============================================================================

fn check_arity(meta: &CalculatorMetadata, count: usize) -> CalcResult<()> {
    if let Some(max) = meta.max_inputs() {
        if count > max {
            return Err(CalcError::TooManyInputs {
                calculator: meta.name.to_string(),
                expected: max,
                actual: count,
            });
        }
    }
    if count < meta.min_inputs() {
        let missing = &meta.inputs[count];
        return Err(CalcError::missing_field(missing.label));
    }
    Ok(())
}

fn parse_fields<S, T, F>(meta: &CalculatorMetadata, inputs: &[S], parse: F) -> CalcResult<Vec<T>>
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> CalcResult<T>,
{
    inputs
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let label = meta.field(index).map(|f| f.label).unwrap_or("value");
            let text = raw.as_ref().trim();
            if text.is_empty() {
                return Err(CalcError::missing_field(label));
            }
            parse(label, text)
        })
        .collect()
}

/// Accept the Unicode minus sign that copy-paste from typeset text produces
fn normalize_number(text: &str) -> String {
    text.replace('\u{2212}', "-")
}

/// Parse a finite real number.
///
/// `f64::from_str` accepts "inf" and "NaN"; those are rejected here.
pub fn parse_real(label: &str, text: &str) -> CalcResult<f64> {
    match normalize_number(text).parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::not_a_number(label, text)),
    }
}

/// Parse a whole number greater than zero.
///
/// "12" and "12.0" are both accepted; "12.5" is `NotAnInteger`,
/// "0" and "-4" are `OutOfDomain`.
pub fn parse_positive_integer(label: &str, text: &str) -> CalcResult<u64> {
    let normalized = normalize_number(text);
    if let Ok(value) = normalized.parse::<u64>() {
        if value == 0 {
            return Err(CalcError::out_of_domain(label, text, "Enter a whole number greater than zero"));
        }
        return Ok(value);
    }

    let value = parse_real(label, text)?;
    if value.fract() != 0.0 {
        return Err(CalcError::not_an_integer(label, text));
    }
    if value <= 0.0 {
        return Err(CalcError::out_of_domain(label, text, "Enter a whole number greater than zero"));
    }
    if value >= u64::MAX as f64 {
        return Err(CalcError::out_of_domain(label, text, "Number is too large"));
    }
    Ok(value as u64)
}

// ============================================================================
// Computation
// ============================================================================

fn compute_real(
    calculator: Calculator,
    meta: &CalculatorMetadata,
    values: &[f64],
    texts: &[&str],
    settings: &Settings,
) -> CalcResult<ResultValue> {
    let unit = settings.angle_unit;
    let label = |index: usize| meta.field(index).map(|f| f.label).unwrap_or("value");
    let x = values[0];

    let value = match calculator {
        Calculator::Sine => trig::sine(x, unit),
        Calculator::Cosine => trig::cosine(x, unit),
        Calculator::Tangent => {
            if !trig::tangent_is_defined(x, unit) {
                return Err(CalcError::out_of_domain(
                    label(0),
                    texts[0],
                    format!("Tangent is undefined at {}{}", texts[0], angle_suffix(unit)),
                ));
            }
            trig::tangent(x, unit)
        }
        Calculator::Arcsin | Calculator::Arccos => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(CalcError::out_of_domain(
                    label(0),
                    texts[0],
                    "Value must be between -1 and 1",
                ));
            }
            if calculator == Calculator::Arcsin {
                trig::arcsin(x, unit)
            } else {
                trig::arccos(x, unit)
            }
        }
        Calculator::Arctan => trig::arctan(x, unit),
        Calculator::DegreesToRadians => trig::degrees_to_radians(x),
        Calculator::RadiansToDegrees => trig::radians_to_degrees(x),
        Calculator::Log | Calculator::NaturalLog => {
            require_positive_log_argument(label(0), x, texts[0])?;
            if calculator == Calculator::Log {
                logarithm::log10(x)
            } else {
                logarithm::natural_log(x)
            }
        }
        Calculator::LogBase => {
            let base = values[1];
            require_positive_log_argument(label(0), x, texts[0])?;
            require_valid_base(label(1), base, texts[1])?;
            logarithm::log_base(x, base)
        }
        Calculator::Antilog => {
            let base = values[1];
            if base <= 0.0 {
                return Err(CalcError::out_of_domain(
                    label(1),
                    texts[1],
                    "Base must be greater than zero",
                ));
            }
            logarithm::antilog(x, base)
        }
        Calculator::Exponent => {
            let exponent = values[1];
            if x == 0.0 && exponent < 0.0 {
                return Err(CalcError::out_of_domain(
                    label(0),
                    texts[0],
                    "Zero cannot be raised to a negative power",
                ));
            }
            logarithm::power(x, exponent)
        }
        Calculator::SquareRoot => {
            if x < 0.0 {
                return Err(CalcError::out_of_domain(
                    label(0),
                    texts[0],
                    "Square root is only defined for numbers zero or greater",
                ));
            }
            logarithm::square_root(x)
        }
        Calculator::WattsToHorsepower => conversion::watts_to_horsepower(x),
        Calculator::HorsepowerToWatts => conversion::horsepower_to_watts(x),
        Calculator::KilowattsToBtuPerHour => conversion::kilowatts_to_btu_per_hour(x),
        Calculator::JoulesToCalories => conversion::joules_to_calories(x),
        Calculator::CaloriesToJoules => conversion::calories_to_joules(x),
        Calculator::KilowattHoursToJoules => conversion::kilowatt_hours_to_joules(x),
        Calculator::Gcf | Calculator::Lcm => {
            return Err(CalcError::Internal {
                message: format!("{} is an integer calculator", meta.name),
            });
        }
    };

    if value.is_nan() {
        return Err(CalcError::calculation_failed(meta.name, "Result is not a real number"));
    }
    if value.is_infinite() {
        return Err(CalcError::calculation_failed(meta.name, "Result is too large to display"));
    }
    Ok(ResultValue::Real(value))
}

fn compute_integer(calculator: Calculator, meta: &CalculatorMetadata, values: &[u64]) -> CalcResult<ResultValue> {
    match calculator {
        Calculator::Gcf => Ok(ResultValue::Integer(integer::gcd_all(values))),
        Calculator::Lcm => integer::lcm_all(values)
            .map(ResultValue::Integer)
            .ok_or_else(|| CalcError::calculation_failed(meta.name, "Result is too large to display")),
        _ => Err(CalcError::Internal {
            message: format!("{} is not an integer calculator", meta.name),
        }),
    }
}

fn require_positive_log_argument(label: &str, x: f64, text: &str) -> CalcResult<()> {
    if x <= 0.0 {
        return Err(CalcError::out_of_domain(
            label,
            text,
            "Logarithm is only defined for numbers greater than zero",
        ));
    }
    Ok(())
}

fn require_valid_base(label: &str, base: f64, text: &str) -> CalcResult<()> {
    if base <= 0.0 {
        return Err(CalcError::out_of_domain(label, text, "Base must be greater than zero"));
    }
    if base == 1.0 {
        return Err(CalcError::out_of_domain(label, text, "Base cannot be 1"));
    }
    Ok(())
}

fn angle_suffix(unit: AngleUnit) -> &'static str {
    match unit {
        AngleUnit::Degrees => "°",
        AngleUnit::Radians => " rad",
    }
}

// ============================================================================
// Formatting
// ============================================================================

fn format_value(value: ResultValue, meta: &CalculatorMetadata, settings: &Settings) -> String {
    let separator = settings.display.thousands_separator;
    match value {
        ResultValue::Integer(v) => format_integer(v, separator),
        ResultValue::Real(v) => {
            let precision = effective_precision(&settings.display, meta.precision);
            format_fixed(v, precision, separator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(calc: Calculator, inputs: &[&str]) -> CalcResult<CalculationOutput> {
        evaluate(calc, inputs, &Settings::default())
    }

    fn real(calc: Calculator, inputs: &[&str]) -> f64 {
        eval(calc, inputs).unwrap().value.as_f64()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_gcf_lcm_exact() {
        let gcf = eval(Calculator::Gcf, &["12", "18"]).unwrap();
        assert_eq!(gcf.value, ResultValue::Integer(6));
        assert_eq!(gcf.display, "6");

        let lcm = eval(Calculator::Lcm, &["4", "6"]).unwrap();
        assert_eq!(lcm.value, ResultValue::Integer(12));
        assert_eq!(lcm.display, "12");
    }

    #[test]
    fn test_gcf_many_values() {
        let out = eval(Calculator::Gcf, &["24", "36", "60", "84"]).unwrap();
        assert_eq!(out.value, ResultValue::Integer(12));
    }

    #[test]
    fn test_integer_validation() {
        let err = eval(Calculator::Gcf, &["12.5", "18"]).unwrap_err();
        assert_eq!(err.error_code(), "NOT_AN_INTEGER");

        let err = eval(Calculator::Lcm, &["0", "6"]).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");

        let err = eval(Calculator::Lcm, &["-4", "6"]).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");

        let err = eval(Calculator::Gcf, &["twelve", "18"]).unwrap_err();
        assert_eq!(err.error_code(), "NOT_A_NUMBER");

        // whole-valued decimals are fine
        assert_eq!(eval(Calculator::Gcf, &["12.0", "18"]).unwrap().display, "6");
    }

    #[test]
    fn test_lcm_overflow() {
        let err = eval(
            Calculator::Lcm,
            &["4294967291", "4294967279", "4294967231"],
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_trig_degrees() {
        assert!(approx_eq(real(Calculator::Sine, &["30"]), 0.5));
        assert_eq!(eval(Calculator::Sine, &["30"]).unwrap().display, "0.500000");
        assert_eq!(eval(Calculator::Sine, &["180"]).unwrap().display, "0.000000");
        assert_eq!(eval(Calculator::Sine, &["360"]).unwrap().display, "0.000000");
        assert!(approx_eq(real(Calculator::Cosine, &["60"]), 0.5));
        assert!(approx_eq(real(Calculator::Tangent, &["45"]), 1.0));
    }

    #[test]
    fn test_tangent_undefined() {
        let err = eval(Calculator::Tangent, &["90"]).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
        assert!(err.user_message().contains("Tangent is undefined"));
        assert!(eval(Calculator::Tangent, &["-270"]).is_err());
    }

    #[test]
    fn test_tangent_defined_at_large_angles() {
        // parses to 180000000000000096.0, which is 96° past a multiple of 180°
        let out = eval(Calculator::Tangent, &["180000000000000090"]).unwrap();
        assert!(out.value.as_f64().is_finite());

        assert!(eval(Calculator::Tangent, &["1890"]).is_err());
    }

    #[test]
    fn test_domain_errors_keep_field_text() {
        let err = eval(Calculator::SquareRoot, &[" -1e300 "]).unwrap_err();
        assert_eq!(
            err,
            CalcError::out_of_domain(
                "Number",
                "-1e300",
                "Square root is only defined for numbers zero or greater"
            )
        );

        let err = eval(Calculator::Tangent, &["90.0"]).unwrap_err();
        assert_eq!(err.user_message(), "Tangent is undefined at 90.0°.");
    }

    #[test]
    fn test_inverse_trig() {
        let out = eval(Calculator::Arcsin, &["0.5"]).unwrap();
        assert!(approx_eq(out.value.as_f64(), 30.0));
        assert_eq!(out.display_with_unit(), "30.000000°");

        assert!(approx_eq(real(Calculator::Arccos, &["0"]), 90.0));
        assert!(approx_eq(real(Calculator::Arctan, &["1"]), 45.0));
    }

    #[test]
    fn test_inverse_trig_domain() {
        for input in ["2", "-1.0001", "1e10"] {
            let err = eval(Calculator::Arcsin, &[input]).unwrap_err();
            assert_eq!(err.error_code(), "OUT_OF_DOMAIN", "input {}", input);
            assert!(eval(Calculator::Arccos, &[input]).is_err());
        }
        assert!(eval(Calculator::Arcsin, &["1"]).is_ok());
        assert!(eval(Calculator::Arccos, &["-1"]).is_ok());
    }

    #[test]
    fn test_radian_settings() {
        let mut settings = Settings::default();
        settings.angle_unit = AngleUnit::Radians;

        let out = evaluate(Calculator::Arcsin, &["1"], &settings).unwrap();
        assert!(approx_eq(out.value.as_f64(), std::f64::consts::FRAC_PI_2));
        assert_eq!(out.unit.as_deref(), Some("rad"));
        assert_eq!(out.display_with_unit(), "1.570796 rad");

        let out = evaluate(Calculator::Sine, &["3.141592653589793"], &settings).unwrap();
        assert_eq!(out.display, "0.000000");
    }

    #[test]
    fn test_logarithms() {
        assert!(approx_eq(real(Calculator::Log, &["1000"]), 3.0));
        assert!(approx_eq(real(Calculator::NaturalLog, &["1"]), 0.0));
        assert!(approx_eq(real(Calculator::LogBase, &["8", "2"]), 3.0));
        assert!(approx_eq(real(Calculator::Antilog, &["2", "10"]), 100.0));
    }

    #[test]
    fn test_logarithm_domain() {
        assert_eq!(eval(Calculator::Log, &["-5"]).unwrap_err().error_code(), "OUT_OF_DOMAIN");
        assert_eq!(eval(Calculator::Log, &["0"]).unwrap_err().error_code(), "OUT_OF_DOMAIN");
        assert_eq!(eval(Calculator::NaturalLog, &["-1"]).unwrap_err().error_code(), "OUT_OF_DOMAIN");

        let err = eval(Calculator::LogBase, &["8", "1"]).unwrap_err();
        assert_eq!(err.user_message(), "Base cannot be 1.");
        assert!(eval(Calculator::LogBase, &["8", "-2"]).is_err());
        assert!(eval(Calculator::Antilog, &["2", "0"]).is_err());
    }

    #[test]
    fn test_powers_and_roots() {
        assert_eq!(eval(Calculator::Exponent, &["2", "10"]).unwrap().display, "1024.000000");
        assert_eq!(eval(Calculator::SquareRoot, &["144"]).unwrap().display, "12.000000");
        assert_eq!(
            eval(Calculator::SquareRoot, &["-4"]).unwrap_err().error_code(),
            "OUT_OF_DOMAIN"
        );
    }

    #[test]
    fn test_non_finite_results() {
        let err = eval(Calculator::Exponent, &["-8", "0.5"]).unwrap_err();
        assert_eq!(err.user_message(), "Result is not a real number.");

        let err = eval(Calculator::Exponent, &["10", "400"]).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_zero_to_negative_power() {
        let err = eval(Calculator::Exponent, &["0", "-1"]).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
        assert_eq!(err.user_message(), "Zero cannot be raised to a negative power.");

        assert_eq!(eval(Calculator::Exponent, &["0", "0"]).unwrap().display, "1.000000");
        assert_eq!(eval(Calculator::Exponent, &["0", "3"]).unwrap().display, "0.000000");
    }

    #[test]
    fn test_conversions() {
        let out = eval(Calculator::HorsepowerToWatts, &["1"]).unwrap();
        assert_eq!(out.display_with_unit(), "745.70 W");

        let out = eval(Calculator::KilowattHoursToJoules, &["1"]).unwrap();
        assert_eq!(out.display, "3600000");

        let mut settings = Settings::default();
        settings.display.thousands_separator = true;
        let out = evaluate(Calculator::KilowattHoursToJoules, &["1"], &settings).unwrap();
        assert_eq!(out.display, "3,600,000");
    }

    #[test]
    fn test_non_numeric_input() {
        for calc in [Calculator::Sine, Calculator::Log, Calculator::WattsToHorsepower] {
            let err = eval(calc, &["abc"]).unwrap_err();
            assert_eq!(err.error_code(), "NOT_A_NUMBER");
            assert!(err.is_validation());
        }
        assert_eq!(eval(Calculator::Log, &["inf"]).unwrap_err().error_code(), "NOT_A_NUMBER");
        assert_eq!(eval(Calculator::Log, &["NaN"]).unwrap_err().error_code(), "NOT_A_NUMBER");
    }

    #[test]
    fn test_arity() {
        let err = eval(Calculator::LogBase, &["8"]).unwrap_err();
        assert_eq!(err, CalcError::missing_field("Base"));

        let err = eval(Calculator::Log, &["8", "2"]).unwrap_err();
        assert_eq!(err.error_code(), "TOO_MANY_INPUTS");

        let err = eval(Calculator::Log, &["   "]).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_whitespace_and_unicode_minus() {
        assert!(approx_eq(real(Calculator::Arcsin, &["  \u{2212}0.5 "]), -30.0));
    }

    #[test]
    fn test_precision_override() {
        let mut settings = Settings::default();
        settings.display.precision = Some(2);
        let out = evaluate(Calculator::Log, &["2"], &settings).unwrap();
        assert_eq!(out.display, "0.30");
    }

    #[test]
    fn test_output_serialization() {
        let out = eval(Calculator::Gcf, &["12", "18"]).unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["calculator"], "Gcf");
        assert_eq!(json["value"]["kind"], "Integer");
        assert_eq!(json["value"]["value"], 6);
        assert_eq!(json["display"], "6");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arcsin_of_sine_text_recovers_angle(x in -89.0f64..=89.0) {
                let sine = trig::sine(x, AngleUnit::Degrees).to_string();
                let out = eval(Calculator::Arcsin, &[sine.as_str()]).unwrap();
                let back = out.value.as_f64();
                prop_assert!((back - x).abs() < 1e-6, "x = {}, back = {}", x, back);
                prop_assert_eq!(out.display, format_fixed(back, 6, false));
            }

            #[test]
            fn gcf_and_lcm_agree_with_divisibility(a in 1u32.., b in 1u32..) {
                let (a_text, b_text) = (a.to_string(), b.to_string());
                let inputs = [a_text.as_str(), b_text.as_str()];
                let gcf = match eval(Calculator::Gcf, &inputs).unwrap().value {
                    ResultValue::Integer(v) => v,
                    other => panic!("unexpected {:?}", other),
                };
                let lcm = match eval(Calculator::Lcm, &inputs).unwrap().value {
                    ResultValue::Integer(v) => v,
                    other => panic!("unexpected {:?}", other),
                };
                let (a, b) = (u64::from(a), u64::from(b));
                prop_assert_eq!(a % gcf, 0);
                prop_assert_eq!(b % gcf, 0);
                prop_assert_eq!(lcm % a, 0);
                prop_assert_eq!(lcm % b, 0);
                prop_assert_eq!(gcf * lcm, a * b);
            }
        }
    }
}

//! # Power and Energy Conversions
//!
//! Thin formula wrappers over the unit newtypes in [`crate::units`], so the
//! registry can treat conversions like any other single-argument formula.

use crate::units::{BtuPerHour, Calories, Horsepower, Joules, KilowattHours, Kilowatts, Watts};

/// W → hp
///
/// # Example
/// ```rust
/// use calc_core::formulas::conversion::watts_to_horsepower;
///
/// assert!((watts_to_horsepower(745.699871582) - 1.0).abs() < 1e-9);
/// ```
#[inline]
pub fn watts_to_horsepower(watts: f64) -> f64 {
    Horsepower::from(Watts(watts)).value()
}

/// hp → W
#[inline]
pub fn horsepower_to_watts(hp: f64) -> f64 {
    Watts::from(Horsepower(hp)).value()
}

/// kW → BTU/h
#[inline]
pub fn kilowatts_to_btu_per_hour(kw: f64) -> f64 {
    BtuPerHour::from(Kilowatts(kw)).value()
}

/// J → cal
#[inline]
pub fn joules_to_calories(joules: f64) -> f64 {
    Calories::from(Joules(joules)).value()
}

/// cal → J
#[inline]
pub fn calories_to_joules(calories: f64) -> f64 {
    Joules::from(Calories(calories)).value()
}

/// kWh → J
#[inline]
pub fn kilowatt_hours_to_joules(kwh: f64) -> f64 {
    Joules::from(KilowattHours(kwh)).value()
}

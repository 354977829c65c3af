//! # Unit Types
//!
//! Type-safe wrappers for the power and energy units used by the conversion
//! calculators. These provide compile-time safety against unit confusion
//! while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The converters only cover a handful of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Conversion Factors
//!
//! - 1 mechanical horsepower = 745.69987158227022 W (550 ft·lbf/s)
//! - 1 kW = 3412.14163 BTU/h (International Table BTU)
//! - 1 thermochemical calorie = 4.184 J
//! - 1 kWh = 3.6 × 10⁶ J
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Horsepower, Watts};
//!
//! let engine = Horsepower(2.0);
//! let watts: Watts = engine.into();
//! assert!((watts.0 - 1491.3997).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

/// Watts per mechanical horsepower
pub const WATTS_PER_HORSEPOWER: f64 = 745.699_871_582_270_2;

/// BTU per hour delivered by one kilowatt
pub const BTU_PER_HOUR_PER_KILOWATT: f64 = 3_412.141_63;

/// Joules per thermochemical calorie
pub const JOULES_PER_CALORIE: f64 = 4.184;

/// Joules per kilowatt-hour
pub const JOULES_PER_KILOWATT_HOUR: f64 = 3.6e6;

// ============================================================================
// Power Units
// ============================================================================

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

/// Power in mechanical horsepower
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Horsepower(pub f64);

/// Power in BTU per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BtuPerHour(pub f64);

impl From<Kilowatts> for Watts {
    fn from(kw: Kilowatts) -> Self {
        Watts(kw.0 * 1000.0)
    }
}

impl From<Watts> for Kilowatts {
    fn from(w: Watts) -> Self {
        Kilowatts(w.0 / 1000.0)
    }
}

impl From<Horsepower> for Watts {
    fn from(hp: Horsepower) -> Self {
        Watts(hp.0 * WATTS_PER_HORSEPOWER)
    }
}

impl From<Watts> for Horsepower {
    fn from(w: Watts) -> Self {
        Horsepower(w.0 / WATTS_PER_HORSEPOWER)
    }
}

impl From<Kilowatts> for BtuPerHour {
    fn from(kw: Kilowatts) -> Self {
        BtuPerHour(kw.0 * BTU_PER_HOUR_PER_KILOWATT)
    }
}

impl From<BtuPerHour> for Kilowatts {
    fn from(btu: BtuPerHour) -> Self {
        Kilowatts(btu.0 / BTU_PER_HOUR_PER_KILOWATT)
    }
}

// ============================================================================
// Energy Units
// ============================================================================

/// Energy in joules
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Joules(pub f64);

/// Energy in thermochemical calories
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calories(pub f64);

/// Energy in kilowatt-hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilowattHours(pub f64);

impl From<Calories> for Joules {
    fn from(cal: Calories) -> Self {
        Joules(cal.0 * JOULES_PER_CALORIE)
    }
}

impl From<Joules> for Calories {
    fn from(j: Joules) -> Self {
        Calories(j.0 / JOULES_PER_CALORIE)
    }
}

impl From<KilowattHours> for Joules {
    fn from(kwh: KilowattHours) -> Self {
        Joules(kwh.0 * JOULES_PER_KILOWATT_HOUR)
    }
}

impl From<Joules> for KilowattHours {
    fn from(j: Joules) -> Self {
        KilowattHours(j.0 / JOULES_PER_KILOWATT_HOUR)
    }
}

// ============================================================================
// Raw Value Access
// ============================================================================

macro_rules! impl_value {
    ($($type:ty),* $(,)?) => {
        $(
            impl $type {
                /// Raw value in this unit
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Watts, Kilowatts, Horsepower, BtuPerHour, Joules, Calories, KilowattHours);

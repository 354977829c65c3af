//! # Calculator Registry
//!
//! Central registry of every calculator page. Each calculator has metadata
//! including its route slug, page title and description, formula, and input
//! field definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe calculator identification via the `Calculator` enum
//! - Full metadata for page rendering and documentation
//! - Lookup by slug, legacy alias, or route path
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::formulas::registry::Calculator;
//!
//! let calc = Calculator::lookup("/calculators/log-calculator").unwrap();
//! assert_eq!(calc, Calculator::Log);
//!
//! let meta = calc.metadata();
//! println!("{}: {}", meta.title, meta.formula_plain);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Path prefix shared by every calculator route
pub const ROUTE_PREFIX: &str = "/calculators/";

// ============================================================================
// Categories
// ============================================================================

/// Categories for grouping calculators in listings and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorCategory {
    /// sin, cos, tan and their inverses
    Trigonometry,
    /// Degree/radian conversion
    Angles,
    /// log, ln, log_b, antilog
    Logarithms,
    /// Exponents and roots
    PowersAndRoots,
    /// GCF and LCM
    Integers,
    /// Watts, horsepower, BTU/h
    PowerUnits,
    /// Joules, calories, kWh
    EnergyUnits,
}

impl CalculatorCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorCategory::Trigonometry => "Trigonometry",
            CalculatorCategory::Angles => "Angles",
            CalculatorCategory::Logarithms => "Logarithms",
            CalculatorCategory::PowersAndRoots => "Powers & Roots",
            CalculatorCategory::Integers => "Integers",
            CalculatorCategory::PowerUnits => "Power Units",
            CalculatorCategory::EnergyUnits => "Energy Units",
        }
    }

    /// Sort order for listings (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            CalculatorCategory::Trigonometry => 1,
            CalculatorCategory::Angles => 2,
            CalculatorCategory::Logarithms => 3,
            CalculatorCategory::PowersAndRoots => 4,
            CalculatorCategory::Integers => 5,
            CalculatorCategory::PowerUnits => 6,
            CalculatorCategory::EnergyUnits => 7,
        }
    }
}

// ============================================================================
// Input and Output Definitions
// ============================================================================

/// How the raw text of every field is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// Any finite real number
    Real,
    /// A whole number greater than zero
    PositiveInteger,
}

/// What the formula produces and how it is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputKind {
    /// Plain real number
    Real,
    /// Angle, expressed in the configured angle unit
    Angle,
    /// Exact integer
    Integer,
}

/// Definition of one input field on a calculator page.
#[derive(Debug, Clone, Serialize)]
pub struct InputField {
    /// Stable key (e.g., "x", "base")
    pub key: &'static str,
    /// Label shown next to the field
    pub label: &'static str,
    /// Example value shown in an empty field
    pub placeholder: &'static str,
    /// Units, if fixed (angle fields take theirs from settings)
    pub unit: Option<&'static str>,
    /// Field holds an angle in the configured unit
    pub is_angle: bool,
}

impl InputField {
    pub const fn new(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self { key, label, placeholder, unit: None, is_angle: false }
    }

    pub const fn with_unit(key: &'static str, label: &'static str, placeholder: &'static str, unit: &'static str) -> Self {
        Self { key, label, placeholder, unit: Some(unit), is_angle: false }
    }

    pub const fn angle(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self { key, label, placeholder, unit: None, is_angle: true }
    }
}

// ============================================================================
// Calculator Metadata
// ============================================================================

/// Complete metadata for one calculator page.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorMetadata {
    /// Human-readable name (e.g., "Arcsin Calculator")
    pub name: &'static str,
    /// Route slug, unique across the registry
    pub slug: &'static str,
    /// Older slugs that still resolve to this calculator
    pub aliases: Vec<&'static str>,
    /// Page title for metadata
    pub title: &'static str,
    /// Page description for metadata
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Input fields, in order
    pub inputs: Vec<InputField>,
    /// How every field is parsed
    pub input_kind: InputKind,
    /// The last field may repeat (GCF/LCM of many numbers)
    pub variadic: bool,
    /// Kind of result
    pub output: OutputKind,
    /// Label for the result
    pub result_label: &'static str,
    /// Units of the result, if fixed
    pub result_unit: Option<&'static str>,
    /// Default decimal places shown
    pub precision: u8,
    /// Category for grouping
    pub category: CalculatorCategory,
    /// Source module where the formula lives
    pub source_module: &'static str,
    /// Function implementing the formula
    pub source_function: &'static str,
}

impl CalculatorMetadata {
    /// Canonical route path for the page
    pub fn path(&self) -> String {
        format!("{}{}", ROUTE_PREFIX, self.slug)
    }

    /// Minimum number of fields the calculator needs
    pub fn min_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Maximum number of fields, `None` when the last field repeats
    pub fn max_inputs(&self) -> Option<usize> {
        if self.variadic {
            None
        } else {
            Some(self.inputs.len())
        }
    }

    /// Field definition for position `index`, repeating the last for
    /// variadic calculators
    pub fn field(&self, index: usize) -> Option<&InputField> {
        match self.inputs.get(index) {
            Some(field) => Some(field),
            None if self.variadic => self.inputs.last(),
            None => None,
        }
    }
}

// ============================================================================
// Calculator Enum
// ============================================================================

/// All calculators in Tally.
///
/// Each variant maps to one formula and one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Calculator {
    // -------------------------------------------------------------------------
    // Trigonometry
    // -------------------------------------------------------------------------
    /// sin θ
    Sine,
    /// cos θ
    Cosine,
    /// tan θ
    Tangent,
    /// asin x
    Arcsin,
    /// acos x
    Arccos,
    /// atan x
    Arctan,

    // -------------------------------------------------------------------------
    // Angles
    // -------------------------------------------------------------------------
    /// deg × π/180
    DegreesToRadians,
    /// rad × 180/π
    RadiansToDegrees,

    // -------------------------------------------------------------------------
    // Logarithms
    // -------------------------------------------------------------------------
    /// log10 x
    Log,
    /// ln x
    NaturalLog,
    /// log_b x
    LogBase,
    /// b^y
    Antilog,

    // -------------------------------------------------------------------------
    // Powers and Roots
    // -------------------------------------------------------------------------
    /// a^n
    Exponent,
    /// √x
    SquareRoot,

    // -------------------------------------------------------------------------
    // Integers
    // -------------------------------------------------------------------------
    /// gcd(a, b, ...)
    Gcf,
    /// lcm(a, b, ...)
    Lcm,

    // -------------------------------------------------------------------------
    // Power Units
    // -------------------------------------------------------------------------
    WattsToHorsepower,
    HorsepowerToWatts,
    KilowattsToBtuPerHour,

    // -------------------------------------------------------------------------
    // Energy Units
    // -------------------------------------------------------------------------
    JoulesToCalories,
    CaloriesToJoules,
    KilowattHoursToJoules,
}

impl Calculator {
    /// Get the full metadata for this calculator
    pub fn metadata(&self) -> CalculatorMetadata {
        match self {
            // Trigonometry
            Calculator::Sine => CalculatorMetadata {
                name: "Sine Calculator",
                slug: "sine-calculator",
                aliases: vec!["sin-calculator"],
                title: "Sine Calculator - Find sin(θ) of Any Angle",
                description: "Calculate the sine of an angle in degrees or radians.",
                formula_plain: "sin(θ)",
                inputs: vec![InputField::angle("angle", "Angle", "30")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "sin(θ)",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::Trigonometry,
                source_module: "formulas/trig.rs",
                source_function: "sine",
            },

            Calculator::Cosine => CalculatorMetadata {
                name: "Cosine Calculator",
                slug: "cosine-calculator",
                aliases: vec!["cos-calculator"],
                title: "Cosine Calculator - Find cos(θ) of Any Angle",
                description: "Calculate the cosine of an angle in degrees or radians.",
                formula_plain: "cos(θ)",
                inputs: vec![InputField::angle("angle", "Angle", "60")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "cos(θ)",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::Trigonometry,
                source_module: "formulas/trig.rs",
                source_function: "cosine",
            },

            Calculator::Tangent => CalculatorMetadata {
                name: "Tangent Calculator",
                slug: "tangent-calculator",
                aliases: vec!["tan-calculator"],
                title: "Tangent Calculator - Find tan(θ) of Any Angle",
                description: "Calculate the tangent of an angle. Undefined where cos(θ) = 0.",
                formula_plain: "tan(θ) = sin(θ) / cos(θ)",
                inputs: vec![InputField::angle("angle", "Angle", "45")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "tan(θ)",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::Trigonometry,
                source_module: "formulas/trig.rs",
                source_function: "tangent",
            },

            Calculator::Arcsin => CalculatorMetadata {
                name: "Arcsin Calculator",
                slug: "arcsin-calculator",
                aliases: vec!["inverse-sine-calculator", "asin-calculator"],
                title: "Arcsin Calculator - Inverse Sine",
                description: "Find the angle whose sine is the given value, for values between -1 and 1.",
                formula_plain: "θ = asin(x), -1 <= x <= 1",
                inputs: vec![InputField::new("x", "Value", "0.5")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Angle,
                result_label: "θ",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::Trigonometry,
                source_module: "formulas/trig.rs",
                source_function: "arcsin",
            },

            Calculator::Arccos => CalculatorMetadata {
                name: "Arccos Calculator",
                slug: "arccos-calculator",
                aliases: vec!["inverse-cosine-calculator", "acos-calculator"],
                title: "Arccos Calculator - Inverse Cosine",
                description: "Find the angle whose cosine is the given value, for values between -1 and 1.",
                formula_plain: "θ = acos(x), -1 <= x <= 1",
                inputs: vec![InputField::new("x", "Value", "0.5")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Angle,
                result_label: "θ",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::Trigonometry,
                source_module: "formulas/trig.rs",
                source_function: "arccos",
            },

            Calculator::Arctan => CalculatorMetadata {
                name: "Arctan Calculator",
                slug: "arctan-calculator",
                aliases: vec!["inverse-tangent-calculator", "atan-calculator"],
                title: "Arctan Calculator - Inverse Tangent",
                description: "Find the angle whose tangent is the given value.",
                formula_plain: "θ = atan(x)",
                inputs: vec![InputField::new("x", "Value", "1")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Angle,
                result_label: "θ",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::Trigonometry,
                source_module: "formulas/trig.rs",
                source_function: "arctan",
            },

            // Angles
            Calculator::DegreesToRadians => CalculatorMetadata {
                name: "Degrees to Radians Converter",
                slug: "degrees-to-radians",
                aliases: vec!["degree-to-radian-converter"],
                title: "Degrees to Radians Converter",
                description: "Convert an angle from degrees to radians.",
                formula_plain: "rad = deg × π / 180",
                inputs: vec![InputField::with_unit("degrees", "Degrees", "180", "°")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "Radians",
                result_unit: Some("rad"),
                precision: 6,
                category: CalculatorCategory::Angles,
                source_module: "formulas/trig.rs",
                source_function: "degrees_to_radians",
            },

            Calculator::RadiansToDegrees => CalculatorMetadata {
                name: "Radians to Degrees Converter",
                slug: "radians-to-degrees",
                aliases: vec!["radian-to-degree-converter"],
                title: "Radians to Degrees Converter",
                description: "Convert an angle from radians to degrees.",
                formula_plain: "deg = rad × 180 / π",
                inputs: vec![InputField::with_unit("radians", "Radians", "3.14159", "rad")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "Degrees",
                result_unit: Some("°"),
                precision: 4,
                category: CalculatorCategory::Angles,
                source_module: "formulas/trig.rs",
                source_function: "radians_to_degrees",
            },

            // Logarithms
            Calculator::Log => CalculatorMetadata {
                name: "Log Calculator",
                slug: "log-calculator",
                aliases: vec!["log10-calculator", "common-log-calculator"],
                title: "Log Calculator - Base 10 Logarithm",
                description: "Calculate the common (base-10) logarithm of a positive number.",
                formula_plain: "log10(x), x > 0",
                inputs: vec![InputField::new("x", "Number", "100")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "log10(x)",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::Logarithms,
                source_module: "formulas/logarithm.rs",
                source_function: "log10",
            },

            Calculator::NaturalLog => CalculatorMetadata {
                name: "Natural Log Calculator",
                slug: "natural-log-calculator",
                aliases: vec!["ln-calculator"],
                title: "Natural Log Calculator - ln(x)",
                description: "Calculate the natural logarithm (base e) of a positive number.",
                formula_plain: "ln(x), x > 0",
                inputs: vec![InputField::new("x", "Number", "2.718281828")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "ln(x)",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::Logarithms,
                source_module: "formulas/logarithm.rs",
                source_function: "natural_log",
            },

            Calculator::LogBase => CalculatorMetadata {
                name: "Logarithm Base Calculator",
                slug: "log-base-calculator",
                aliases: vec!["logarithm-calculator"],
                title: "Logarithm Calculator - Any Base",
                description: "Calculate the logarithm of a positive number in any positive base other than 1.",
                formula_plain: "log_b(x) = ln(x) / ln(b)",
                inputs: vec![
                    InputField::new("x", "Number", "8"),
                    InputField::new("base", "Base", "2"),
                ],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "log_b(x)",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::Logarithms,
                source_module: "formulas/logarithm.rs",
                source_function: "log_base",
            },

            Calculator::Antilog => CalculatorMetadata {
                name: "Antilog Calculator",
                slug: "antilog-calculator",
                aliases: vec!["anti-log-calculator", "inverse-log-calculator"],
                title: "Antilog Calculator - Inverse Logarithm",
                description: "Raise a base to a power to undo a logarithm.",
                formula_plain: "antilog_b(y) = b^y",
                inputs: vec![
                    InputField::new("y", "Logarithm", "2"),
                    InputField::new("base", "Base", "10"),
                ],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "b^y",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::Logarithms,
                source_module: "formulas/logarithm.rs",
                source_function: "antilog",
            },

            // Powers and Roots
            Calculator::Exponent => CalculatorMetadata {
                name: "Exponent Calculator",
                slug: "exponent-calculator",
                aliases: vec!["power-calculator"],
                title: "Exponent Calculator - Raise a Number to a Power",
                description: "Calculate a base raised to an exponent.",
                formula_plain: "a^n",
                inputs: vec![
                    InputField::new("base", "Base", "2"),
                    InputField::new("exponent", "Exponent", "10"),
                ],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "a^n",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::PowersAndRoots,
                source_module: "formulas/logarithm.rs",
                source_function: "power",
            },

            Calculator::SquareRoot => CalculatorMetadata {
                name: "Square Root Calculator",
                slug: "square-root-calculator",
                aliases: vec!["sqrt-calculator"],
                title: "Square Root Calculator",
                description: "Calculate the principal square root of a non-negative number.",
                formula_plain: "√x, x >= 0",
                inputs: vec![InputField::new("x", "Number", "144")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "√x",
                result_unit: None,
                precision: 6,
                category: CalculatorCategory::PowersAndRoots,
                source_module: "formulas/logarithm.rs",
                source_function: "square_root",
            },

            // Integers
            Calculator::Gcf => CalculatorMetadata {
                name: "GCF Calculator",
                slug: "gcf-calculator",
                aliases: vec!["gcd-calculator", "greatest-common-factor-calculator"],
                title: "GCF Calculator - Greatest Common Factor",
                description: "Find the greatest common factor of two or more positive whole numbers.",
                formula_plain: "gcd(a, b) = gcd(b, a mod b)",
                inputs: vec![
                    InputField::new("a", "First number", "12"),
                    InputField::new("b", "Next number", "18"),
                ],
                input_kind: InputKind::PositiveInteger,
                variadic: true,
                output: OutputKind::Integer,
                result_label: "GCF",
                result_unit: None,
                precision: 0,
                category: CalculatorCategory::Integers,
                source_module: "formulas/integer.rs",
                source_function: "gcd_all",
            },

            Calculator::Lcm => CalculatorMetadata {
                name: "LCM Calculator",
                slug: "lcm-calculator",
                aliases: vec!["least-common-multiple-calculator"],
                title: "LCM Calculator - Least Common Multiple",
                description: "Find the least common multiple of two or more positive whole numbers.",
                formula_plain: "lcm(a, b) = a / gcd(a, b) × b",
                inputs: vec![
                    InputField::new("a", "First number", "4"),
                    InputField::new("b", "Next number", "6"),
                ],
                input_kind: InputKind::PositiveInteger,
                variadic: true,
                output: OutputKind::Integer,
                result_label: "LCM",
                result_unit: None,
                precision: 0,
                category: CalculatorCategory::Integers,
                source_module: "formulas/integer.rs",
                source_function: "lcm_all",
            },

            // Power Units
            Calculator::WattsToHorsepower => CalculatorMetadata {
                name: "Watts to Horsepower Converter",
                slug: "watts-to-horsepower",
                aliases: vec!["watt-to-hp-converter"],
                title: "Watts to Horsepower (W to hp) Converter",
                description: "Convert power in watts to mechanical horsepower.",
                formula_plain: "hp = W / 745.699872",
                inputs: vec![InputField::with_unit("watts", "Power", "1000", "W")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "Power",
                result_unit: Some("hp"),
                precision: 4,
                category: CalculatorCategory::PowerUnits,
                source_module: "formulas/conversion.rs",
                source_function: "watts_to_horsepower",
            },

            Calculator::HorsepowerToWatts => CalculatorMetadata {
                name: "Horsepower to Watts Converter",
                slug: "horsepower-to-watts",
                aliases: vec!["hp-to-watt-converter"],
                title: "Horsepower to Watts (hp to W) Converter",
                description: "Convert mechanical horsepower to watts.",
                formula_plain: "W = hp × 745.699872",
                inputs: vec![InputField::with_unit("horsepower", "Power", "1", "hp")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "Power",
                result_unit: Some("W"),
                precision: 2,
                category: CalculatorCategory::PowerUnits,
                source_module: "formulas/conversion.rs",
                source_function: "horsepower_to_watts",
            },

            Calculator::KilowattsToBtuPerHour => CalculatorMetadata {
                name: "Kilowatts to BTU/h Converter",
                slug: "kilowatts-to-btu-per-hour",
                aliases: vec!["kw-to-btu-converter"],
                title: "Kilowatts to BTU per Hour (kW to BTU/h) Converter",
                description: "Convert power in kilowatts to BTU per hour.",
                formula_plain: "BTU/h = kW × 3412.14163",
                inputs: vec![InputField::with_unit("kilowatts", "Power", "1.5", "kW")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "Power",
                result_unit: Some("BTU/h"),
                precision: 2,
                category: CalculatorCategory::PowerUnits,
                source_module: "formulas/conversion.rs",
                source_function: "kilowatts_to_btu_per_hour",
            },

            // Energy Units
            Calculator::JoulesToCalories => CalculatorMetadata {
                name: "Joules to Calories Converter",
                slug: "joules-to-calories",
                aliases: vec!["joule-to-calorie-converter"],
                title: "Joules to Calories (J to cal) Converter",
                description: "Convert energy in joules to thermochemical calories.",
                formula_plain: "cal = J / 4.184",
                inputs: vec![InputField::with_unit("joules", "Energy", "1000", "J")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "Energy",
                result_unit: Some("cal"),
                precision: 4,
                category: CalculatorCategory::EnergyUnits,
                source_module: "formulas/conversion.rs",
                source_function: "joules_to_calories",
            },

            Calculator::CaloriesToJoules => CalculatorMetadata {
                name: "Calories to Joules Converter",
                slug: "calories-to-joules",
                aliases: vec!["calorie-to-joule-converter"],
                title: "Calories to Joules (cal to J) Converter",
                description: "Convert thermochemical calories to joules.",
                formula_plain: "J = cal × 4.184",
                inputs: vec![InputField::with_unit("calories", "Energy", "250", "cal")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "Energy",
                result_unit: Some("J"),
                precision: 4,
                category: CalculatorCategory::EnergyUnits,
                source_module: "formulas/conversion.rs",
                source_function: "calories_to_joules",
            },

            Calculator::KilowattHoursToJoules => CalculatorMetadata {
                name: "Kilowatt-hours to Joules Converter",
                slug: "kilowatt-hours-to-joules",
                aliases: vec!["kwh-to-joule-converter"],
                title: "Kilowatt-hours to Joules (kWh to J) Converter",
                description: "Convert energy in kilowatt-hours to joules.",
                formula_plain: "J = kWh × 3,600,000",
                inputs: vec![InputField::with_unit("kilowatt_hours", "Energy", "1", "kWh")],
                input_kind: InputKind::Real,
                variadic: false,
                output: OutputKind::Real,
                result_label: "Energy",
                result_unit: Some("J"),
                precision: 0,
                category: CalculatorCategory::EnergyUnits,
                source_module: "formulas/conversion.rs",
                source_function: "kilowatt_hours_to_joules",
            },
        }
    }

    /// Route slug (shortcut for `metadata().slug`)
    pub fn slug(&self) -> &'static str {
        self.metadata().slug
    }

    /// Canonical route path, e.g. `/calculators/log-calculator`
    pub fn path(&self) -> String {
        self.metadata().path()
    }

    /// Find a calculator by slug or legacy alias
    pub fn from_slug(slug: &str) -> Option<Calculator> {
        SLUG_INDEX.get(slug.trim().to_ascii_lowercase().as_str()).copied()
    }

    /// Resolve a slug, alias, or route path (with or without trailing slash).
    ///
    /// # Errors
    ///
    /// `CalcError::UnknownCalculator` when nothing matches.
    pub fn lookup(slug_or_path: &str) -> CalcResult<Calculator> {
        let trimmed = slug_or_path.trim().trim_end_matches('/');
        let slug = trimmed
            .strip_prefix(ROUTE_PREFIX)
            .unwrap_or_else(|| trimmed.trim_start_matches('/'));
        Calculator::from_slug(slug).ok_or_else(|| CalcError::unknown_calculator(slug_or_path.trim()))
    }

    /// Get all calculators in a given category
    pub fn in_category(category: CalculatorCategory) -> Vec<Calculator> {
        ALL_CALCULATORS
            .iter()
            .filter(|calc| calc.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in sort order
    pub fn all_categories() -> Vec<CalculatorCategory> {
        use CalculatorCategory::*;
        let mut cats = vec![
            Trigonometry,
            Angles,
            Logarithms,
            PowersAndRoots,
            Integers,
            PowerUnits,
            EnergyUnits,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All calculators in the registry (for iteration)
pub static ALL_CALCULATORS: &[Calculator] = &[
    // Trigonometry
    Calculator::Sine,
    Calculator::Cosine,
    Calculator::Tangent,
    Calculator::Arcsin,
    Calculator::Arccos,
    Calculator::Arctan,
    // Angles
    Calculator::DegreesToRadians,
    Calculator::RadiansToDegrees,
    // Logarithms
    Calculator::Log,
    Calculator::NaturalLog,
    Calculator::LogBase,
    Calculator::Antilog,
    // Powers and roots
    Calculator::Exponent,
    Calculator::SquareRoot,
    // Integers
    Calculator::Gcf,
    Calculator::Lcm,
    // Power units
    Calculator::WattsToHorsepower,
    Calculator::HorsepowerToWatts,
    Calculator::KilowattsToBtuPerHour,
    // Energy units
    Calculator::JoulesToCalories,
    Calculator::CaloriesToJoules,
    Calculator::KilowattHoursToJoules,
];

/// Slugs and aliases → calculator
static SLUG_INDEX: Lazy<HashMap<&'static str, Calculator>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for &calc in ALL_CALCULATORS {
        let meta = calc.metadata();
        index.insert(meta.slug, calc);
        for alias in meta.aliases {
            index.insert(alias, calc);
        }
    }
    index
});

// ============================================================================
// Markdown Generation for CALCULATORS.md
// ============================================================================

/// Generate a complete CALCULATORS.md file for documentation.
///
/// Lists every calculator in the registry, organized by category, with
/// route, formula, inputs, and source location.
///
/// # Example
///
/// ```rust
/// use calc_core::formulas::registry::generate_calculators_markdown;
///
/// let markdown = generate_calculators_markdown();
/// assert!(markdown.contains("Tally Calculators Reference"));
/// assert!(markdown.contains("## Trigonometry"));
/// ```
pub fn generate_calculators_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Tally Calculators Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-calculators`

Every calculator page follows the same contract: parse the input text,
validate it against the formula's domain, compute, and format the result.
Invalid input shows a message in place of the result.

---

"#);

    let categories = Calculator::all_categories();

    for category in &categories {
        let calculators = Calculator::in_category(*category);
        if calculators.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for calc in calculators {
            let meta = calc.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Route:** `{}`\n\n", meta.path()));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            output.push_str("**Inputs:**\n\n");
            output.push_str("| Key | Label | Example |\n");
            output.push_str("|-----|-------|---------|\n");
            for field in &meta.inputs {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    field.key, field.label, field.placeholder
                ));
            }
            output.push('\n');

            if meta.variadic {
                output.push_str("Accepts any number of additional values.\n\n");
            }

            if !meta.aliases.is_empty() {
                output.push_str(&format!("**Also served at:** {}\n\n", meta.aliases.join(", ")));
            }

            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Calculators:** {}\n- **Categories:** {}\n",
        ALL_CALCULATORS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_calculators_have_metadata() {
        assert_eq!(ALL_CALCULATORS.len(), 22);

        for calc in ALL_CALCULATORS {
            let meta = calc.metadata();
            assert!(!meta.name.is_empty(), "Calculator {:?} has no name", calc);
            assert!(!meta.title.is_empty(), "Calculator {:?} has no title", calc);
            assert!(!meta.description.is_empty(), "Calculator {:?} has no description", calc);
            assert!(!meta.inputs.is_empty(), "Calculator {:?} has no inputs", calc);
            assert!(!meta.source_function.is_empty(), "Calculator {:?} missing source_function", calc);
        }
    }

    #[test]
    fn test_slugs_and_aliases_unique() {
        let mut seen = HashSet::new();
        for calc in ALL_CALCULATORS {
            let meta = calc.metadata();
            assert!(seen.insert(meta.slug), "Duplicate slug {}", meta.slug);
            for alias in meta.aliases {
                assert!(seen.insert(alias), "Duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn test_lookup_forms() {
        assert_eq!(Calculator::lookup("log-calculator").unwrap(), Calculator::Log);
        assert_eq!(Calculator::lookup("/calculators/log-calculator").unwrap(), Calculator::Log);
        assert_eq!(Calculator::lookup("/calculators/log-calculator/").unwrap(), Calculator::Log);
        assert_eq!(Calculator::lookup("GCD-Calculator").unwrap(), Calculator::Gcf);
        assert_eq!(Calculator::lookup("inverse-sine-calculator").unwrap(), Calculator::Arcsin);

        let err = Calculator::lookup("/calculators/nope").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CALCULATOR");
    }

    #[test]
    fn test_paths() {
        assert_eq!(Calculator::Antilog.path(), "/calculators/antilog-calculator");
        for calc in ALL_CALCULATORS {
            assert_eq!(Calculator::lookup(&calc.path()).unwrap(), *calc);
        }
    }

    #[test]
    fn test_variadic_fields() {
        let meta = Calculator::Gcf.metadata();
        assert_eq!(meta.min_inputs(), 2);
        assert_eq!(meta.max_inputs(), None);
        assert_eq!(meta.field(5).map(|f| f.key), Some("b"));

        let log = Calculator::Log.metadata();
        assert_eq!(log.max_inputs(), Some(1));
        assert!(log.field(1).is_none());
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Calculator::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted, "Categories should be sorted by sort_order");
    }

    #[test]
    fn test_every_calculator_in_a_category() {
        let total: usize = Calculator::all_categories()
            .into_iter()
            .map(|c| Calculator::in_category(c).len())
            .sum();
        assert_eq!(total, ALL_CALCULATORS.len());
    }

    #[test]
    fn test_generate_calculators_markdown() {
        let markdown = generate_calculators_markdown();

        assert!(markdown.contains("# Tally Calculators Reference"), "Missing title");
        assert!(markdown.contains("Auto-generated from source code"), "Missing auto-gen notice");
        assert!(markdown.contains("## Logarithms"), "Missing Logarithms");
        assert!(markdown.contains("### GCF Calculator"), "Missing GCF");
        assert!(markdown.contains("`/calculators/arcsin-calculator`"), "Missing arcsin route");
        assert!(markdown.contains("formulas/integer.rs"), "Missing source link");
        assert!(markdown.contains("**Total Calculators:** 22"), "Wrong calculator count");
        assert!(markdown.contains("**Categories:** 7"), "Wrong category count");
    }
}

//! # Calculator Formulas
//!
//! This module contains every closed-form formula behind the calculators.
//! Having formulas in one place enables:
//! - Easy verification against reference values
//! - Consistent implementation across calculator pages
//! - One registry that ties each formula to its page metadata
//!
//! ## Modules
//!
//! - [`trig`] - Sine, cosine, tangent, their inverses, angle conversion
//! - [`logarithm`] - Logarithms, antilogarithms, powers and roots
//! - [`integer`] - GCF and LCM over positive integers
//! - [`conversion`] - Power and energy unit conversions
//! - [`registry`] - Calculator identifiers, metadata and documentation
//!
//! ## Conventions
//!
//! - Formula functions never validate; the engine checks domains first
//! - Real formulas use `f64`, integer formulas use `u64`
//! - Angles are degrees unless the settings say radians

pub mod conversion;
pub mod integer;
pub mod logarithm;
pub mod registry;
pub mod trig;

// Re-export commonly used items
pub use integer::{gcd, gcd_all, lcm, lcm_all};
pub use trig::{degrees_to_radians, radians_to_degrees};

pub use registry::{
    Calculator,
    CalculatorCategory,
    CalculatorMetadata,
    InputField,
    InputKind,
    OutputKind,
    ALL_CALCULATORS,
    generate_calculators_markdown,
};

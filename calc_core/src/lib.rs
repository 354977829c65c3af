//! # calc_core - Calculator Engine for Tally
//!
//! `calc_core` holds every Tally calculator: trigonometry, logarithms,
//! powers and roots, GCF/LCM, and power/energy unit conversions. Each one
//! runs the same pipeline, so adding a calculator is a registry entry and a
//! formula, never a new page implementation.
//!
//! ```text
//! raw text ──▶ parse ──▶ validate ──▶ compute ──▶ format ──▶ display string
//!                 │          │            │
//!                 └──────────┴────────────┴──▶ CalcError ──▶ user message
//! ```
//!
//! ## Design Philosophy
//!
//! - **Stateless formulas**: Pure functions in [`formulas`], no I/O
//! - **JSON-First**: Results, errors and page data all serialize
//! - **Rich Errors**: Structured [`CalcError`] values, not strings
//! - **One registry**: Slugs, labels and routes live in [`Calculator::metadata`]
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{evaluate, Calculator, Settings};
//!
//! let output = evaluate(Calculator::Gcf, &["12", "18"], &Settings::default()).unwrap();
//! assert_eq!(output.display, "6");
//!
//! let err = evaluate(Calculator::Log, &["-5"], &Settings::default()).unwrap_err();
//! assert_eq!(err.user_message(), "Logarithm is only defined for numbers greater than zero.");
//! ```
//!
//! ## Modules
//!
//! - [`formulas`] - Math functions and the calculator registry
//! - [`engine`] - Parse, validate, compute and format
//! - [`state`] - Per-page field state with recompute on change
//! - [`pages`] - Route metadata, FAQs and the HTML fragment
//! - [`schema`] - FAQPage JSON-LD
//! - [`markdown`] - Markdown to HTML
//! - [`settings`] - TOML configuration
//! - [`format`] - Number display
//! - [`units`] - Type-safe power and energy units
//! - [`errors`] - Structured error types

pub mod engine;
pub mod errors;
pub mod format;
pub mod formulas;
pub mod markdown;
pub mod pages;
pub mod schema;
pub mod settings;
pub mod state;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use engine::{evaluate, CalculationOutput, ResultValue};
pub use errors::{CalcError, CalcResult};
pub use formulas::{Calculator, CalculatorCategory, ALL_CALCULATORS};
pub use pages::{render_fragment, Page};
pub use settings::{AngleUnit, Settings};
pub use state::{CalculatorState, Evaluation};

//! # Error Types
//!
//! Structured error types for calc_core. Input validation failures are the
//! common case: they are rendered in place of a result and never abort the
//! caller. Settings and file failures are the only errors a binary should
//! treat as fatal.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_log_argument(x: f64) -> CalcResult<f64> {
//!     if x <= 0.0 {
//!         return Err(CalcError::out_of_domain(
//!             "x",
//!             x.to_string(),
//!             "Logarithm is only defined for positive numbers",
//!         ));
//!     }
//!     Ok(x)
//! }
//!
//! assert!(validate_log_argument(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Input text does not parse as a finite real number
    #[error("Invalid input for '{field}': '{value}' is not a number")]
    NotANumber { field: String, value: String },

    /// Input is a number but outside the formula's valid domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    OutOfDomain {
        field: String,
        value: String,
        reason: String,
    },

    /// Integer formula received a fractional number
    #[error("Invalid input for '{field}': {value} is not a whole number")]
    NotAnInteger { field: String, value: String },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// More inputs than the calculator accepts
    #[error("Too many inputs for {calculator}: expected at most {expected}, got {actual}")]
    TooManyInputs {
        calculator: String,
        expected: usize,
        actual: usize,
    },

    /// No calculator registered under the given slug or path
    #[error("Unknown calculator: {slug}")]
    UnknownCalculator { slug: String },

    /// Inputs were valid but the result cannot be represented
    #[error("Calculation failed: {calculator} - {reason}")]
    CalculationFailed { calculator: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// TOML/JSON serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create a NotANumber error
    pub fn not_a_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::NotANumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an OutOfDomain error
    pub fn out_of_domain(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::OutOfDomain {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NotAnInteger error
    pub fn not_an_integer(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::NotAnInteger {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(slug: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { slug: slug.into() }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculator: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculator: calculator.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for failures caused by what the user typed.
    ///
    /// These are shown in place of the result. Everything else is a
    /// configuration or programming problem.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::NotANumber { .. }
                | CalcError::OutOfDomain { .. }
                | CalcError::NotAnInteger { .. }
                | CalcError::MissingField { .. }
                | CalcError::TooManyInputs { .. }
                | CalcError::CalculationFailed { .. }
        )
    }

    /// Message shown on the calculator page in place of the result
    pub fn user_message(&self) -> String {
        match self {
            CalcError::NotANumber { field, .. } => {
                format!("Please enter a valid number for {}.", field)
            }
            CalcError::OutOfDomain { reason, .. } => format!("{}.", reason.trim_end_matches('.')),
            CalcError::NotAnInteger { field, .. } => {
                format!("Please enter a whole number for {}.", field)
            }
            CalcError::MissingField { field } => format!("Please enter a value for {}.", field),
            CalcError::TooManyInputs { expected, .. } => {
                format!("This calculator accepts at most {} values.", expected)
            }
            CalcError::CalculationFailed { reason, .. } => format!("{}.", reason.trim_end_matches('.')),
            other => other.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::NotANumber { .. } => "NOT_A_NUMBER",
            CalcError::OutOfDomain { .. } => "OUT_OF_DOMAIN",
            CalcError::NotAnInteger { .. } => "NOT_AN_INTEGER",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::TooManyInputs { .. } => "TOO_MANY_INPUTS",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

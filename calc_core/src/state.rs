//! # Calculator State
//!
//! The render-scoped state of one calculator page: the raw text of each
//! field and the current evaluation. Every input change re-evaluates
//! synchronously, so the state is always consistent with its fields.
//!
//! ```text
//!            set_input()
//!   fields ──────────────▶ recompute ──▶ Pending | Ready(output) | Invalid(error)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::formulas::Calculator;
//! use calc_core::settings::Settings;
//! use calc_core::state::{CalculatorState, Evaluation};
//!
//! let mut state = CalculatorState::new(Calculator::Log, Settings::default());
//! assert!(matches!(state.evaluation(), Evaluation::Pending));
//!
//! state.set_input(0, "100");
//! assert_eq!(state.display_text(), "2.000000");
//!
//! state.set_input(0, "-5");
//! assert!(state.evaluation().is_invalid());
//! ```

use serde::Serialize;

use crate::engine::{evaluate, CalculationOutput};
use crate::errors::CalcError;
use crate::formulas::registry::{Calculator, CalculatorMetadata};
use crate::settings::Settings;

/// What the page shows in the result area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state")]
pub enum Evaluation {
    /// A required field is still empty; nothing to show yet
    Pending,
    /// Inputs valid; show the result
    Ready { output: CalculationOutput },
    /// Inputs rejected; show the message instead of a result
    Invalid { error: CalcError, message: String },
}

impl Evaluation {
    pub fn is_ready(&self) -> bool {
        matches!(self, Evaluation::Ready { .. })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Evaluation::Invalid { .. })
    }

    /// The result, if there is one
    pub fn output(&self) -> Option<&CalculationOutput> {
        match self {
            Evaluation::Ready { output } => Some(output),
            _ => None,
        }
    }
}

/// Field texts and current evaluation for one calculator.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    calculator: Calculator,
    meta: CalculatorMetadata,
    settings: Settings,
    fields: Vec<String>,
    evaluation: Evaluation,
}

impl CalculatorState {
    /// Create an empty state with one blank field per declared input
    pub fn new(calculator: Calculator, settings: Settings) -> Self {
        let meta = calculator.metadata();
        let fields = vec![String::new(); meta.min_inputs()];
        CalculatorState {
            calculator,
            meta,
            settings,
            fields,
            evaluation: Evaluation::Pending,
        }
    }

    /// Create a state pre-filled with field texts and evaluate it
    pub fn with_inputs<S: AsRef<str>>(calculator: Calculator, inputs: &[S], settings: Settings) -> Self {
        let mut state = CalculatorState::new(calculator, settings);
        for (index, text) in inputs.iter().enumerate() {
            state.write_field(index, text.as_ref());
        }
        state.recompute();
        state
    }

    pub fn calculator(&self) -> Calculator {
        self.calculator
    }

    pub fn metadata(&self) -> &CalculatorMetadata {
        &self.meta
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Replace the text of field `index` and re-evaluate.
    ///
    /// Writing past the last field grows the field list; for calculators
    /// with a fixed number of fields that shows up as a too-many-inputs
    /// message rather than a panic.
    pub fn set_input(&mut self, index: usize, text: &str) -> &Evaluation {
        self.write_field(index, text);
        self.recompute();
        &self.evaluation
    }

    /// Append a blank field (GCF/LCM of more numbers)
    pub fn add_field(&mut self) -> &Evaluation {
        self.fields.push(String::new());
        self.recompute();
        &self.evaluation
    }

    /// Remove field `index`, never going below the declared inputs
    pub fn remove_field(&mut self, index: usize) -> &Evaluation {
        if index < self.fields.len() && self.fields.len() > self.meta.min_inputs() {
            self.fields.remove(index);
            self.recompute();
        }
        &self.evaluation
    }

    /// Clear every field back to blank
    pub fn clear(&mut self) {
        self.fields = vec![String::new(); self.meta.min_inputs()];
        self.evaluation = Evaluation::Pending;
    }

    /// Swap settings (e.g. angle unit) and re-evaluate
    pub fn set_settings(&mut self, settings: Settings) -> &Evaluation {
        self.settings = settings;
        self.recompute();
        &self.evaluation
    }

    /// Text for the result area: the formatted result, the error message,
    /// or nothing while pending
    pub fn display_text(&self) -> String {
        match &self.evaluation {
            Evaluation::Pending => String::new(),
            Evaluation::Ready { output } => output.display_with_unit(),
            Evaluation::Invalid { message, .. } => message.clone(),
        }
    }

    fn write_field(&mut self, index: usize, text: &str) {
        if index >= self.fields.len() {
            self.fields.resize(index + 1, String::new());
        }
        self.fields[index] = text.to_string();
    }

    fn recompute(&mut self) {
        let min = self.meta.min_inputs();
        let required_blank = self.fields.iter().take(min).any(|f| f.trim().is_empty());
        if required_blank {
            self.evaluation = Evaluation::Pending;
            return;
        }

        // Blank optional fields of a variadic calculator are ignored
        let inputs: Vec<&str> = self
            .fields
            .iter()
            .enumerate()
            .filter(|(index, text)| !(self.meta.variadic && *index >= min && text.trim().is_empty()))
            .map(|(_, text)| text.as_str())
            .collect();

        self.evaluation = match evaluate(self.calculator, &inputs, &self.settings) {
            Ok(output) => Evaluation::Ready { output },
            Err(error) => {
                let message = error.user_message();
                Evaluation::Invalid { error, message }
            }
        };
    }
}

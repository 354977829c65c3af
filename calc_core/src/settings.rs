//! # Settings
//!
//! Display and site settings shared by every calculator page. Settings are
//! plain TOML; every field has a default so an empty file (or no file at
//! all) is valid.
//!
//! ## Example File
//!
//! ```toml
//! angle_unit = "radians"
//!
//! [display]
//! precision = 4
//! thousands_separator = true
//!
//! [site]
//! name = "Tally"
//! home_path = "/"
//! footer = "All calculations run locally."
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::{AngleUnit, Settings};
//!
//! let settings = Settings::from_toml_str("angle_unit = \"radians\"").unwrap();
//! assert_eq!(settings.angle_unit, AngleUnit::Radians);
//! assert_eq!(settings.display.precision, None);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{CalcError, CalcResult};

/// Largest decimal precision accepted; `f64` carries ~15-17 significant digits
pub const MAX_PRECISION: u8 = 15;

/// Root settings container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Unit for angle inputs (sin/cos/tan) and angle results (inverse functions)
    pub angle_unit: AngleUnit,

    /// Number formatting
    pub display: DisplaySettings,

    /// Page chrome
    pub site: SiteSettings,
}

impl Settings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml_str(text: &str) -> CalcResult<Settings> {
        let settings: Settings = toml::from_str(text).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// - `FileError` if the file cannot be read
    /// - `SerializationError` if it is not valid settings TOML
    /// - `OutOfDomain` if a value is out of range
    pub fn load(path: &Path) -> CalcResult<Settings> {
        let text = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        let settings = Settings::from_toml_str(&text)?;
        info!(path = %path.display(), angle_unit = ?settings.angle_unit, "loaded settings");
        Ok(settings)
    }

    /// Serialize to TOML (for `config` output and tests)
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }

    /// Check value ranges serde cannot express
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(precision) = self.display.precision {
            if precision > MAX_PRECISION {
                return Err(CalcError::out_of_domain(
                    "display.precision",
                    precision.to_string(),
                    format!("Precision must be at most {}", MAX_PRECISION),
                ));
            }
        }
        Ok(())
    }
}

/// Unit used for angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Short symbol shown after angle values
    pub fn symbol(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "°",
            AngleUnit::Radians => "rad",
        }
    }

    /// Word used in labels
    pub fn display_name(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "degrees",
            AngleUnit::Radians => "radians",
        }
    }
}

/// Number formatting settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Decimal places for every calculator; `None` uses each calculator's default
    pub precision: Option<u8>,

    /// Group the integer part in thousands ("1,234,567.5")
    pub thousands_separator: bool,
}

/// Page chrome shared by every calculator page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Site name shown in the back link and footer
    pub name: String,

    /// Where the back link points
    pub home_path: String,

    /// Footer line under every page
    pub footer: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            name: "Tally".to_string(),
            home_path: "/".to_string(),
            footer: "Results are computed with double-precision floating point.".to_string(),
        }
    }
}

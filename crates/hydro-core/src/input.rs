//! Boundary between free-text input fields and the numeric pipeline.

use std::fmt;

use thiserror::Error;

use crate::constants::{DEFAULT_STEPS, MAX_STEPS, STANDARD_GRAVITY};
use crate::PlateParams;

/// Identifies one of the input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Density,
    Gravity,
    Height,
    Area,
    Steps,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Density => "density",
            Field::Gravity => "gravity",
            Field::Height => "height",
            Field::Area => "area",
            Field::Steps => "steps",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field's text could not be used as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is empty")]
    Empty { field: Field },

    #[error("{field} value {text:?} is not a number")]
    NotANumber { field: Field, text: String },

    #[error("{field} value {text:?} is not finite")]
    NotFinite { field: Field, text: String },

    #[error("{field} must be non-zero")]
    Zero { field: Field },
}

/// Raw text of the five input fields, exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInputs {
    pub rho: String,
    pub g: String,
    pub height: String,
    pub area: String,
    pub steps: String,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self::from_params(&PlateParams {
            rho: 1000.0,
            height: 2.0,
            area: 1.0,
            ..PlateParams::default()
        })
    }
}

impl RawInputs {
    /// Pre-fill the fields from a numeric record.
    pub fn from_params(params: &PlateParams) -> Self {
        Self {
            rho: params.rho.to_string(),
            g: params.g.to_string(),
            height: params.height.to_string(),
            area: params.area.to_string(),
            steps: params.steps.to_string(),
        }
    }

    /// Parse every field, substituting its default when the text is
    /// unusable. Substitutions are logged, never returned.
    pub fn parse(&self) -> PlateParams {
        let defaults = PlateParams::default();
        PlateParams {
            rho: or_default(parse_number(Field::Density, &self.rho), defaults.rho),
            g: or_default(
                parse_number(Field::Gravity, &self.g).and_then(|g| non_zero(Field::Gravity, g)),
                STANDARD_GRAVITY,
            ),
            height: or_default(parse_number(Field::Height, &self.height), defaults.height),
            area: or_default(parse_number(Field::Area, &self.area), defaults.area),
            steps: or_default(parse_steps(&self.steps), DEFAULT_STEPS),
        }
    }

    /// Parameter string for the clipboard, built from the raw text.
    pub fn clipboard_string(&self) -> String {
        format!(
            "rho={}, g={}, h={}, A={}",
            self.rho, self.g, self.height, self.area
        )
    }
}

fn or_default<T: fmt::Display + Copy>(parsed: Result<T, InputError>, default: T) -> T {
    match parsed {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, %default, "input fallback");
            default
        }
    }
}

/// Parse a finite decimal number, ignoring surrounding whitespace.
pub fn parse_number(field: Field, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { field });
    }
    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        text: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            field,
            text: trimmed.to_string(),
        });
    }
    Ok(value)
}

fn non_zero(field: Field, value: f64) -> Result<f64, InputError> {
    if value == 0.0 {
        Err(InputError::Zero { field })
    } else {
        Ok(value)
    }
}

/// Parse the sample count: decimals truncate toward zero, the result is
/// clamped to `1..=MAX_STEPS`, and zero counts as missing.
pub fn parse_steps(text: &str) -> Result<u32, InputError> {
    let value = parse_number(Field::Steps, text)?.trunc();
    if value == 0.0 {
        return Err(InputError::Zero {
            field: Field::Steps,
        });
    }
    Ok(value.clamp(1.0, MAX_STEPS as f64) as u32)
}

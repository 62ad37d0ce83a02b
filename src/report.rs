//! Rendering of validation results.
//!
//! A [`ValidationReport`] wraps the validator's error list and renders it
//! for a terminal, as JSON, or as the single rejection message an admission
//! layer would return.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::validation::{FieldError, FieldErrorList};

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per error.
    #[default]
    Text,
    /// A JSON document.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Result of validating one set of shoot and seed networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    valid: bool,
    errors: FieldErrorList,
}

impl ValidationReport {
    /// Creates a report from the validator's output.
    #[must_use]
    pub fn new(errors: FieldErrorList) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns true if no errors were found.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the errors in the order the validator reported them.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Renders the report in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// Renders one line per error, or a success line.
    #[must_use]
    pub fn to_text(&self) -> String {
        if self.valid {
            return "networks are disjoint".to_string();
        }

        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Returns every error message in one line, or `None` if valid.
    ///
    /// A single error renders as-is; several are wrapped as `[a, b]`.
    #[must_use]
    pub fn rejection_message(&self) -> Option<String> {
        match self.errors.as_slice() {
            [] => None,
            [single] => Some(single.to_string()),
            errors => Some(format!(
                "[{}]",
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

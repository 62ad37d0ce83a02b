//! Command execution logic.
//!
//! This module runs the `check`, `intersect` and `parse` commands against
//! the library and produces the text printed by the entry point.

use thiserror::Error;

use netcheck::cidr::{CidrPair, ParseError, networks_intersect};
use netcheck::config::ValidatedConfig;
use netcheck::report::ValidationReport;
use netcheck::validation::validate_network_disjointedness;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to render the report.
    #[error("Failed to render report: {0}")]
    Render(#[source] serde_json::Error),

    /// The range given to `parse` is invalid.
    #[error("{0}")]
    InvalidRange(#[source] ParseError),
}

/// Output of the `check` command.
#[derive(Debug)]
pub struct CheckOutcome {
    /// The rendered report
    pub output: String,
    /// Whether the networks are disjoint
    pub valid: bool,
}

/// Validates the configured networks and renders the report.
///
/// # Errors
///
/// Returns an error if the report cannot be rendered.
pub fn execute_check(config: &ValidatedConfig) -> Result<CheckOutcome, RunError> {
    let malformed = warn_malformed(config);
    if malformed > 0 {
        tracing::debug!("{malformed} network(s) failed to parse and will be reported as intersecting");
    }

    let report = check(config);
    if report.is_valid() {
        tracing::debug!("All networks are disjoint");
    } else {
        tracing::info!("Found {} violation(s)", report.errors().len());
    }

    let output = report.render(config.format).map_err(RunError::Render)?;

    Ok(CheckOutcome {
        output,
        valid: report.is_valid(),
    })
}

/// Runs the disjointedness validator on the configured networks.
fn check(config: &ValidatedConfig) -> ValidationReport {
    ValidationReport::new(validate_network_disjointedness(
        &config.field_path,
        &config.shoot,
        &config.seed,
    ))
}

/// Logs a warning for every configured network that does not parse.
///
/// The validator treats such networks as intersecting everything; the
/// warning names the actual cause. Returns the number of warnings logged.
fn warn_malformed(config: &ValidatedConfig) -> usize {
    config
        .networks()
        .filter_map(|(name, value)| CidrPair::parse(value).err().map(|e| (name, e)))
        .inspect(|(name, e)| tracing::warn!("Network {name} is invalid: {e}"))
        .count()
}

/// Describes whether two network strings intersect.
pub fn execute_intersect(a: &str, b: &str) -> String {
    for raw in [a, b] {
        if let Err(e) = CidrPair::parse(raw) {
            tracing::warn!("{e}; treating networks as intersecting");
        }
    }

    if networks_intersect(a, b) {
        format!("{a} and {b} intersect")
    } else {
        format!("{a} and {b} are disjoint")
    }
}

/// Parses a network string and describes its canonical form.
///
/// # Errors
///
/// Returns an error if the string does not parse.
pub fn execute_parse(raw: &str) -> Result<String, RunError> {
    let pair = CidrPair::parse(raw).map_err(RunError::InvalidRange)?;
    Ok(format!("{pair} ({})", pair.stack()))
}

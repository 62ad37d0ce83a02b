//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use crate::report::OutputFormat;
use crate::validation::FieldPath;

/// Default dotted path prefix for field errors.
pub const FIELD_PATH: &str = "spec.networking";

/// Default report format.
pub const FORMAT: OutputFormat = OutputFormat::Text;

/// Default configuration file written by `init`.
pub const CONFIG_FILE: &str = "netcheck.toml";

/// Default field path as a [`FieldPath`].
#[must_use]
pub fn field_path() -> FieldPath {
    FieldPath::parse(FIELD_PATH)
}

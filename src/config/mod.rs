//! Configuration layer for netcheck.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Each network is resolved on its own: `--shoot-pods` overrides only
//! `shoot.pods`, the other networks still come from the file.
//!
//! # Required Values
//!
//! Only the seed pod and service networks are required. Missing shoot
//! pod or service networks are not configuration errors; the validator
//! reports them as field errors so they appear alongside other violations.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, FormatArg};
pub use error::{ConfigError, field};
pub use toml::{NetworksSection, OutputSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};

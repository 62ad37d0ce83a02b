//! Process-level glue for the binary: exit codes, log output and hints
//! printed after configuration errors.

use netcheck::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// Exit codes of the `netcheck` process.
pub mod exit_code {
    use std::process::ExitCode;

    /// 0: networks are disjoint, or a subcommand succeeded.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// 1: bad arguments, unreadable config, or a range `parse` rejects.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Raw code reported when at least one network overlaps.
    pub const VALIDATION_FAILED_CODE: u8 = 2;

    /// Maps the outcome of `check` to the process exit code.
    pub fn for_check(valid: bool) -> ExitCode {
        if valid {
            SUCCESS
        } else {
            ExitCode::from(VALIDATION_FAILED_CODE)
        }
    }
}

const INIT_HINT: &str = "Run 'netcheck init' to generate a configuration template.";

/// Returns a follow-up hint for errors a config template would fix.
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    matches!(
        error,
        ConfigError::MissingRequired { .. } | ConfigError::FileRead { .. }
    )
    .then_some(INIT_HINT)
}

/// Prints the hint for `error`, if any, below the error message.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Default log level when `RUST_LOG` is unset.
pub const fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
///
/// Logs go to stderr so that reports on stdout stay machine-readable.
pub fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

//! netcheck: shoot/seed network disjointedness checker
//!
//! Entry point for the netcheck application.

use netcheck::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match &cli.command {
        Some(Command::Init { output }) => return handle_init(output),
        Some(Command::Intersect { a, b }) => {
            setup_tracing(cli.verbose);
            println!("{}", run::execute_intersect(a, b));
            return exit_code::SUCCESS;
        }
        Some(Command::Parse { range }) => {
            setup_tracing(cli.verbose);
            return handle_parse(range);
        }
        Some(Command::Check) | None => {}
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    handle_check(&config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `parse` subcommand.
fn handle_parse(range: &str) -> ExitCode {
    match run::execute_parse(range) {
        Ok(description) => {
            println!("{description}");
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Validates the configured networks and prints the report.
fn handle_check(config: &ValidatedConfig) -> ExitCode {
    match run::execute_check(config) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            exit_code::for_check(outcome.valid)
        }
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

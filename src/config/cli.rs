//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::report::OutputFormat;

use super::defaults;

/// netcheck: shoot/seed network disjointedness checker
///
/// Verifies that the node, pod and service networks of a shoot cluster
/// do not overlap the networks of its seed cluster or the VPN range.
#[derive(Debug, Parser)]
#[command(name = "netcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: check)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Shoot node network (single CIDR or "v4,v6" dual-stack pair)
    #[arg(long = "shoot-nodes", value_name = "CIDRS", global = true)]
    pub shoot_nodes: Option<String>,

    /// Shoot pod network
    #[arg(long = "shoot-pods", value_name = "CIDRS", global = true)]
    pub shoot_pods: Option<String>,

    /// Shoot service network
    #[arg(long = "shoot-services", value_name = "CIDRS", global = true)]
    pub shoot_services: Option<String>,

    /// Seed node network
    #[arg(long = "seed-nodes", value_name = "CIDRS", global = true)]
    pub seed_nodes: Option<String>,

    /// Seed pod network (required)
    #[arg(long = "seed-pods", value_name = "CIDRS", global = true)]
    pub seed_pods: Option<String>,

    /// Seed service network (required)
    #[arg(long = "seed-services", value_name = "CIDRS", global = true)]
    pub seed_services: Option<String>,

    /// Dotted path prefix used in error messages
    #[arg(long = "field-path", value_name = "PATH", global = true)]
    pub field_path: Option<String>,

    /// Report output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for netcheck
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the configured shoot and seed networks
    Check,

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Report whether two network strings intersect
    Intersect {
        /// First network (single CIDR or dual-stack pair)
        a: String,
        /// Second network (single CIDR or dual-stack pair)
        b: String,
    },

    /// Parse a network string and print its canonical form
    Parse {
        /// Network to parse
        range: String,
    },
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable lines
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// Returns true if networks should be validated (explicit `check` or no subcommand).
    #[must_use]
    pub const fn is_check(&self) -> bool {
        matches!(self.command, None | Some(Command::Check))
    }
}

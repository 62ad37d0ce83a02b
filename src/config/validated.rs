//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::report::OutputFormat;
use crate::validation::{FieldPath, SeedNetworks, ShootNetworks};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// Network values are kept as given; their syntax is checked by the
/// validator itself so that a malformed range surfaces as a field error
/// rather than a configuration error.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Shoot networks (all optional)
    pub shoot: ShootNetworks,

    /// Seed networks (pods and services required)
    pub seed: SeedNetworks,

    /// Path prefix for reported field errors
    pub field_path: FieldPath,

    /// Report output format
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |value: Option<&str>| value.unwrap_or("none").to_string();

        write!(
            f,
            "Config {{ shoot: {{ nodes: {}, pods: {}, services: {} }}, \
             seed: {{ nodes: {}, pods: {}, services: {} }}, field_path: {}, format: {} }}",
            show(self.shoot.nodes.as_deref()),
            show(self.shoot.pods.as_deref()),
            show(self.shoot.services.as_deref()),
            show(self.seed.nodes.as_deref()),
            self.seed.pods,
            self.seed.services,
            self.field_path,
            self.format,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Seed pod or service networks are missing
    /// - The output format is unknown
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let shoot = Self::resolve_shoot(cli, toml);
        let seed = Self::resolve_seed(cli, toml)?;
        let field_path = Self::resolve_field_path(cli, toml);
        let format = Self::resolve_format(cli, toml)?;

        Ok(Self {
            shoot,
            seed,
            field_path,
            format,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns every configured network with its dotted name.
    pub fn networks(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("shoot.nodes", self.shoot.nodes.as_deref()),
            ("shoot.pods", self.shoot.pods.as_deref()),
            ("shoot.services", self.shoot.services.as_deref()),
            ("seed.nodes", self.seed.nodes.as_deref()),
            ("seed.pods", Some(self.seed.pods.as_str())),
            ("seed.services", Some(self.seed.services.as_str())),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    fn resolve_shoot(cli: &Cli, toml: Option<&TomlConfig>) -> ShootNetworks {
        let section = toml.map(|t| &t.shoot);

        ShootNetworks {
            nodes: pick(cli.shoot_nodes.as_ref(), section.and_then(|s| s.nodes.as_ref())),
            pods: pick(cli.shoot_pods.as_ref(), section.and_then(|s| s.pods.as_ref())),
            services: pick(
                cli.shoot_services.as_ref(),
                section.and_then(|s| s.services.as_ref()),
            ),
        }
    }

    fn resolve_seed(cli: &Cli, toml: Option<&TomlConfig>) -> Result<SeedNetworks, ConfigError> {
        let section = toml.map(|t| &t.seed);

        let pods = pick(cli.seed_pods.as_ref(), section.and_then(|s| s.pods.as_ref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::SEED_PODS,
                    "Use --seed-pods or set seed.pods in config file",
                )
            })?;

        let services = pick(
            cli.seed_services.as_ref(),
            section.and_then(|s| s.services.as_ref()),
        )
        .ok_or_else(|| {
            ConfigError::missing(
                field::SEED_SERVICES,
                "Use --seed-services or set seed.services in config file",
            )
        })?;

        Ok(SeedNetworks {
            nodes: pick(cli.seed_nodes.as_ref(), section.and_then(|s| s.nodes.as_ref())),
            pods,
            services,
        })
    }

    fn resolve_field_path(cli: &Cli, toml: Option<&TomlConfig>) -> FieldPath {
        // Priority: CLI explicit > TOML > default
        cli.field_path
            .as_deref()
            .or_else(|| toml.and_then(|t| t.output.field_path.as_deref()))
            .map_or_else(defaults::field_path, FieldPath::parse)
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        // CLI takes precedence
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        // Fall back to TOML
        if let Some(value) = toml.and_then(|t| t.output.format.as_deref()) {
            return value
                .parse()
                .map_err(|value| ConfigError::InvalidFormat { value });
        }

        Ok(defaults::FORMAT)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// CLI value if given, otherwise the TOML value. Empty strings are kept.
fn pick(cli: Option<&String>, toml: Option<&String>) -> Option<String> {
    cli.or(toml).cloned()
}

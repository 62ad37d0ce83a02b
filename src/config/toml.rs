//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Shoot (tenant cluster) networks
    #[serde(default)]
    pub shoot: NetworksSection,

    /// Seed (hosting cluster) networks
    #[serde(default)]
    pub seed: NetworksSection,

    /// Report output settings
    #[serde(default)]
    pub output: OutputSection,
}

/// Node, pod and service networks of one cluster.
///
/// Each value is a single CIDR or a `"v4,v6"` dual-stack pair.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworksSection {
    /// Node network
    pub nodes: Option<String>,

    /// Pod network
    pub pods: Option<String>,

    /// Service network
    pub services: Option<String>,
}

/// Report output section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Dotted path prefix used in error messages
    pub field_path: Option<String>,

    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# netcheck Configuration File
#
# Every network is either a single CIDR ("10.0.0.0/16") or a dual-stack
# pair of one IPv4 and one IPv6 CIDR ("10.0.0.0/16,fd00::/64").
# The range 192.168.123.0/24 is reserved for the VPN and must not be used
# by any shoot network.

[shoot]
# Node network (optional)
# nodes = "10.250.0.0/16"

# Pod network (reported as missing if unset)
# pods = "100.96.0.0/11"

# Service network (reported as missing if unset)
# services = "100.64.0.0/13"

[seed]
# Node network (optional)
# nodes = "10.242.0.0/16"

# Pod network (required)
# pods = "10.243.0.0/16"

# Service network (required)
# services = "10.244.0.0/16"

[output]
# Dotted path prefix for error messages (default: "spec.networking")
# field_path = "spec.networking"

# Report format: "text" or "json" (default: "text")
format = "text"
"#
    .to_string()
}

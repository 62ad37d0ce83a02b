//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [seed]
            pods = "10.243.0.0/16"
            services = "10.244.0.0/16"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.seed.pods.as_deref(), Some("10.243.0.0/16"));
        assert_eq!(config.seed.services.as_deref(), Some("10.244.0.0/16"));
        assert!(config.seed.nodes.is_none());
        assert!(config.shoot.pods.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [shoot]
            nodes = "10.250.0.0/16"
            pods = "100.96.0.0/11, fd00:20::/64"
            services = "100.64.0.0/13"

            [seed]
            nodes = "10.242.0.0/16"
            pods = "10.243.0.0/16"
            services = "10.244.0.0/16"

            [output]
            field_path = "spec.networking"
            format = "json"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.shoot.nodes.as_deref(), Some("10.250.0.0/16"));
        assert_eq!(
            config.shoot.pods.as_deref(),
            Some("100.96.0.0/11, fd00:20::/64")
        );
        assert_eq!(config.shoot.services.as_deref(), Some("100.64.0.0/13"));
        assert_eq!(config.seed.nodes.as_deref(), Some("10.242.0.0/16"));
        assert_eq!(
            config.output.field_path.as_deref(),
            Some("spec.networking")
        );
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.shoot.nodes.is_none());
        assert!(config.seed.pods.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            [shoot]
            pods = "100.96.0.0/11"
            vpn = "192.168.123.0/24"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn reject_unknown_sections() {
        let toml = r#"
            [unknown_section]
            key = "value"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn reject_non_string_network() {
        let toml = r"
            [seed]
            pods = 10
        ";

        assert!(TomlConfig::parse(toml).is_err());
    }
}

mod default_template {
    use super::*;

    #[test]
    fn template_is_valid_toml() {
        let template = default_config_template();
        let result = TomlConfig::parse(&template);

        assert!(result.is_ok(), "Template should be valid TOML: {result:?}");
    }

    #[test]
    fn template_leaves_networks_unset() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.shoot.pods.is_none());
        assert!(config.seed.pods.is_none());
        assert!(config.seed.services.is_none());
        assert_eq!(config.output.format.as_deref(), Some("text"));
    }

    #[test]
    fn template_mentions_vpn_range() {
        assert!(default_config_template().contains("192.168.123.0/24"));
    }
}

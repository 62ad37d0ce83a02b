//! Tests for the run module.

use super::*;
use netcheck::config::Cli;
use netcheck::report::OutputFormat;

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full_args = vec![
        "netcheck",
        "--seed-nodes",
        "10.242.0.0/16",
        "--seed-pods",
        "10.243.0.0/16",
        "--seed-services",
        "10.244.0.0/16",
    ];
    full_args.extend(args);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full_args), None).unwrap()
}

const VALID_SHOOT: [&str; 6] = [
    "--shoot-nodes",
    "10.250.0.0/16",
    "--shoot-pods",
    "100.96.0.0/11",
    "--shoot-services",
    "100.64.0.0/13",
];

mod check {
    use super::*;

    #[test]
    fn disjoint_networks_are_valid() {
        let outcome = execute_check(&config(&VALID_SHOOT)).unwrap();

        assert!(outcome.valid);
        assert_eq!(outcome.output, "networks are disjoint");
    }

    #[test]
    fn missing_shoot_networks_are_reported() {
        let outcome = execute_check(&config(&[])).unwrap();

        assert!(!outcome.valid);
        assert_eq!(
            outcome.output,
            "spec.networking.services: Required value: services is required\n\
             spec.networking.pods: Required value: pods is required"
        );
    }

    #[test]
    fn json_output() {
        let config = config(&[
            "--shoot-pods",
            "10.243.0.0/20",
            "--shoot-services",
            "100.64.0.0/13",
            "--format",
            "json",
        ]);
        assert_eq!(config.format, OutputFormat::Json);

        let outcome = execute_check(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();

        assert!(!outcome.valid);
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"][0]["field"], "spec.networking.pods");
        assert_eq!(value["errors"][0]["bad_value"], "10.243.0.0/20");
    }

    #[test]
    fn check_uses_configured_field_path() {
        let config = config(&["--field-path", "spec.provider"]);
        let report = check(&config);

        assert_eq!(report.errors()[0].field.to_string(), "spec.provider.services");
    }
}

mod malformed {
    use super::*;

    #[test]
    fn counts_unparseable_networks() {
        let config = config(&["--shoot-pods", "bogus", "--shoot-services", ""]);
        assert_eq!(warn_malformed(&config), 2);
    }

    #[test]
    fn valid_networks_produce_no_warnings() {
        assert_eq!(warn_malformed(&config(&VALID_SHOOT)), 0);
    }
}

mod intersect {
    use super::*;

    #[test]
    fn reports_intersection() {
        assert_eq!(
            execute_intersect("10.0.0.0/24", "10.0.0.128/25"),
            "10.0.0.0/24 and 10.0.0.128/25 intersect"
        );
    }

    #[test]
    fn reports_disjoint() {
        assert_eq!(
            execute_intersect("10.0.0.0/24", "fd00::/8"),
            "10.0.0.0/24 and fd00::/8 are disjoint"
        );
    }

    #[test]
    fn unparseable_input_intersects() {
        assert_eq!(
            execute_intersect("garbage", "10.0.0.0/24"),
            "garbage and 10.0.0.0/24 intersect"
        );
    }
}

mod parse {
    use super::*;

    #[test]
    fn describes_single_stack() {
        assert_eq!(
            execute_parse("10.0.0.5/24").unwrap(),
            "10.0.0.0/24 (IPv4)"
        );
    }

    #[test]
    fn describes_dual_stack_in_canonical_order() {
        assert_eq!(
            execute_parse("fd00::/8, 10.0.0.0/24").unwrap(),
            "10.0.0.0/24,fd00::/8 (dual-stack)"
        );
    }

    #[test]
    fn invalid_range_is_an_error() {
        let err = execute_parse("10.0.0.0/24,10.1.0.0/24").unwrap_err();

        assert!(matches!(
            err,
            RunError::InvalidRange(ParseError::DuplicateFamily { .. })
        ));
        assert!(err.to_string().contains("10.0.0.0/24,10.1.0.0/24"));
    }
}

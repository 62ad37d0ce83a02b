//! Tests for the intersection predicate.

use super::{CidrPair, networks_intersect};

/// Inputs covering every stack mode plus unparseable strings.
const FIXTURES: &[&str] = &[
    "10.0.0.0/8",
    "10.0.0.0/24",
    "10.0.0.128/25",
    "10.1.0.0/24",
    "192.168.123.0/24",
    "0.0.0.0/0",
    "fd00::/8",
    "fd00:10::/64",
    "2001:db8::/32",
    "::/0",
    "10.0.0.0/24,fd00::/8",
    "fd00:10::/64, 10.1.0.0/24",
    "172.16.0.0/12,2001:db8::/32",
    "garbage",
    "",
    "10.0.0.0/24,10.1.0.0/24",
];

mod single_stack {
    use super::*;

    #[test]
    fn containment_intersects() {
        assert!(networks_intersect("10.0.0.0/24", "10.0.0.128/25"));
    }

    #[test]
    fn identical_ranges_intersect() {
        assert!(networks_intersect("fd00::/8", "fd00::/8"));
    }

    #[test]
    fn disjoint_same_family() {
        assert!(!networks_intersect("10.0.0.0/24", "10.1.0.0/24"));
        assert!(!networks_intersect("fd00::/8", "2001:db8::/32"));
    }

    #[test]
    fn different_families_never_intersect() {
        assert!(!networks_intersect("10.0.0.0/24", "fd00::/8"));
        assert!(!networks_intersect("0.0.0.0/0", "::/0"));
    }

    #[test]
    fn host_bits_are_ignored() {
        assert!(networks_intersect("10.0.0.77/24", "10.0.0.200/32"));
    }
}

mod dual_stack {
    use super::*;

    #[test]
    fn intersects_on_v4_only() {
        assert!(networks_intersect(
            "10.0.0.0/24,fd00::/8",
            "10.0.0.0/16,2001:db8::/32"
        ));
    }

    #[test]
    fn intersects_on_v6_only() {
        assert!(networks_intersect(
            "10.0.0.0/24,fd00::/8",
            "10.1.0.0/24,fd00:10::/64"
        ));
    }

    #[test]
    fn disjoint_on_both_families() {
        assert!(!networks_intersect(
            "10.0.0.0/24,fd00::/8",
            "10.1.0.0/24,2001:db8::/32"
        ));
    }

    #[test]
    fn order_within_pair_is_irrelevant() {
        assert!(networks_intersect(
            "fd00::/8,10.0.0.0/24",
            "10.0.0.0/25,2001:db8::/32"
        ));
    }

    #[test]
    fn single_v4_against_dual_uses_v4_member() {
        assert!(networks_intersect("10.0.0.0/25", "10.0.0.0/24,fd00::/8"));
        assert!(!networks_intersect("10.1.0.0/24", "10.0.0.0/24,fd00::/8"));
    }

    #[test]
    fn single_v6_against_dual_uses_v6_member() {
        assert!(networks_intersect("fd00:10::/64", "10.0.0.0/24,fd00::/8"));
        assert!(!networks_intersect("2001:db8::/32", "10.0.0.0/24,fd00::/8"));
    }

    #[test]
    fn dual_against_single_uses_matching_member() {
        assert!(networks_intersect("10.0.0.0/24,fd00::/8", "fd00::/16"));
        assert!(!networks_intersect("10.0.0.0/24,fd00::/8", "192.168.0.0/16"));
    }
}

mod fail_safe {
    use super::*;

    #[test]
    fn unparseable_left_intersects() {
        assert!(networks_intersect("garbage", "10.0.0.0/24"));
    }

    #[test]
    fn unparseable_right_intersects() {
        assert!(networks_intersect("10.0.0.0/24", "garbage"));
    }

    #[test]
    fn empty_string_intersects() {
        assert!(networks_intersect("", "fd00::/8"));
    }

    #[test]
    fn duplicate_family_intersects() {
        assert!(networks_intersect("10.0.0.0/24,10.1.0.0/24", "192.168.0.0/16"));
    }

    #[test]
    fn leading_zero_octet_intersects() {
        assert!(networks_intersect("010.0.0.0/8", "192.168.0.0/16"));
    }

    #[test]
    fn unparseable_against_other_family_still_intersects() {
        assert!(networks_intersect("10.0.0.0/33", "fd00::/8"));
    }
}

mod properties {
    use super::*;

    #[test]
    fn predicate_is_symmetric() {
        for a in FIXTURES {
            for b in FIXTURES {
                assert_eq!(
                    networks_intersect(a, b),
                    networks_intersect(b, a),
                    "asymmetric result for '{a}' and '{b}'"
                );
            }
        }
    }

    #[test]
    fn every_parseable_range_intersects_itself() {
        for raw in FIXTURES {
            if CidrPair::parse(raw).is_ok() {
                assert!(networks_intersect(raw, raw), "'{raw}' must intersect itself");
            }
        }
    }

    #[test]
    fn pair_method_agrees_with_string_predicate() {
        for a in FIXTURES {
            for b in FIXTURES {
                if let (Ok(pa), Ok(pb)) = (CidrPair::parse(a), CidrPair::parse(b)) {
                    assert_eq!(pa.intersects(&pb), networks_intersect(a, b));
                }
            }
        }
    }
}

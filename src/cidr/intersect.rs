//! Pairwise intersection of (possibly dual-stack) network strings.

use super::{AddressFamily, CidrPair};

impl CidrPair {
    /// Returns true if any range of `self` overlaps the range of the same
    /// family in `other`.
    ///
    /// Only families present on both sides are compared, so a single IPv4
    /// range never intersects a single IPv6 range.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        AddressFamily::ALL
            .iter()
            .any(|&family| match (self.get(family), other.get(family)) {
                (Some(a), Some(b)) => a.overlaps(b),
                _ => false,
            })
    }
}

/// Returns true if the networks described by `a` and `b` intersect.
///
/// Both strings may be single-stack or dual-stack. If either string fails
/// to parse, the networks are reported as intersecting so that a malformed
/// range is never accepted as disjoint.
///
/// # Examples
///
/// ```
/// use netcheck::cidr::networks_intersect;
///
/// assert!(networks_intersect("10.0.0.0/24", "10.0.0.128/25"));
/// assert!(!networks_intersect("10.0.0.0/24", "10.1.0.0/24"));
/// assert!(!networks_intersect("10.0.0.0/24", "fd00::/8"));
/// assert!(networks_intersect("garbage", "10.0.0.0/24"));
/// ```
#[must_use]
pub fn networks_intersect(a: &str, b: &str) -> bool {
    match (CidrPair::parse(a), CidrPair::parse(b)) {
        (Ok(a), Ok(b)) => a.intersects(&b),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!("Treating networks '{a}' and '{b}' as intersecting: {e}");
            true
        }
    }
}

//! Single CIDR blocks and their address families.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use ipnet::IpNet;

use super::ParseError;
use super::error::CidrSyntaxError;

/// Address family of a single network range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// IPv4 (dotted-decimal literals).
    V4,
    /// IPv6 (colon-hex literals).
    V6,
}

impl AddressFamily {
    /// Both families, IPv4 first.
    pub const ALL: [Self; 2] = [Self::V4, Self::V6];
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// Stack mode of a parsed range string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpStack {
    /// A single IPv4 range.
    V4,
    /// A single IPv6 range.
    V6,
    /// One IPv4 and one IPv6 range.
    Dual,
}

impl fmt::Display for IpStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
            Self::Dual => write!(f, "dual-stack"),
        }
    }
}

/// A single parsed CIDR block.
///
/// The stored address is always the network address: host bits given in the
/// literal are cleared at parse time, so `10.0.0.1/24` and `10.0.0.0/24`
/// yield equal ranges.
///
/// # Examples
///
/// ```
/// use netcheck::cidr::{AddressFamily, NetworkRange};
///
/// let range: NetworkRange = "10.0.0.1/24".parse().unwrap();
/// assert_eq!(range.to_string(), "10.0.0.0/24");
/// assert_eq!(range.family(), AddressFamily::V4);
/// assert!(range.contains(&"10.0.0.200".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkRange {
    net: IpNet,
}

impl NetworkRange {
    /// Creates a range from an `ipnet` network, clearing host bits.
    #[must_use]
    pub fn new(net: IpNet) -> Self {
        Self { net: net.trunc() }
    }

    /// Returns the base (network) address.
    #[must_use]
    pub fn network(&self) -> IpAddr {
        self.net.network()
    }

    /// Returns the prefix length.
    #[must_use]
    pub fn prefix_len(&self) -> u8 {
        self.net.prefix_len()
    }

    /// Returns the address family.
    #[must_use]
    pub const fn family(&self) -> AddressFamily {
        match self.net {
            IpNet::V4(_) => AddressFamily::V4,
            IpNet::V6(_) => AddressFamily::V6,
        }
    }

    /// Returns true if `addr` lies within this range.
    ///
    /// Addresses of the other family are never contained.
    #[must_use]
    pub fn contains(&self, addr: &IpAddr) -> bool {
        self.net.contains(addr)
    }

    /// Returns true if this range and `other` share at least one address.
    ///
    /// Two prefix-aligned blocks either nest or are disjoint, so checking
    /// each block's network address against the other block is sufficient.
    /// Ranges of different families never overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.contains(&other.network()) || other.contains(&self.network())
    }
}

impl FromStr for NetworkRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |source: CidrSyntaxError| ParseError::MalformedCidr {
            value: s.to_string(),
            source,
        };

        let net = s
            .parse::<IpNet>()
            .map_err(|e| malformed(CidrSyntaxError::from(e)))?;
        if let Some(octet) = leading_zero_octet(s) {
            return Err(malformed(CidrSyntaxError::LeadingZero(octet.to_string())));
        }

        Ok(Self::new(net))
    }
}

/// Finds a dotted-decimal octet written with a leading zero, such as the
/// `010` in `010.0.0.0/8`. Covers IPv4 tails embedded in IPv6 literals.
/// The prefix length is not checked; `/08` is accepted.
fn leading_zero_octet(s: &str) -> Option<&str> {
    let addr = s.split_once('/').map_or(s, |(addr, _)| addr);
    let tail = addr.rsplit_once(':').map_or(addr, |(_, tail)| tail);

    tail.split('.')
        .find(|octet| octet.len() > 1 && octet.starts_with('0'))
}

impl fmt::Display for NetworkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.net)
    }
}

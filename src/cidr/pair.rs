//! Parsing of single-stack and dual-stack range strings.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::{AddressFamily, IpStack, NetworkRange, ParseError};

/// Separator between the two ranges of a dual-stack string: a comma,
/// optionally followed by whitespace.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*").expect("separator pattern is valid"));

/// One or two parsed network ranges taken from a single string.
///
/// A pair holds either a single range (single-stack) or exactly one IPv4
/// and one IPv6 range (dual-stack). Input order is preserved in
/// [`CidrPair::ranges`]; the [`Display`](fmt::Display) rendering is
/// normalized to IPv4 first.
///
/// # Examples
///
/// ```
/// use netcheck::cidr::{CidrPair, IpStack};
///
/// let pair = CidrPair::parse("fd00::/8, 10.0.0.0/24").unwrap();
/// assert!(pair.is_dual_stack());
/// assert_eq!(pair.stack(), IpStack::Dual);
/// assert_eq!(pair.cidr4().unwrap().to_string(), "10.0.0.0/24");
/// assert_eq!(pair.to_string(), "10.0.0.0/24,fd00::/8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrPair {
    first: NetworkRange,
    second: Option<NetworkRange>,
}

impl CidrPair {
    /// Parses a string holding one range or two comma-separated ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The string does not hold exactly one or two tokens ([`ParseError::InvalidArity`])
    /// - A token is not a valid CIDR ([`ParseError::MalformedCidr`])
    /// - Two tokens share an address family ([`ParseError::DuplicateFamily`])
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = SEPARATOR.split(raw).collect();

        match tokens.as_slice() {
            [single] => Ok(Self {
                first: single.parse()?,
                second: None,
            }),
            [first, second] => {
                let first: NetworkRange = first.parse()?;
                let second: NetworkRange = second.parse()?;

                if first.family() == second.family() {
                    return Err(ParseError::DuplicateFamily {
                        value: raw.to_string(),
                        family: first.family(),
                    });
                }

                Ok(Self {
                    first,
                    second: Some(second),
                })
            }
            _ => Err(ParseError::InvalidArity {
                count: tokens.len(),
            }),
        }
    }

    /// Parses a range string that is known to be valid.
    ///
    /// Reserved for built-in constants such as the default VPN range. Never
    /// call this with user-supplied input; use [`CidrPair::parse`] instead.
    ///
    /// # Panics
    ///
    /// Panics if `raw` does not parse.
    #[must_use]
    #[track_caller]
    pub fn parse_trusted(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|e| panic!("built-in network range is invalid: {e}"))
    }

    /// Returns true if the pair holds one IPv4 and one IPv6 range.
    #[must_use]
    pub const fn is_dual_stack(&self) -> bool {
        self.second.is_some()
    }

    /// Returns true if the pair is a single IPv4 range.
    #[must_use]
    pub fn is4(&self) -> bool {
        matches!(self.stack(), IpStack::V4)
    }

    /// Returns true if the pair is a single IPv6 range.
    #[must_use]
    pub fn is6(&self) -> bool {
        matches!(self.stack(), IpStack::V6)
    }

    /// Returns the stack mode of this pair.
    #[must_use]
    pub fn stack(&self) -> IpStack {
        match (self.second, self.first.family()) {
            (Some(_), _) => IpStack::Dual,
            (None, AddressFamily::V4) => IpStack::V4,
            (None, AddressFamily::V6) => IpStack::V6,
        }
    }

    /// Returns the range of the given family, if present.
    #[must_use]
    pub fn get(&self, family: AddressFamily) -> Option<&NetworkRange> {
        self.ranges().find(|r| r.family() == family)
    }

    /// Returns the IPv4 range.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::FamilyNotPresent`] for a single IPv6 range.
    pub fn cidr4(&self) -> Result<&NetworkRange, ParseError> {
        self.require(AddressFamily::V4)
    }

    /// Returns the IPv6 range.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::FamilyNotPresent`] for a single IPv4 range.
    pub fn cidr6(&self) -> Result<&NetworkRange, ParseError> {
        self.require(AddressFamily::V6)
    }

    /// Returns the ranges in input order.
    pub fn ranges(&self) -> impl Iterator<Item = &NetworkRange> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }

    fn require(&self, family: AddressFamily) -> Result<&NetworkRange, ParseError> {
        self.get(family).ok_or_else(|| ParseError::FamilyNotPresent {
            value: self.to_string(),
            family,
        })
    }
}

impl FromStr for CidrPair {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CidrPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.get(AddressFamily::V4), self.get(AddressFamily::V6)) {
            (Some(v4), Some(v6)) => write!(f, "{v4},{v6}"),
            _ => write!(f, "{}", self.first),
        }
    }
}

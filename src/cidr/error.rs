//! Error types for range parsing and family lookup.

use thiserror::Error;

use super::AddressFamily;

/// Error type for parsing a range string into a [`CidrPair`](super::CidrPair).
#[derive(Debug, Error)]
pub enum ParseError {
    /// A token is not a valid `address/prefix` literal.
    #[error("invalid CIDR '{value}': {source}")]
    MalformedCidr {
        /// The offending token
        value: String,
        /// Underlying parse error
        #[source]
        source: CidrSyntaxError,
    },

    /// The input did not contain exactly one or two ranges.
    #[error("expected one or two comma-separated CIDRs, got {count}")]
    InvalidArity {
        /// Number of comma-separated tokens found
        count: usize,
    },

    /// Both ranges of a two-token input belong to the same family.
    #[error("dual-stack network '{value}' must contain one IPv4 and one IPv6 CIDR, found two {family} CIDRs")]
    DuplicateFamily {
        /// The full input string
        value: String,
        /// The family that appeared twice
        family: AddressFamily,
    },

    /// The requested family is not part of the pair.
    #[error("network '{value}' has no {family} CIDR")]
    FamilyNotPresent {
        /// Canonical rendering of the pair
        value: String,
        /// The requested family
        family: AddressFamily,
    },
}

/// Why a single token failed to parse as a CIDR.
#[derive(Debug, Error)]
pub enum CidrSyntaxError {
    /// Rejected by the `ipnet` parser.
    #[error(transparent)]
    Syntax(#[from] ipnet::AddrParseError),

    /// A dotted-decimal octet carries a leading zero, which reads as octal
    /// in some parsers.
    #[error("IPv4 octet '{0}' has a leading zero")]
    LeadingZero(String),
}

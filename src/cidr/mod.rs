//! CIDR parsing and overlap detection.
//!
//! This module provides:
//! - Single network ranges ([`NetworkRange`]) and their family ([`AddressFamily`])
//! - Single-stack and dual-stack range strings ([`CidrPair`], [`IpStack`])
//! - The fail-safe intersection predicate ([`networks_intersect`])
//!
//! # Input Format
//!
//! A range string holds one CIDR, or two CIDRs separated by a comma and
//! optional whitespace (`"10.0.0.0/24"`, `"10.0.0.0/24, fd00::/8"`). Two
//! CIDRs must be one IPv4 and one IPv6 range, in either order.

mod error;
mod intersect;
mod pair;
mod range;

#[cfg(test)]
mod intersect_tests;

pub use error::{CidrSyntaxError, ParseError};
pub use intersect::networks_intersect;
pub use pair::CidrPair;
pub use range::{AddressFamily, IpStack, NetworkRange};

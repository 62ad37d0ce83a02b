//! netcheck: shoot/seed network disjointedness checker
//!
//! A library for parsing single-stack and dual-stack CIDR strings and
//! validating that the networks of a shoot cluster do not overlap the
//! networks of its seed cluster or the reserved VPN range.

pub mod cidr;
pub mod config;
pub mod report;
pub mod validation;

//! Network disjointedness validation.
//!
//! This module provides:
//! - Field paths and structured field errors ([`FieldPath`], [`FieldError`])
//! - Shoot and seed network inputs ([`ShootNetworks`], [`SeedNetworks`])
//! - The validator itself ([`validate_network_disjointedness`])
//!
//! Failures are values, not errors: the validator returns every violation
//! it finds and an empty list means the networks are valid.

mod disjoint;
mod field;


pub use disjoint::{
    DEFAULT_VPN_RANGE, SeedNetworks, ShootNetworks, default_vpn_network,
    validate_network_disjointedness,
};
pub use field::{FieldError, FieldErrorKind, FieldErrorList, FieldPath};

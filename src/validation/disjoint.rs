//! Disjointedness of shoot networks against seed networks and the VPN range.

use std::sync::LazyLock;

use crate::cidr::{CidrPair, networks_intersect};

use super::{FieldError, FieldErrorList, FieldPath};

/// Network reserved for the shoot-to-seed VPN tunnel.
pub const DEFAULT_VPN_RANGE: &str = "192.168.123.0/24";

static DEFAULT_VPN_NETWORK: LazyLock<CidrPair> =
    LazyLock::new(|| CidrPair::parse_trusted(DEFAULT_VPN_RANGE));

/// Returns the parsed [`DEFAULT_VPN_RANGE`].
#[must_use]
pub fn default_vpn_network() -> &'static CidrPair {
    &DEFAULT_VPN_NETWORK
}

/// Network ranges of the shoot (tenant) cluster. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShootNetworks {
    /// Node network
    pub nodes: Option<String>,
    /// Pod network
    pub pods: Option<String>,
    /// Service network
    pub services: Option<String>,
}

/// Network ranges of the seed (hosting) cluster.
///
/// Pods and services are mandatory; their presence is checked by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedNetworks {
    /// Node network
    pub nodes: Option<String>,
    /// Pod network
    pub pods: String,
    /// Service network
    pub services: String,
}

/// Validates that the shoot networks are disjoint from the seed networks
/// and from [`DEFAULT_VPN_RANGE`].
///
/// Every check runs; the returned list holds all violations in a fixed
/// order (nodes, services, pods). Errors are reported on the `nodes`,
/// `services` and `pods` children of `fld_path`. A missing shoot service or
/// pod network yields a single `Required` error for that field; missing node
/// networks are not an error.
///
/// # Examples
///
/// ```
/// use netcheck::validation::{
///     FieldPath, SeedNetworks, ShootNetworks, validate_network_disjointedness,
/// };
///
/// let shoot = ShootNetworks {
///     nodes: Some("10.250.0.0/16".into()),
///     pods: Some("100.96.0.0/11".into()),
///     services: Some("100.64.0.0/13".into()),
/// };
/// let seed = SeedNetworks {
///     nodes: Some("10.242.0.0/16".into()),
///     pods: "10.243.0.0/16".into(),
///     services: "10.244.0.0/16".into(),
/// };
///
/// let errors = validate_network_disjointedness(&FieldPath::new("networking"), &shoot, &seed);
/// assert!(errors.is_empty());
/// ```
#[must_use]
pub fn validate_network_disjointedness(
    fld_path: &FieldPath,
    shoot: &ShootNetworks,
    seed: &SeedNetworks,
) -> FieldErrorList {
    let mut all_errs = FieldErrorList::new();

    validate_nodes(&fld_path.child("nodes"), shoot, seed, &mut all_errs);
    validate_services(&fld_path.child("services"), shoot, seed, &mut all_errs);
    validate_pods(&fld_path.child("pods"), shoot, seed, &mut all_errs);

    all_errs
}

fn validate_nodes(
    path: &FieldPath,
    shoot: &ShootNetworks,
    seed: &SeedNetworks,
    all_errs: &mut FieldErrorList,
) {
    let Some(shoot_nodes) = shoot.nodes.as_deref() else {
        return;
    };

    if seed
        .nodes
        .as_deref()
        .is_some_and(|seed_nodes| networks_intersect(shoot_nodes, seed_nodes))
    {
        all_errs.push(FieldError::intersects(
            path.clone(),
            shoot_nodes,
            "shoot node network intersects with seed node network",
        ));
    }
    if intersects_vpn(shoot_nodes) {
        all_errs.push(FieldError::intersects(
            path.clone(),
            shoot_nodes,
            vpn_detail("node"),
        ));
    }
}

fn validate_services(
    path: &FieldPath,
    shoot: &ShootNetworks,
    seed: &SeedNetworks,
    all_errs: &mut FieldErrorList,
) {
    let Some(shoot_services) = shoot.services.as_deref() else {
        all_errs.push(FieldError::required(path.clone(), "services is required"));
        return;
    };

    if networks_intersect(&seed.services, shoot_services) {
        all_errs.push(FieldError::intersects(
            path.clone(),
            shoot_services,
            "shoot service network intersects with seed service network",
        ));
    }
    if networks_intersect(&seed.pods, shoot_services) {
        all_errs.push(FieldError::intersects(
            path.clone(),
            shoot_services,
            "shoot service network intersects with seed pod network",
        ));
    }
    if intersects_vpn(shoot_services) {
        all_errs.push(FieldError::intersects(
            path.clone(),
            shoot_services,
            vpn_detail("service"),
        ));
    }
}

fn validate_pods(
    path: &FieldPath,
    shoot: &ShootNetworks,
    seed: &SeedNetworks,
    all_errs: &mut FieldErrorList,
) {
    let Some(shoot_pods) = shoot.pods.as_deref() else {
        all_errs.push(FieldError::required(path.clone(), "pods is required"));
        return;
    };

    if networks_intersect(&seed.pods, shoot_pods) {
        all_errs.push(FieldError::intersects(
            path.clone(),
            shoot_pods,
            "shoot pod network intersects with seed pod network",
        ));
    }
    if networks_intersect(&seed.services, shoot_pods) {
        all_errs.push(FieldError::intersects(
            path.clone(),
            shoot_pods,
            "shoot pod network intersects with seed service network",
        ));
    }
    if intersects_vpn(shoot_pods) {
        all_errs.push(FieldError::intersects(
            path.clone(),
            shoot_pods,
            vpn_detail("pod"),
        ));
    }
}

/// Same fail-safe semantics as [`networks_intersect`], against the cached
/// VPN network.
fn intersects_vpn(raw: &str) -> bool {
    match CidrPair::parse(raw) {
        Ok(pair) => pair.intersects(default_vpn_network()),
        Err(e) => {
            tracing::debug!("Treating network '{raw}' as intersecting the VPN range: {e}");
            true
        }
    }
}

fn vpn_detail(role: &str) -> String {
    format!("shoot {role} network intersects with default vpn network ({DEFAULT_VPN_RANGE})")
}

//! IP family classification of a subnet registry.

use super::SubnetRegistry;
use crate::error::{ConfigError, Result};
use crate::models::SubnetRole;
use itertools::Itertools;

impl SubnetRegistry {
    /// Decide whether the registry holds a valid single-stack IPv4, valid
    /// single-stack IPv6 or valid dual-stack configuration.
    ///
    /// Returns `(using_ipv4, using_ipv6)`. Dual-stack requires every
    /// non-join role that appears to appear in both families.
    pub fn check_ip_families(&self) -> Result<(bool, bool)> {
        if self.v6.is_empty() {
            log::info!("Single-stack IPv4 network configuration");
            return Ok((true, false));
        }
        if self.v4.is_empty() {
            log::info!("Single-stack IPv6 network configuration");
            return Ok((false, true));
        }
        if SubnetRole::FAMILY_ROLES
            .iter()
            .all(|role| self.v4.contains(role) == self.v6.contains(role))
        {
            log::info!("Dual-stack network configuration");
            return Ok((true, true));
        }

        let mut described = vec![SubnetRole::Cluster, SubnetRole::Service];
        if self.has_role(SubnetRole::Hybrid) {
            described.push(SubnetRole::Hybrid);
        }
        let net_config = described
            .into_iter()
            .map(|role| self.describe_role(role))
            .join(", ");
        log::warn!("Mixed IP families in network configuration: {net_config}");
        Err(ConfigError::AsymmetricDualStack(net_config))
    }
}

//! Accumulator for every configured subnet, tagged by role.

use crate::models::{IpFamily, SubnetRole};
use ipnet::IpNet;
use std::collections::HashSet;

/// A single recorded subnet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ConfigSubnet {
    pub role: SubnetRole,
    pub subnet: IpNet,
}

/// The set of configured subnets plus which roles have contributed an IPv4
/// and an IPv6 range.
///
/// Build one per validation run with [`SubnetRegistry::append`], then run
/// [`SubnetRegistry::check_for_overlaps`] and
/// [`SubnetRegistry::check_ip_families`] on it.
#[derive(Debug, Default)]
pub struct SubnetRegistry {
    pub(super) subnets: Vec<ConfigSubnet>,
    pub(super) v4: HashSet<SubnetRole>,
    pub(super) v6: HashSet<SubnetRole>,
}

impl SubnetRegistry {
    pub fn new() -> SubnetRegistry {
        SubnetRegistry::default()
    }

    /// Record a subnet. Join subnets are not counted for family accounting.
    pub fn append(&mut self, role: SubnetRole, subnet: IpNet) {
        self.subnets.push(ConfigSubnet { role, subnet });
        if role != SubnetRole::Join {
            match IpFamily::of(&subnet) {
                IpFamily::V4 => self.v4.insert(role),
                IpFamily::V6 => self.v6.insert(role),
            };
        }
    }

    /// Record several subnets under the same role, in order.
    pub fn extend<I>(&mut self, role: SubnetRole, subnets: I)
    where
        I: IntoIterator<Item = IpNet>,
    {
        for subnet in subnets {
            self.append(role, subnet);
        }
    }

    /// Recorded subnets, in append order.
    pub fn subnets(&self) -> &[ConfigSubnet] {
        &self.subnets
    }

    pub fn has_role(&self, role: SubnetRole) -> bool {
        self.v4.contains(&role) || self.v6.contains(&role)
    }

    /// Describe the address families a role was configured with, e.g.
    /// `"dual-stack cluster subnet"`.
    pub fn describe_role(&self, role: SubnetRole) -> String {
        let family = match (self.v4.contains(&role), self.v6.contains(&role)) {
            (true, false) => "IPv4",
            (false, true) => "IPv6",
            (true, true) => "dual-stack",
            (false, false) => "unknown",
        };
        format!("{family} {role}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> IpNet {
        s.parse().unwrap()
    }

    #[test]
    fn test_append_keeps_order() {
        let mut registry = SubnetRegistry::new();
        registry.append(SubnetRole::Join, net("100.64.0.0/16"));
        registry.append(SubnetRole::Cluster, net("10.128.0.0/14"));
        let roles: Vec<SubnetRole> = registry.subnets().iter().map(|s| s.role).collect();
        assert_eq!(roles, vec![SubnetRole::Join, SubnetRole::Cluster]);
    }

    #[test]
    fn test_join_excluded_from_families() {
        let mut registry = SubnetRegistry::new();
        registry.append(SubnetRole::Join, net("100.64.0.0/16"));
        registry.append(SubnetRole::Join, net("fd98::/64"));
        assert!(registry.v4.is_empty());
        assert!(registry.v6.is_empty());
        assert!(!registry.has_role(SubnetRole::Join));
        assert_eq!(registry.subnets().len(), 2);
    }

    #[test]
    fn test_describe_role() {
        let mut registry = SubnetRegistry::new();
        registry.extend(
            SubnetRole::Cluster,
            [net("10.128.0.0/14"), net("fd01::/48")],
        );
        registry.append(SubnetRole::Service, net("fd02::/112"));
        registry.append(SubnetRole::Hybrid, net("10.132.0.0/14"));

        assert_eq!(
            registry.describe_role(SubnetRole::Cluster),
            "dual-stack cluster subnet"
        );
        assert_eq!(
            registry.describe_role(SubnetRole::Service),
            "IPv6 service subnet"
        );
        assert_eq!(
            registry.describe_role(SubnetRole::Hybrid),
            "IPv4 hybrid overlay subnet"
        );
        assert_eq!(
            registry.describe_role(SubnetRole::Join),
            "unknown built-in join subnet"
        );
    }
}

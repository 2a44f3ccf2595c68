//! Subnet roles and address families.

use ipnet::IpNet;
use std::fmt;

/// Purpose of a configured subnet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SubnetRole {
    /// Built-in subnet used for inter-node routing.
    Join,
    /// Pod network a node subnet is carved from.
    Cluster,
    /// Service (cluster IP) range.
    Service,
    /// Range reserved for hybrid-overlay nodes.
    Hybrid,
}

impl SubnetRole {
    /// Roles that count towards IP family accounting. Join is excluded.
    pub const FAMILY_ROLES: [SubnetRole; 3] =
        [SubnetRole::Cluster, SubnetRole::Service, SubnetRole::Hybrid];

    /// Human readable name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SubnetRole::Join => "built-in join subnet",
            SubnetRole::Cluster => "cluster subnet",
            SubnetRole::Service => "service subnet",
            SubnetRole::Hybrid => "hybrid overlay subnet",
        }
    }
}

impl fmt::Display for SubnetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// IP address family of a network range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn of(net: &IpNet) -> IpFamily {
        match net {
            IpNet::V4(_) => IpFamily::V4,
            IpNet::V6(_) => IpFamily::V6,
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFamily::V4 => f.write_str("IPv4"),
            IpFamily::V6 => f.write_str("IPv6"),
        }
    }
}

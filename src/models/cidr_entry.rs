//! Cluster subnet entry model.

use super::IpFamily;
use ipnet::IpNet;
use serde::Serialize;
use std::fmt;

/// Host subnet length used for IPv4 cluster subnets when none is given.
pub const DEFAULT_IPV4_HOST_SUBNET_LENGTH: u8 = 24;

/// The only host subnet length accepted for IPv6 cluster subnets.
pub const IPV6_HOST_SUBNET_LENGTH: u8 = 64;

/// A single cluster network CIDR and the prefix length each node is
/// allocated out of it.
///
/// `host_subnet_length` is always strictly greater than the prefix length
/// of `cidr`.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CidrNetworkEntry {
    /// The cluster network, normalized to its network address.
    pub cidr: IpNet,
    /// Prefix length of the per-node subnet.
    pub host_subnet_length: u8,
}

impl CidrNetworkEntry {
    pub fn family(&self) -> IpFamily {
        IpFamily::of(&self.cidr)
    }
}

impl fmt::Display for CidrNetworkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.cidr, self.host_subnet_length)
    }
}

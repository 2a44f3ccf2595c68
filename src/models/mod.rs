//! Domain models for network configuration.
//!
//! This module contains the typed values produced by parsing:
//! - [`CidrNetworkEntry`] - cluster subnet with its host subnet length
//! - [`HostPort`] - flow collector endpoint
//! - [`SubnetRole`] and [`IpFamily`] - tags used by the subnet registry

mod cidr_entry;
mod host_port;
mod subnet_role;

// Re-export public types
pub use cidr_entry::{CidrNetworkEntry, DEFAULT_IPV4_HOST_SUBNET_LENGTH, IPV6_HOST_SUBNET_LENGTH};
pub use host_port::HostPort;
pub use subnet_role::{IpFamily, SubnetRole};

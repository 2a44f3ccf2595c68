//! Error types for network configuration parsing and validation.

use crate::models::SubnetRole;
use ipnet::IpNet;
use std::path::PathBuf;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Every way a network configuration can be rejected.
///
/// None of these are recoverable: the caller is expected to abort startup
/// and show the message to the operator.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CIDR {0:?} not properly formatted")]
    MalformedEntry(String),

    #[error("invalid CIDR {entry:?}: {source}")]
    InvalidCidr {
        entry: String,
        #[source]
        source: ipnet::AddrParseError,
    },

    #[error("invalid host subnet length {value:?} in {entry:?}")]
    InvalidHostSubnetLength { entry: String, value: String },

    #[error("IPv6 only supports /64 host subnets, got /{length} in {entry:?}")]
    UnsupportedIpv6HostSubnetLength { entry: String, length: u32 },

    #[error(
        "cannot use a host subnet length mask shorter than or equal to the cluster subnet mask in {entry:?}. \
         host subnet length: {host_subnet_length}, cluster subnet length: {cluster_subnet_length}"
    )]
    HostSubnetTooWide {
        entry: String,
        host_subnet_length: u8,
        cluster_subnet_length: u8,
    },

    #[error("failed to parse any CIDRs from {0:?}")]
    NoEntriesParsed(String),

    #[error("cannot parse hostport {endpoint:?}: {reason}")]
    MalformedHostPort {
        endpoint: String,
        reason: &'static str,
    },

    #[error("collector IP {0} is not a valid IP")]
    InvalidCollectorHost(String),

    #[error("collector port {port} is not a valid port: {reason}")]
    InvalidCollectorPort { port: String, reason: String },

    #[error("invalid service subnet {entry:?}: {source}")]
    InvalidServiceCidr {
        entry: String,
        #[source]
        source: ipnet::AddrParseError,
    },

    #[error("service subnets {0:?} must contain at most one IPv4 and one IPv6 subnet")]
    TooManyServiceCidrs(String),

    #[error("invalid {family} join subnet {entry:?}")]
    InvalidJoinSubnet { entry: String, family: &'static str },

    #[error(
        "illegal network configuration: {role} \"{subnet}\" overlaps {other_role} \"{other_subnet}\""
    )]
    SubnetOverlap {
        role: SubnetRole,
        subnet: IpNet,
        other_role: SubnetRole,
        other_subnet: IpNet,
    },

    #[error("illegal network configuration: {0}")]
    AsymmetricDualStack(String),

    #[error("error reading config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

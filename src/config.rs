//! Raw network configuration and the validation pipeline.
//!
//! Values are loaded as plain strings, either from a JSON file or from
//! environment variables, and [`RawNetworkConfig::validate`] turns them into
//! a [`ValidatedNetworkConfig`] or the first error found.

use crate::error::{ConfigError, Result};
use crate::models::{CidrNetworkEntry, HostPort, IpFamily, SubnetRole};
use crate::parse::{
    parse_cluster_subnet_entries, parse_flow_collectors, parse_join_subnet,
    parse_service_subnets,
};
use crate::processing::SubnetRegistry;
use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CLUSTER_SUBNETS: &str = "10.128.0.0/14/23";
pub const DEFAULT_SERVICE_SUBNETS: &str = "172.16.1.0/24";
pub const DEFAULT_JOIN_SUBNET_V4: &str = "100.64.0.0/16";
pub const DEFAULT_JOIN_SUBNET_V6: &str = "fd98::/64";

/// Network configuration as supplied by the operator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RawNetworkConfig {
    /// `CIDR[/hostSubnetLength]` list.
    pub cluster_subnets: String,
    /// At most one IPv4 and one IPv6 CIDR.
    pub service_subnets: String,
    pub join_subnet_v4: String,
    pub join_subnet_v6: String,
    /// Same grammar as `cluster_subnets`.
    pub hybrid_overlay_subnets: Option<String>,
    /// `[host]:port` list.
    pub flow_collectors: Option<String>,
}

impl Default for RawNetworkConfig {
    fn default() -> Self {
        RawNetworkConfig {
            cluster_subnets: DEFAULT_CLUSTER_SUBNETS.to_string(),
            service_subnets: DEFAULT_SERVICE_SUBNETS.to_string(),
            join_subnet_v4: DEFAULT_JOIN_SUBNET_V4.to_string(),
            join_subnet_v6: DEFAULT_JOIN_SUBNET_V6.to_string(),
            hybrid_overlay_subnets: None,
            flow_collectors: None,
        }
    }
}

/// Network configuration after every check has passed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidatedNetworkConfig {
    pub cluster_subnets: Vec<CidrNetworkEntry>,
    pub service_subnets: Vec<IpNet>,
    pub join_subnets: Vec<IpNet>,
    pub hybrid_overlay_subnets: Vec<CidrNetworkEntry>,
    pub flow_collectors: Vec<HostPort>,
    pub ipv4_mode: bool,
    pub ipv6_mode: bool,
}

impl RawNetworkConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RawNetworkConfig> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Reading network config from {}", path.display());
        serde_json::from_str(&json).map_err(|source| ConfigError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a config from the process environment.
    ///
    /// Reads `CLUSTER_SUBNETS`, `SERVICE_SUBNETS`, `JOIN_SUBNET_V4`,
    /// `JOIN_SUBNET_V6`, `HYBRID_OVERLAY_SUBNETS` and `FLOW_COLLECTORS`.
    /// Unset or empty variables keep their defaults.
    pub fn from_env() -> RawNetworkConfig {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> RawNetworkConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = RawNetworkConfig::default();
        RawNetworkConfig {
            cluster_subnets: get("CLUSTER_SUBNETS").unwrap_or(defaults.cluster_subnets),
            service_subnets: get("SERVICE_SUBNETS").unwrap_or(defaults.service_subnets),
            join_subnet_v4: get("JOIN_SUBNET_V4").unwrap_or(defaults.join_subnet_v4),
            join_subnet_v6: get("JOIN_SUBNET_V6").unwrap_or(defaults.join_subnet_v6),
            hybrid_overlay_subnets: get("HYBRID_OVERLAY_SUBNETS"),
            flow_collectors: get("FLOW_COLLECTORS"),
        }
    }

    /// Parse every value and check the resulting subnets for overlaps and
    /// IP family consistency.
    pub fn validate(&self) -> Result<ValidatedNetworkConfig> {
        let cluster_subnets = parse_cluster_subnet_entries(&self.cluster_subnets)?;
        let service_subnets = parse_service_subnets(&self.service_subnets)?;
        let join_subnets = vec![
            parse_join_subnet(&self.join_subnet_v4, IpFamily::V4)?,
            parse_join_subnet(&self.join_subnet_v6, IpFamily::V6)?,
        ];
        let hybrid_overlay_subnets = match non_empty(&self.hybrid_overlay_subnets) {
            Some(value) => parse_cluster_subnet_entries(value)?,
            None => Vec::new(),
        };
        let flow_collectors = match non_empty(&self.flow_collectors) {
            Some(value) => parse_flow_collectors(value)?,
            None => Vec::new(),
        };

        let mut registry = SubnetRegistry::new();
        registry.extend(SubnetRole::Join, join_subnets.iter().copied());
        registry.extend(SubnetRole::Cluster, cluster_subnets.iter().map(|e| e.cidr));
        registry.extend(SubnetRole::Service, service_subnets.iter().copied());
        registry.extend(SubnetRole::Hybrid, hybrid_overlay_subnets.iter().map(|e| e.cidr));

        registry.check_for_overlaps()?;
        let (ipv4_mode, ipv6_mode) = registry.check_ip_families()?;

        Ok(ValidatedNetworkConfig {
            cluster_subnets,
            service_subnets,
            join_subnets,
            hybrid_overlay_subnets,
            flow_collectors,
            ipv4_mode,
            ipv6_mode,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

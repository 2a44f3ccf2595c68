//! Cluster subnet list parsing.
//!
//! Grammar: `entry(,entry)*` where `entry = CIDR ["/" hostSubnetLength]`,
//! e.g. `10.128.0.0/14/23,fd01::/48`.

use super::parse_network;
use crate::error::{ConfigError, Result};
use crate::models::{
    CidrNetworkEntry, IpFamily, DEFAULT_IPV4_HOST_SUBNET_LENGTH, IPV6_HOST_SUBNET_LENGTH,
};

/// Parse the cluster subnet list given on the command line.
///
/// Entries are returned in input order. A single bad entry rejects the
/// whole list. Surrounding whitespace on each entry is trimmed.
///
/// # Examples
/// ```
/// use cluster_subnet_config::parse::parse_cluster_subnet_entries;
/// let entries = parse_cluster_subnet_entries("10.128.0.0/14/23,fd01::/48").unwrap();
/// assert_eq!(entries[0].host_subnet_length, 23);
/// assert_eq!(entries[1].host_subnet_length, 64);
/// ```
pub fn parse_cluster_subnet_entries(cluster_subnet_cmd: &str) -> Result<Vec<CidrNetworkEntry>> {
    if cluster_subnet_cmd.trim().is_empty() {
        return Err(ConfigError::NoEntriesParsed(cluster_subnet_cmd.to_string()));
    }

    cluster_subnet_cmd
        .split(',')
        .map(parse_cluster_subnet_entry)
        .collect()
}

fn parse_cluster_subnet_entry(entry: &str) -> Result<CidrNetworkEntry> {
    let entry = entry.trim();
    let parts: Vec<&str> = entry.split('/').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(ConfigError::MalformedEntry(entry.to_string()));
    }

    let cidr = parse_network(&format!("{}/{}", parts[0], parts[1])).map_err(|source| {
        ConfigError::InvalidCidr {
            entry: entry.to_string(),
            source,
        }
    })?;
    let family = IpFamily::of(&cidr);

    let host_subnet_length = match parts.get(2) {
        Some(value) => {
            let invalid = || ConfigError::InvalidHostSubnetLength {
                entry: entry.to_string(),
                value: value.to_string(),
            };
            let length: u32 = value.parse().map_err(|_| invalid())?;
            if family == IpFamily::V6 && length != u32::from(IPV6_HOST_SUBNET_LENGTH) {
                return Err(ConfigError::UnsupportedIpv6HostSubnetLength {
                    entry: entry.to_string(),
                    length,
                });
            }
            match u8::try_from(length) {
                Ok(length) if length <= cidr.max_prefix_len() => length,
                _ => return Err(invalid()),
            }
        }
        None => match family {
            IpFamily::V6 => IPV6_HOST_SUBNET_LENGTH,
            // Historical default
            IpFamily::V4 => DEFAULT_IPV4_HOST_SUBNET_LENGTH,
        },
    };

    if host_subnet_length <= cidr.prefix_len() {
        return Err(ConfigError::HostSubnetTooWide {
            entry: entry.to_string(),
            host_subnet_length,
            cluster_subnet_length: cidr.prefix_len(),
        });
    }

    log::debug!("Parsed cluster subnet {cidr} with host subnet length {host_subnet_length}");
    Ok(CidrNetworkEntry {
        cidr,
        host_subnet_length,
    })
}

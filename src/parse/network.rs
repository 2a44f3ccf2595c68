//! Bare CIDR parsing for service and join subnets.

use super::parse_network;
use crate::error::{ConfigError, Result};
use crate::models::IpFamily;
use ipnet::IpNet;
use itertools::Itertools;

/// Parse a comma-separated service subnet list.
///
/// At most one subnet per address family is allowed, so a dual-stack
/// cluster gives one IPv4 and one IPv6 range.
pub fn parse_service_subnets(service_subnets: &str) -> Result<Vec<IpNet>> {
    let subnets = service_subnets
        .split(',')
        .map(|entry| {
            parse_network(entry).map_err(|source| ConfigError::InvalidServiceCidr {
                entry: entry.trim().to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if !subnets.iter().map(IpFamily::of).all_unique() {
        return Err(ConfigError::TooManyServiceCidrs(service_subnets.to_string()));
    }
    log::debug!("Parsed service subnets {}", subnets.iter().join(","));
    Ok(subnets)
}

/// Parse a join subnet, which must belong to `family`.
pub fn parse_join_subnet(join_subnet: &str, family: IpFamily) -> Result<IpNet> {
    let invalid = || ConfigError::InvalidJoinSubnet {
        entry: join_subnet.to_string(),
        family: match family {
            IpFamily::V4 => "IPv4",
            IpFamily::V6 => "IPv6",
        },
    };
    let subnet = parse_network(join_subnet).map_err(|_| invalid())?;
    if IpFamily::of(&subnet) != family {
        return Err(invalid());
    }
    Ok(subnet)
}

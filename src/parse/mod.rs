//! Parsers for the raw comma-separated configuration values.
//!
//! - [`cluster_subnet`] - `CIDR[/hostSubnetLength]` lists
//! - [`flow_collector`] - `[host]:port` lists
//! - [`network`] - bare CIDRs for service and join subnets

mod cluster_subnet;
mod flow_collector;
mod network;

pub use cluster_subnet::parse_cluster_subnet_entries;
pub use flow_collector::parse_flow_collectors;
pub use network::{parse_join_subnet, parse_service_subnets};

use ipnet::{AddrParseError, IpNet};

/// Parse an `addr/prefix` string and normalize it to its network address,
/// so `10.0.0.5/24` becomes `10.0.0.0/24`.
fn parse_network(cidr: &str) -> Result<IpNet, AddrParseError> {
    cidr.trim().parse::<IpNet>().map(|net| net.trunc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network_truncates_host_bits() {
        assert_eq!(
            parse_network("10.0.0.5/24").unwrap().to_string(),
            "10.0.0.0/24"
        );
        assert_eq!(
            parse_network(" fd98::1/64 ").unwrap().to_string(),
            "fd98::/64"
        );
        assert!(parse_network("10.0.0.0").is_err());
        assert!(parse_network("10.0.0.0/33").is_err());
    }
}

//! Flow collector list parsing.
//!
//! Grammar: `endpoint(,endpoint)*` where `endpoint = [host] ":" port` and
//! IPv6 hosts are bracketed, e.g. `10.0.0.2:3030,:8888,[fd00::1]:3333`.

use crate::error::{ConfigError, Result};
use crate::models::HostPort;
use std::net::IpAddr;

/// Parse the flow collector list given on the command line.
///
/// An empty host (`:8888`) yields `host: None`.
pub fn parse_flow_collectors(flow_collectors: &str) -> Result<Vec<HostPort>> {
    flow_collectors
        .split(',')
        .map(parse_flow_collector)
        .collect()
}

fn parse_flow_collector(endpoint: &str) -> Result<HostPort> {
    let endpoint = endpoint.trim();
    let (host, port) =
        split_host_port(endpoint).map_err(|reason| ConfigError::MalformedHostPort {
            endpoint: endpoint.to_string(),
            reason,
        })?;

    let host = if host.is_empty() {
        None
    } else {
        let ip: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::InvalidCollectorHost(host.to_string()))?;
        Some(ip)
    };
    let port = parse_port(port)?;

    log::debug!("Parsed flow collector {endpoint}");
    Ok(HostPort { host, port })
}

/// Split `host:port` or `[host]:port` into its parts.
fn split_host_port(endpoint: &str) -> std::result::Result<(&str, &str), &'static str> {
    let colon = endpoint.rfind(':').ok_or("missing port in address")?;

    let host = match endpoint.strip_prefix('[') {
        Some(bracketed) => {
            let end = bracketed.find(']').ok_or("missing ']' in address")? + 1;
            if end + 1 == endpoint.len() {
                return Err("missing port in address");
            }
            if end + 1 != colon {
                return Err(if endpoint.as_bytes()[end + 1] == b':' {
                    "too many colons in address"
                } else {
                    "missing port in address"
                });
            }
            &endpoint[1..end]
        }
        None => {
            let host = &endpoint[..colon];
            if host.contains(':') {
                return Err("too many colons in address");
            }
            host
        }
    };

    if host.contains('[') || host.contains(']') {
        return Err("unexpected bracket in address");
    }
    Ok((host, &endpoint[colon + 1..]))
}

fn parse_port(port: &str) -> Result<u16> {
    let value: i32 = port
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidCollectorPort {
            port: port.to_string(),
            reason: e.to_string(),
        })?;
    u16::try_from(value).map_err(|_| ConfigError::InvalidCollectorPort {
        port: port.to_string(),
        reason: "out of range 0-65535".to_string(),
    })
}

//! Terminal summary of a validated network configuration.

use crate::config::ValidatedNetworkConfig;
use crate::models::{IpFamily, SubnetRole};
use colored::Colorize;
use ipnet::IpNet;

/// One line of the subnet summary.
#[derive(Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub role: SubnetRole,
    pub family: IpFamily,
    pub cidr: IpNet,
    /// Only set for cluster and hybrid overlay subnets.
    pub host_subnet_length: Option<u8>,
}

/// Format a value as a quoted, right-aligned field.
///
/// # Examples
/// ```
/// use cluster_subnet_config::output::format_field;
/// assert_eq!(format_field("v4", 6), "  \"v4\"");
/// ```
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Flatten a validated config into rows, join subnets first, in the order
/// they were checked.
pub fn summary_rows(config: &ValidatedNetworkConfig) -> Vec<SummaryRow> {
    let bare = |role: SubnetRole, cidr: &IpNet| SummaryRow {
        role,
        family: IpFamily::of(cidr),
        cidr: *cidr,
        host_subnet_length: None,
    };
    let mut rows: Vec<SummaryRow> = config
        .join_subnets
        .iter()
        .map(|cidr| bare(SubnetRole::Join, cidr))
        .collect();
    rows.extend(config.cluster_subnets.iter().map(|entry| SummaryRow {
        role: SubnetRole::Cluster,
        family: entry.family(),
        cidr: entry.cidr,
        host_subnet_length: Some(entry.host_subnet_length),
    }));
    rows.extend(
        config
            .service_subnets
            .iter()
            .map(|cidr| bare(SubnetRole::Service, cidr)),
    );
    rows.extend(config.hybrid_overlay_subnets.iter().map(|entry| SummaryRow {
        role: SubnetRole::Hybrid,
        family: entry.family(),
        cidr: entry.cidr,
        host_subnet_length: Some(entry.host_subnet_length),
    }));
    rows
}

/// Render the config as aligned text lines for the terminal.
pub fn render_summary(config: &ValidatedNetworkConfig) -> String {
    let mode = match (config.ipv4_mode, config.ipv6_mode) {
        (true, true) => "dual-stack",
        (false, true) => "single-stack IPv6",
        _ => "single-stack IPv4",
    };
    let mut out = format!("# Network mode: {}\n", mode.green());
    out.push_str(&format!(
        "{}, {}, {}, {}\n",
        format_field("role", 24),
        format_field("family", 8),
        format_field("cidr", 22),
        format_field("host_subnet", 13)
    ));
    for row in summary_rows(config) {
        let host_subnet = row
            .host_subnet_length
            .map(|len| format!("/{len}"))
            .unwrap_or_default();
        out.push_str(&format!(
            "{}, {}, {}, {}\n",
            format_field(row.role, 24),
            format_field(row.family, 8),
            format_field(row.cidr, 22),
            format_field(host_subnet, 13)
        ));
    }
    for collector in &config.flow_collectors {
        out.push_str(&format!("# Flow collector: {collector}\n"));
    }
    out
}

//! Validation of the IP addressing configuration a cluster network
//! controller is started with.
//!
//! Raw strings go in: cluster subnets, service subnets, join subnets, an
//! optional hybrid overlay range and flow collector endpoints. Typed,
//! checked values come out, or the first [`ConfigError`] found.
//!
//! ```
//! use cluster_subnet_config::RawNetworkConfig;
//! let raw = RawNetworkConfig {
//!     cluster_subnets: "10.128.0.0/14/23,fd01::/48".to_string(),
//!     service_subnets: "172.16.1.0/24,fd02::/112".to_string(),
//!     ..Default::default()
//! };
//! let config = raw.validate().unwrap();
//! assert!(config.ipv4_mode && config.ipv6_mode);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod parse;
pub mod processing;

pub use config::{RawNetworkConfig, ValidatedNetworkConfig};
pub use error::{ConfigError, Result};
pub use models::{CidrNetworkEntry, HostPort, IpFamily, SubnetRole};
pub use parse::{parse_cluster_subnet_entries, parse_flow_collectors};
pub use processing::SubnetRegistry;

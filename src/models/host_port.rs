//! Flow collector endpoint model.

use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// A flow collector `host:port` tuple.
///
/// `host` is `None` when the endpoint was given as `:port`, meaning the
/// reporting node's own address should be used.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HostPort {
    pub host: Option<IpAddr>,
    pub port: u16,
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.host {
            Some(IpAddr::V6(addr)) => write!(f, "[{}]:{}", addr, self.port),
            Some(IpAddr::V4(addr)) => write!(f, "{}:{}", addr, self.port),
            None => write!(f, ":{}", self.port),
        }
    }
}

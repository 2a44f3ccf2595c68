//! Subnet registry and the checks run over it.
//!
//! - [`registry`] - accumulates every configured subnet by role
//! - [`overlap`] - pairwise overlap detection
//! - [`family`] - single-stack / dual-stack classification

mod family;
mod overlap;
mod registry;

pub use registry::{ConfigSubnet, SubnetRegistry};

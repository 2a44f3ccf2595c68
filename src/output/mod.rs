//! Output formatting for a validated network configuration.
//!
//! - [`terminal`] - aligned terminal summary with colors

mod terminal;

pub use terminal::{format_field, render_summary, summary_rows, SummaryRow};

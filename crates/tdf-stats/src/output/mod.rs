//! Output writers for statistics.
//!
//! This module handles:
//! - The console text report
//! - JSON report export and re-import

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{check_report_path, read_report, write_report};
pub use schema::{build_report, AthleteSummary, Report};
pub use text::{format_real, render_text};

//! Aggregation of result records into riders and field statistics.
//!
//! This module turns parsed result lines into:
//! - Per-rider speed series with best gain and median
//! - The median speed over a year range
//! - The median of rider medians

pub mod athlete;
pub mod metrics;
pub mod standings;

// Re-export main types and functions
pub use athlete::{Athlete, AthleteKey};
pub use metrics::{median, median_sorted};
pub use standings::{Aggregator, GainEntry, IngestSummary, Standings};

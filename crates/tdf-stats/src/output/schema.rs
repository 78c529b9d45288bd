//! JSON report schema.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::Standings;
use crate::utils::config::{YearRange, REPORT_SCHEMA_VERSION};
use crate::utils::error::StatsError;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input the statistics were computed from
    pub source: String,

    /// Years counted by `median_speed`
    pub year_range: YearRange,

    /// One entry per rider, in identity-key order
    pub athletes: Vec<AthleteSummary>,

    /// Median of every performance inside `year_range`
    pub median_speed: f64,

    /// Median of each rider's full-history median
    pub median_of_medians: f64,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Per-rider figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteSummary {
    pub name: String,
    pub best_gain: f64,

    /// Absent for a rider with nothing recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_speed: Option<f64>,

    /// Recorded years, ascending
    pub years: Vec<i32>,
}

/// Compute every statistic into a `Report`
///
/// # Errors
/// * `StatsError::InsufficientData` - either field-wide median is undefined
pub fn build_report(
    standings: &Standings,
    range: YearRange,
    source: impl Into<String>,
) -> Result<Report, StatsError> {
    let athletes = standings
        .athletes()
        .map(|athlete| AthleteSummary {
            name: athlete.display_name(),
            best_gain: athlete.best_gain(),
            median_speed: athlete.median_speed().ok(),
            years: athlete.years().collect(),
        })
        .collect();

    Ok(Report {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: source.into(),
        year_range: range,
        athletes,
        median_speed: standings.global_median_speed(range)?,
        median_of_medians: standings.median_of_athlete_medians()?,
        generated_at: Utc::now().to_rfc3339(),
    })
}

//! Small commands that do not compute statistics.

use crate::aggregator::Aggregator;
use crate::parser::MalformedPolicy;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

/// Counts from a successful input check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputCheck {
    pub records: usize,
    pub athletes: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

/// Validate a results file without computing statistics
///
/// Fails on the first malformed line.
pub fn validate_input_file(file_path: impl AsRef<Path>) -> Result<InputCheck> {
    let file_path = file_path.as_ref();
    println!("Validating results: {}", file_path.display());

    let mut aggregator = Aggregator::new();
    let summary = aggregator
        .ingest_file(file_path, MalformedPolicy::Fail)
        .with_context(|| format!("Invalid results file {}", file_path.display()))?;
    let standings = aggregator.finish();

    let years: Vec<i32> = standings.athletes().flat_map(|a| a.years()).collect();
    let check = InputCheck {
        records: summary.ingested,
        athletes: standings.athlete_count(),
        first_year: years.iter().min().copied(),
        last_year: years.iter().max().copied(),
    };

    println!("{} Valid results file", "✓".green());
    println!("  Records:  {}", check.records);
    println!("  Riders:   {}", check.athletes);
    if let (Some(first), Some(last)) = (check.first_year, check.last_year) {
        println!("  Years:    {}-{}", first, last);
    }

    Ok(check)
}

/// Display version information
pub fn display_version() {
    println!("TdF Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Best gains and median speeds for Tour de France results.");
}

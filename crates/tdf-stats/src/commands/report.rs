//! Report command implementation.
//!
//! The report command:
//! 1. Resolves the year range (defaults, config file, CLI overrides)
//! 2. Reads and ingests the results file
//! 3. Computes best gains and medians
//! 4. Prints the text report
//! 5. Writes the optional JSON report

use crate::aggregator::Aggregator;
use crate::commands::models::ReportArgs;
use crate::output::{build_report, check_report_path, render_text, write_report, Report};
use crate::utils::config::{load_config, StatsConfig, YearRange};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// Every statistic is computed before anything is printed, so a failing
/// median produces no partial output.
///
/// # Returns
/// The computed report
pub fn execute_report(args: ReportArgs) -> Result<Report> {
    let start_time = Instant::now();

    let range = resolve_year_range(&args)?;
    info!(
        "Computing statistics for {} ({}-{})",
        args.input.display(),
        range.first,
        range.last
    );

    let mut aggregator = Aggregator::new();
    let summary = aggregator
        .ingest_file(&args.input, args.policy)
        .with_context(|| format!("Failed to ingest {}", args.input.display()))?;
    debug!("Ingest summary: {:?}", summary);

    let standings = aggregator.finish();
    let report = build_report(&standings, range, args.input.display().to_string())
        .context("Failed to compute statistics")?;

    if args.print {
        print!("{}", render_text(&report));
    }

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", path.display());
    }

    info!("Done in {:.2?}", start_time.elapsed());

    Ok(report)
}

/// Work out the year range for a run
///
/// Defaults, then the config file, then command-line flags.
pub fn resolve_year_range(args: &ReportArgs) -> Result<YearRange> {
    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StatsConfig::default(),
    };

    let config = config.with_overrides(args.first_year, args.last_year);
    config.years.validate()?;

    Ok(config.years)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if let (Some(first), Some(last)) = (args.first_year, args.last_year) {
        if first > last {
            anyhow::bail!("First year {} is after last year {}", first, last);
        }
    }

    if let Some(path) = &args.output_json {
        check_report_path(path)?;
    }

    Ok(())
}

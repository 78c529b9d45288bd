//! JSON report export and re-import.

use super::schema::Report;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Reject report destinations that can never be written
///
/// **Public** - also used for early argument validation
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty or names a directory
pub fn check_report_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("report path is empty".to_string()));
    }
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "report path {} is a directory",
            path.display()
        )));
    }
    Ok(())
}

/// Write a report as pretty-printed JSON
///
/// **Public** - main entry point for JSON output
///
/// Missing parent directories are created. The report is serialized
/// before the file is touched, so a serialization failure leaves no file.
///
/// # Errors
/// * `OutputError::InvalidPath` - bad path, or parent cannot be created
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    check_report_path(output_path)?;

    let json = serde_json::to_string_pretty(report)?;

    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            debug!("Creating report directory: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        _ => {}
    }

    fs::write(output_path, &json)?;
    info!(
        "Wrote {} riders to {} ({} bytes)",
        report.athletes.len(),
        output_path.display(),
        json.len()
    );

    Ok(())
}

/// Load a report previously written by `write_report`
///
/// # Errors
/// * `OutputError::WriteFailed` - file cannot be opened
/// * `OutputError::SerializationFailed` - not a valid report
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: Report = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Report v{} with {} riders",
        report.version,
        report.athletes.len()
    );

    Ok(report)
}

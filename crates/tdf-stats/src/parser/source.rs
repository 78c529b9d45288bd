//! Input source handling.
//!
//! The whole source is read into memory before aggregation starts.
//! The file handle is dropped at the end of `read_source`, on success or error.

use crate::utils::error::StatsError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What to do with a line that cannot be turned into a performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Abort the run on the first bad line
    #[default]
    Fail,
    /// Log the line at warn level and carry on
    Skip,
}

/// Open a results file for buffered reading
///
/// # Errors
/// * `StatsError::InputSource` - file cannot be opened
pub fn open_source(path: impl AsRef<Path>) -> Result<BufReader<File>, StatsError> {
    let path = path.as_ref();
    debug!("Opening input: {}", path.display());

    let file = File::open(path).map_err(|e| StatsError::input_source(path, e))?;
    Ok(BufReader::new(file))
}

/// Read every line of `reader`, numbered from 1
///
/// `label` names the source in error messages.
/// Both `\n` and `\r\n` terminators are stripped.
pub fn read_lines<R: BufRead>(
    reader: R,
    label: impl AsRef<Path>,
) -> Result<Vec<(usize, String)>, StatsError> {
    let mut lines = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| StatsError::input_source(label.as_ref(), e))?;
        lines.push((index + 1, line));
    }

    debug!("Read {} lines from {}", lines.len(), label.as_ref().display());
    Ok(lines)
}

/// Open `path` and read it to completion
pub fn read_source(path: impl AsRef<Path>) -> Result<Vec<(usize, String)>, StatsError> {
    let path = path.as_ref();
    let reader = open_source(path)?;
    read_lines(reader, path)
}

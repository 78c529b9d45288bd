//! Configuration and constants for the CLI.
//!
//! The competition year range is loaded from an optional TOML file:
//!
//! ```toml
//! [years]
//! first = 2005
//! last = 2012
//! ```

use super::error::StatsError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Input file read when none is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "tdf.txt";

// Competition years contained in the bundled dataset
pub const DEFAULT_FIRST_YEAR: i32 = 2005;
pub const DEFAULT_LAST_YEAR: i32 = 2012;

// Anything outside this window is a typo, not a race year
pub const MIN_PLAUSIBLE_YEAR: i32 = 1000;
pub const MAX_PLAUSIBLE_YEAR: i32 = 9999;

/// Minimum width of the name column in the console report
pub const NAME_COLUMN_WIDTH: usize = 30;

/// Column separator in result files
pub const FIELD_SEPARATOR: char = ',';

/// Inclusive range of competition years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
}

impl YearRange {
    /// Create a range, rejecting `first > last`
    pub fn new(first: i32, last: i32) -> Result<Self, StatsError> {
        let range = Self { first, last };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), StatsError> {
        if self.first > self.last {
            return Err(StatsError::InvalidConfig(format!(
                "year range is inverted: first {} is after last {}",
                self.first, self.last
            )));
        }
        Ok(())
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST_YEAR,
            last: DEFAULT_LAST_YEAR,
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Years counted by the global median
    #[serde(default)]
    pub years: YearRange,
}

impl StatsConfig {
    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, first: Option<i32>, last: Option<i32>) -> Self {
        if let Some(first) = first {
            self.years.first = first;
        }
        if let Some(last) = last {
            self.years.last = last;
        }
        self
    }
}

/// Load configuration from a TOML file
///
/// # Errors
/// * `StatsError::InputSource` - If file cannot be read
/// * `StatsError::ConfigParseFailed` - If TOML is invalid
/// * `StatsError::InvalidConfig` - If the year range is inverted
pub fn load_config(path: impl AsRef<Path>) -> Result<StatsConfig, StatsError> {
    let path = path.as_ref();
    debug!("Loading config from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|e| StatsError::input_source(path, e))?;
    let config: StatsConfig = toml::from_str(&contents)?;
    config.years.validate()?;

    Ok(config)
}

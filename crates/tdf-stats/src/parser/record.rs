//! Raw record parsing for result lines.
//!
//! Line format: `<year>,<avgSpeed>,<lastName>,<firstName>`
//!
//! Example: `2006,35.5,Smith,Jane`
//! Names are kept exactly as written, including any stray whitespace.

use crate::utils::config::FIELD_SEPARATOR;
use crate::utils::error::StatsError;

/// One input line split into its four text columns
///
/// **Public** - consumed by the aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source, 0 when built in memory
    pub line: usize,
    pub year: String,
    pub speed: String,
    pub last_name: String,
    pub first_name: String,
}

impl RawRecord {
    /// Build a record from its four columns
    pub fn new(
        year: impl Into<String>,
        speed: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            line: 0,
            year: year.into(),
            speed: speed.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
        }
    }

    /// Split one line into a raw record
    ///
    /// **Public** - main entry point for line parsing
    ///
    /// # Errors
    /// * `StatsError::MalformedRecord` - line does not have exactly four
    ///   columns, or the trailing first-name column is empty
    pub fn from_line(line: usize, text: &str) -> Result<Self, StatsError> {
        let columns: Vec<&str> = text.split(FIELD_SEPARATOR).collect();

        if columns.len() != 4 {
            return Err(StatsError::MalformedRecord {
                line,
                reason: format!("expected 4 fields, found {}", columns.len()),
            });
        }

        // A trailing empty column is a missing field, not an empty name
        if columns[3].is_empty() {
            return Err(StatsError::MalformedRecord {
                line,
                reason: "missing first name".to_string(),
            });
        }

        Ok(Self {
            line,
            year: columns[0].to_string(),
            speed: columns[1].to_string(),
            last_name: columns[2].to_string(),
            first_name: columns[3].to_string(),
        })
    }

    /// Parse the numeric columns
    ///
    /// # Returns
    /// `(year, speed)` on success
    pub fn numbers(&self) -> Result<(i32, f64), StatsError> {
        let year = parse_year(&self.year).map_err(|reason| self.malformed(reason))?;
        let speed = parse_speed(&self.speed).map_err(|reason| self.malformed(reason))?;
        Ok((year, speed))
    }

    fn malformed(&self, reason: String) -> StatsError {
        StatsError::MalformedRecord {
            line: self.line,
            reason,
        }
    }
}

/// Parse a year column
///
/// The column is taken verbatim, surrounding whitespace is an error.
pub fn parse_year(value: &str) -> Result<i32, String> {
    value
        .parse::<i32>()
        .map_err(|e| format!("invalid year {:?}: {}", value, e))
}

/// Parse an average speed column
///
/// Surrounding whitespace is ignored.
pub fn parse_speed(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid speed {:?}: {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line() {
        let record = RawRecord::from_line(3, "2006,35.5,Smith,Jane").unwrap();
        assert_eq!(record.line, 3);
        assert_eq!(record.year, "2006");
        assert_eq!(record.speed, "35.5");
        assert_eq!(record.last_name, "Smith");
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.numbers().unwrap(), (2006, 35.5));
    }

    #[test]
    fn test_names_are_not_trimmed() {
        let record = RawRecord::from_line(1, "2006,35.5, Smith ,Jane ").unwrap();
        assert_eq!(record.last_name, " Smith ");
        assert_eq!(record.first_name, "Jane ");
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            RawRecord::from_line(7, "2006,35.5,Smith"),
            Err(StatsError::MalformedRecord { line: 7, .. })
        ));
        assert!(RawRecord::from_line(1, "2006,35.5,Smith,Jane,Extra").is_err());
        assert!(RawRecord::from_line(1, "").is_err());
    }

    #[test]
    fn test_missing_first_name() {
        assert!(RawRecord::from_line(1, "2006,35.5,Smith,").is_err());
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2005").unwrap(), 2005);
        assert!(parse_year(" 2005").is_err());
        assert!(parse_year("2005.0").is_err());
        assert!(parse_year("twenty").is_err());
    }

    #[test]
    fn test_parse_speed() {
        assert_eq!(parse_speed("41.654").unwrap(), 41.654);
        assert_eq!(parse_speed(" 40 ").unwrap(), 40.0);
        assert!(parse_speed("fast").is_err());
    }

    #[test]
    fn test_numbers_reports_line() {
        let record = RawRecord::from_line(12, "2006,abc,Smith,Jane").unwrap();
        match record.numbers() {
            Err(StatsError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 12);
                assert!(reason.contains("speed"));
            }
            other => panic!("expected malformed record, got {:?}", other),
        }
    }
}

//! Result file parsing.
//!
//! This module handles:
//! - Opening the results file
//! - Splitting lines into raw four-field records
//! - Parsing the numeric year and speed columns

pub mod record;
pub mod source;

// Re-export main types
pub use record::{parse_speed, parse_year, RawRecord};
pub use source::{open_source, read_lines, read_source, MalformedPolicy};

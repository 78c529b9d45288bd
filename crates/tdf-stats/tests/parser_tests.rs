use std::io::Cursor;
use tdf_stats::parser::{parse_speed, parse_year, read_lines, read_source, RawRecord};
use tdf_stats::utils::error::StatsError;

#[test]
fn test_raw_record_from_line() {
    let record = RawRecord::from_line(1, "2012,39.83,Wiggins,Bradley").unwrap();
    assert_eq!(record.numbers().unwrap(), (2012, 39.83));
    assert_eq!(record.first_name, "Bradley");
    assert_eq!(record.last_name, "Wiggins");
}

#[test]
fn test_comma_in_name_is_malformed() {
    let result = RawRecord::from_line(4, "2012,39.83,Wiggins, Sir,Bradley");
    assert!(matches!(
        result,
        Err(StatsError::MalformedRecord { line: 4, .. })
    ));
}

#[test]
fn test_numeric_parsing() {
    assert_eq!(parse_year("2009").unwrap(), 2009);
    assert!(parse_year("").is_err());
    assert_eq!(parse_speed("40.3").unwrap(), 40.3);
    assert!(parse_speed("").is_err());
}

#[test]
fn test_read_lines_keeps_empty_lines() {
    let lines = read_lines(Cursor::new("a\n\nb\n"), "mem").unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], (2, String::new()));
}

#[test]
fn test_read_source_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = read_source(temp_dir.path().join("missing.txt"));
    assert!(matches!(result, Err(StatsError::InputSource { .. })));
}

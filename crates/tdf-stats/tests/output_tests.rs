use std::path::Path;
use tdf_stats::output::{check_report_path, read_report, render_text, write_report};
use tdf_stats::output::{AthleteSummary, Report};
use tdf_stats::utils::config::YearRange;
use tempfile::NamedTempFile;

fn create_test_report() -> Report {
    Report {
        version: "1.0.0".to_string(),
        source: "tdf.txt".to_string(),
        year_range: YearRange::default(),
        athletes: vec![AthleteSummary {
            name: "JaneSmith".to_string(),
            best_gain: 1.5,
            median_speed: Some(36.25),
            years: vec![2006, 2008],
        }],
        median_speed: 36.25,
        median_of_medians: 36.25,
        generated_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded, report);
}

#[test]
fn test_check_report_path_empty() {
    assert!(check_report_path(Path::new("")).is_err());
}

#[test]
fn test_check_report_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(check_report_path(temp_dir.path()).is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("reports").join("2012").join("report.json");

    write_report(&create_test_report(), &nested).unwrap();
    assert!(nested.exists());
}

#[test]
fn test_empty_median_is_omitted_from_json() {
    let mut report = create_test_report();
    report.athletes[0].median_speed = None;

    let json = serde_json::to_string(&report).unwrap();
    assert!(!json.contains("\"median_speed\":null"));
}

#[test]
fn test_render_text_summary_lines() {
    let text = render_text(&create_test_report());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "JaneSmith                     : 1.5");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "The median speed at the Tour de France is 36.25");
    assert_eq!(lines[4], "The median of medians at the Tour de France is 36.25");
}

#[test]
fn test_write_report_to_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(write_report(&create_test_report(), temp_dir.path()).is_err());
}

//! Tests for loading the scoreboard configuration.

use std::io::Write;
use strictly_bowling::{OutputFormat, ScoreboardConfig};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"\nstrict = true\nlog_filter = \"debug\"").unwrap();

    let config = ScoreboardConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.format(), OutputFormat::Json);
    assert!(*config.strict());
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScoreboardConfig::load_or_default(dir.path().join("bowling.toml")).unwrap();
    assert_eq!(config, ScoreboardConfig::default());
}

#[test]
fn test_missing_file_is_an_error_when_required() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScoreboardConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "strict = \"sometimes\"").unwrap();

    let err = ScoreboardConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

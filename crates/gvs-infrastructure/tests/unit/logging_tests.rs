//! Logging configuration tests

use gvs_infrastructure::config::LoggingConfig;
use gvs_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn parses_all_supported_levels() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn parsing_is_case_insensitive() {
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("Debug").unwrap(), Level::DEBUG);
}

#[test]
fn rejects_unknown_levels() {
    assert!(parse_log_level("verbose").is_err());
    assert!(parse_log_level("").is_err());
}

#[test]
fn default_logging_config_is_info_text() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

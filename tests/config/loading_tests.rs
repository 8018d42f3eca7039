//! Configuration loading tests

use sqlviz_core::config::{AppConfig, ConfigError, parse_config};
use sqlviz_core::domain::ChartType;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_full_config_parses() {
    let config = parse_config(
        r#"
api_base_url = "https://analysis.example.com"
analyse_path = "/v2/analyse"
default_chart_type = "scatter"
artifact_preview_bytes = 2048
request_timeout_secs = 30
log_file = "/tmp/sqlviz-test.log"
"#,
    )
    .unwrap();

    assert_eq!(
        config.analyse_url().unwrap().as_str(),
        "https://analysis.example.com/v2/analyse"
    );
    assert_eq!(config.default_chart_type, ChartType::Scatter);
    assert_eq!(config.artifact_preview_bytes, 2048);
    assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    assert_eq!(config.log_file.to_str(), Some("/tmp/sqlviz-test.log"));
}

#[test]
fn test_defaults_have_no_timeout() {
    let config = AppConfig::default();
    assert!(config.request_timeout.is_none());
    assert_eq!(
        config.analyse_url().unwrap().as_str(),
        "http://127.0.0.1:8000/api/v1/analysis/analyse"
    );
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(matches!(
        parse_config("api_base_url = \"not a url\""),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
        parse_config("default_chart_type = \"radar\""),
        Err(ConfigError::InvalidChartType(_))
    ));
    assert!(matches!(
        parse_config("artifact_preview_bytes = \"lots\""),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(ConfigError::NotFound { .. })
    ));
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("client.toml");
    fs::write(&path, "analyse_path = \"/api/v1/analysis/analyse\"\n").unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(config.analyse_path, "/api/v1/analysis/analyse");
}

#[test]
fn test_set_api_base_url_validates() {
    let mut config = AppConfig::default();
    config.set_api_base_url("http://10.0.0.5:8000").unwrap();
    assert_eq!(
        config.analyse_url().unwrap().as_str(),
        "http://10.0.0.5:8000/api/v1/analysis/analyse"
    );
    assert!(config.set_api_base_url("mailto:someone").is_err());
}

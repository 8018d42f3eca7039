use super::error::ConfigError;
use crate::constants::{
    ANALYSE_PATH, DEFAULT_API_BASE_URL, DEFAULT_ARTIFACT_PREVIEW_BYTES, DEFAULT_LOG_FILE,
};
use crate::domain::ChartType;
use reqwest::Url;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Client configuration loaded from client.toml
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the analysis API. Relative artifact paths resolve against it.
    pub api_base_url: Url,
    pub analyse_path: String,
    pub default_chart_type: ChartType,
    pub artifact_preview_bytes: usize,
    /// `None` means requests never time out.
    pub request_timeout: Option<Duration>,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default API base url is valid"),
            analyse_path: ANALYSE_PATH.to_string(),
            default_chart_type: ChartType::default(),
            artifact_preview_bytes: DEFAULT_ARTIFACT_PREVIEW_BYTES,
            request_timeout: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Full URL of the analysis endpoint.
    pub fn analyse_url(&self) -> Result<Url, ConfigError> {
        self.api_base_url
            .join(&self.analyse_path)
            .map_err(|e| ConfigError::InvalidAnalysePath {
                value: self.analyse_path.clone(),
                reason: e.to_string(),
            })
    }

    /// Replace the API origin, validating it the same way the loader does.
    pub fn set_api_base_url(&mut self, value: &str) -> Result<(), ConfigError> {
        self.api_base_url = parse_base_url(value)?;
        Ok(())
    }
}

pub(crate) fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason: "url cannot be used as a base".to_string(),
        });
    }
    Ok(url)
}

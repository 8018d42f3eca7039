use super::app::{AppConfig, parse_base_url};
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use crate::domain::ChartType;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Overrides the API origin from the environment.
pub const ENV_API_BASE_URL: &str = "SQLVIZ_API_BASE_URL";
/// Overrides the default chart type from the environment.
pub const ENV_CHART_TYPE: &str = "SQLVIZ_CHART_TYPE";

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    api_base_url: Option<String>,
    analyse_path: Option<String>,
    default_chart_type: Option<String>,
    artifact_preview_bytes: Option<usize>,
    request_timeout_secs: Option<u64>,
    log_file: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load configuration and apply environment overrides.
///
/// A missing file at the default location yields the defaults; a missing file
/// that was asked for explicitly is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    debug!(path = %config_path.display(), "Reading client configuration file");

    let mut config = match fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content)?,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            if explicit {
                return Err(ConfigError::NotFound {
                    path: config_path.to_path_buf(),
                });
            }
            debug!("No configuration file found, using defaults");
            AppConfig::default()
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: config_path.to_path_buf(),
                source,
            });
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Parse and validate client.toml content.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse { source })?;
    validate_and_build(raw)
}

fn validate_and_build(raw: RawConfig) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Some(base) = raw.api_base_url {
        config.api_base_url = parse_base_url(&base)?;
    }
    if let Some(path) = raw.analyse_path {
        config.analyse_path = path;
    }
    if let Some(chart) = raw.default_chart_type {
        config.default_chart_type = chart.parse::<ChartType>()?;
    }
    if let Some(limit) = raw.artifact_preview_bytes {
        if limit == 0 {
            return Err(ConfigError::ZeroPreviewLimit);
        }
        config.artifact_preview_bytes = limit;
    }
    config.request_timeout = raw.request_timeout_secs.map(Duration::from_secs);
    if let Some(log_file) = raw.log_file {
        config.log_file = PathBuf::from(expand(&log_file));
    }

    // Surfaces a bad analyse path at load time instead of on first submit.
    config.analyse_url()?;
    Ok(config)
}

/// Apply `SQLVIZ_*` overrides using the given variable lookup.
pub fn apply_env_overrides(
    config: &mut AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(base) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
        debug!(api_base_url = %base, "Overriding API base url from environment");
        config.set_api_base_url(base.trim())?;
    }
    if let Some(chart) = lookup(ENV_CHART_TYPE).filter(|v| !v.trim().is_empty()) {
        config.default_chart_type = chart.parse::<ChartType>()?;
    }
    Ok(())
}

fn expand(value: &str) -> String {
    shellexpand::full(value)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

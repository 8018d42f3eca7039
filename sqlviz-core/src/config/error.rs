use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid API base url '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("invalid analyse path '{value}': {reason}")]
    InvalidAnalysePath { value: String, reason: String },

    #[error(transparent)]
    InvalidChartType(#[from] crate::domain::ParseChartTypeError),

    #[error("'artifact_preview_bytes' must be greater than zero")]
    ZeroPreviewLimit,
}

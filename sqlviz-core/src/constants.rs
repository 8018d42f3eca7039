//! Application constants
//!
//! Single source of truth for paths, endpoints and fixed UI text.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/client.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Origin of the analysis API when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path of the analysis endpoint, relative to the API origin
pub const ANALYSE_PATH: &str = "/api/v1/analysis/analyse";

/// Default log file for the terminal client
pub const DEFAULT_LOG_FILE: &str = "logs/sqlviz.log";

/// Upper bound on the artifact text kept for the preview pane
pub const DEFAULT_ARTIFACT_PREVIEW_BYTES: usize = 64 * 1024;

pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter an SQL prompt";
pub const PROCESSING_MESSAGE: &str = "Processing your request...";
pub const VIEWING_ARTIFACT_MESSAGE: &str = "Viewing chart in the artifact window.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network response was not ok";
pub const ERROR_STATUS: &str = "Error";
pub const NOT_AVAILABLE: &str = "N/A";
pub const UNDEFINED: &str = "undefined";

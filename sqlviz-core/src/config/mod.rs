pub mod app;
pub mod error;
pub mod loader;

pub use app::AppConfig;
pub use error::ConfigError;
pub use loader::{apply_env_overrides, ensure_env_loaded, load_config, parse_config};

//! Response panel state

use crate::constants::{ERROR_STATUS, NOT_AVAILABLE, UNDEFINED};
use crate::domain::AnalysisResponse;
use crate::domain::types::file_name;

/// The response panel is either not yet revealed, waiting, or showing the
/// outcome of the latest request. Loading and showing are exclusive by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResponsePanel {
    #[default]
    Hidden,
    Loading,
    Showing(ResponseSummary),
}

/// Status line and file-path label of a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub status: String,
    pub file_label: String,
    /// Path re-displayed when the file label is activated. `None` makes the
    /// label inert.
    pub target: Option<String>,
    pub is_error: bool,
}

impl ResponseSummary {
    pub fn success(response: &AnalysisResponse) -> Self {
        Self {
            status: response
                .status
                .clone()
                .unwrap_or_else(|| UNDEFINED.to_string()),
            file_label: response
                .file_path
                .as_deref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), |p| file_name(p).to_string()),
            target: response.file_path.clone(),
            is_error: false,
        }
    }

    pub fn failure() -> Self {
        Self {
            status: ERROR_STATUS.to_string(),
            file_label: NOT_AVAILABLE.to_string(),
            target: None,
            is_error: true,
        }
    }
}

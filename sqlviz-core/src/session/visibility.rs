//! Derived visibility flags
//!
//! Front ends never track visibility themselves; they call
//! [`Visibility::derive`] once per frame and lay out from the result.

use super::{AnalysisSession, ResponsePanel};
use crate::artifact::{ArtifactView, DisplayMode, ResizeIcon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub response_panel: bool,
    pub loader: bool,
    pub response_data: bool,
    pub file_path_clickable: bool,
    pub artifact_placeholder: bool,
    pub artifact_content: bool,
    pub fullscreen: bool,
    pub resize_icon: ResizeIcon,
}

impl Visibility {
    pub fn derive(session: &AnalysisSession) -> Self {
        let (response_panel, loader, response_data, file_path_clickable) = match session.panel() {
            ResponsePanel::Hidden => (false, false, false, false),
            ResponsePanel::Loading => (true, true, false, false),
            ResponsePanel::Showing(summary) => (true, false, true, summary.target.is_some()),
        };
        let artifact = session.artifact();
        Self {
            response_panel,
            loader,
            response_data,
            file_path_clickable,
            artifact_placeholder: artifact.view() == ArtifactView::Placeholder,
            artifact_content: artifact.view() == ArtifactView::Content,
            fullscreen: artifact.mode() == DisplayMode::Fullscreen,
            resize_icon: artifact.icon(),
        }
    }
}

//! Screen state

use sqlviz_core::domain::ChartType;
use sqlviz_core::session::AnalysisSession;

const SPINNER_FRAMES: usize = 4;

/// Everything the screen needs beyond the session itself.
pub struct App {
    pub session: AnalysisSession,
    /// Endpoint shown in the status bar
    pub endpoint: String,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Scroll offset of the artifact preview
    pub artifact_scroll: u16,
    /// Largest chat scroll offset at the last render
    pub chat_max_scroll: u16,
    /// Largest artifact scroll offset at the last render
    pub artifact_max_scroll: u16,
    /// Transient note in the status bar
    pub status_message: Option<String>,
}

impl App {
    pub fn new(chart_type: ChartType, endpoint: impl Into<String>) -> Self {
        Self {
            session: AnalysisSession::new(chart_type),
            endpoint: endpoint.into(),
            loading_frame: 0,
            artifact_scroll: 0,
            chat_max_scroll: 0,
            artifact_max_scroll: 0,
            status_message: None,
        }
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.session.is_loading() {
            self.loading_frame = (self.loading_frame + 1) % SPINNER_FRAMES;
        }
    }

    pub fn spinner(&self) -> &'static str {
        ["⠋", "⠙", "⠹", "⠸"][self.loading_frame % SPINNER_FRAMES]
    }

    pub fn scroll_artifact_up(&mut self) {
        self.artifact_scroll = self.artifact_scroll.saturating_sub(1);
    }

    pub fn scroll_artifact_down(&mut self) {
        if self.artifact_scroll < self.artifact_max_scroll {
            self.artifact_scroll += 1;
        }
    }
}

//! Artifact viewer
//!
//! The pane has two independent axes: what is shown ([`ArtifactView`]) and
//! how large it is ([`DisplayMode`]). The frame keeps its source when the pane
//! is closed, so reopening shows the same artifact.

mod loader;

pub use loader::{ArtifactDocument, ArtifactError, ArtifactLoader, ArtifactLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtifactView {
    #[default]
    Placeholder,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Normal,
    Fullscreen,
}

/// Icon on the resize control; it always offers the opposite mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeIcon {
    Expand,
    Collapse,
}

impl ResizeIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ResizeIcon::Expand => "⤢",
            ResizeIcon::Collapse => "⤡",
        }
    }
}

/// What the frame currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FrameDocument {
    #[default]
    Blank,
    Loading,
    Loaded(ArtifactDocument),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ArtifactPane {
    view: ArtifactView,
    mode: DisplayMode,
    source: Option<String>,
    document: FrameDocument,
}

impl ArtifactPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the frame at `path` and show it. Displaying the current source
    /// again reloads it.
    pub fn display(&mut self, path: &str) {
        self.source = Some(path.to_string());
        self.document = FrameDocument::Loading;
        self.view = ArtifactView::Content;
    }

    /// Back to the placeholder. The frame source is kept.
    pub fn close(&mut self) {
        self.view = ArtifactView::Placeholder;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.mode = match self.mode {
            DisplayMode::Normal => DisplayMode::Fullscreen,
            DisplayMode::Fullscreen => DisplayMode::Normal,
        };
    }

    /// Store a finished load. Ignored when the frame has since moved to a
    /// different source or the load was superseded by another `display`.
    pub fn attach(&mut self, source: &str, result: Result<ArtifactDocument, ArtifactError>) -> bool {
        if self.source.as_deref() != Some(source) || self.document != FrameDocument::Loading {
            return false;
        }
        self.document = match result {
            Ok(document) => FrameDocument::Loaded(document),
            Err(err) => FrameDocument::Failed(err.to_string()),
        };
        true
    }

    pub fn view(&self) -> ArtifactView {
        self.view
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn document(&self) -> &FrameDocument {
        &self.document
    }

    pub fn icon(&self) -> ResizeIcon {
        match self.mode {
            DisplayMode::Normal => ResizeIcon::Expand,
            DisplayMode::Fullscreen => ResizeIcon::Collapse,
        }
    }
}

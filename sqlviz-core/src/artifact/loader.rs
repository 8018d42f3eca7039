//! Fetches whatever the frame source points at
//!
//! Sources are not validated: a URL is fetched as is, a local path is read
//! from disk, and anything else is resolved against the API origin the way a
//! browser resolves a relative `src`.

use reqwest::{Client, StatusCode, Url};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactLocation {
    Remote(Url),
    Local(PathBuf),
}

impl std::fmt::Display for ArtifactLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactLocation::Remote(url) => write!(f, "{url}"),
            ArtifactLocation::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("'{value}' is not a loadable artifact source: {reason}")]
    InvalidSource { value: String, reason: String },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: Url, status: StatusCode },
}

/// Text preview of a loaded artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDocument {
    pub location: ArtifactLocation,
    pub text: String,
    /// Size of the resource as reported by its source, or the bytes read
    /// before the preview cap stopped the read.
    pub total_bytes: usize,
    pub truncated: bool,
}

impl ArtifactDocument {
    fn from_preview(location: ArtifactLocation, preview: Preview, limit: usize) -> Self {
        let truncated = preview.bytes.len() > limit;
        let kept = if truncated {
            &preview.bytes[..limit]
        } else {
            &preview.bytes[..]
        };
        Self {
            location,
            text: String::from_utf8_lossy(kept).into_owned(),
            total_bytes: preview.total.max(preview.bytes.len()),
            truncated,
        }
    }

    /// Contents of the first `<title>` element, if the preview has one.
    pub fn title(&self) -> Option<&str> {
        let lower = self.text.to_ascii_lowercase();
        let open = lower.find("<title")?;
        let start = open + lower[open..].find('>')? + 1;
        let end = start + lower[start..].find("</title>")?;
        let title = self.text[start..end].trim();
        (!title.is_empty()).then_some(title)
    }
}

/// The first `limit + 1` bytes of a resource. The extra byte is how
/// truncation is detected without reading the rest.
#[derive(Debug, Default)]
struct Preview {
    bytes: Vec<u8>,
    total: usize,
}

impl Preview {
    fn capacity(limit: usize) -> usize {
        limit.saturating_add(1)
    }

    /// Append a chunk, keeping at most `cap` bytes. Returns `false` once the
    /// cap is reached.
    fn push(&mut self, chunk: &[u8], cap: usize) -> bool {
        self.total = self.total.saturating_add(chunk.len());
        let room = cap.saturating_sub(self.bytes.len());
        self.bytes.extend_from_slice(&chunk[..chunk.len().min(room)]);
        self.bytes.len() < cap
    }
}

#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    http: Client,
    base: Url,
    preview_limit: usize,
}

impl ArtifactLoader {
    pub fn new(base: Url, preview_limit: usize) -> Self {
        Self {
            http: Client::new(),
            base,
            preview_limit,
        }
    }

    pub fn resolve(&self, value: &str) -> Result<ArtifactLocation, ArtifactError> {
        let invalid = |reason: String| ArtifactError::InvalidSource {
            value: value.to_string(),
            reason,
        };

        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Url::parse(value)
                .map(ArtifactLocation::Remote)
                .map_err(|e| invalid(e.to_string()));
        }
        if lower.starts_with("file://") {
            let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
            return url
                .to_file_path()
                .map(ArtifactLocation::Local)
                .map_err(|()| invalid("file url has no local path".to_string()));
        }
        if !value.is_empty() && Path::new(value).exists() {
            return Ok(ArtifactLocation::Local(PathBuf::from(value)));
        }
        self.base
            .join(value)
            .map(ArtifactLocation::Remote)
            .map_err(|e| invalid(e.to_string()))
    }

    pub async fn load(&self, value: &str) -> Result<ArtifactDocument, ArtifactError> {
        let location = self.resolve(value)?;
        debug!(source = value, location = %location, "Resolved artifact source");

        let preview = match &location {
            ArtifactLocation::Local(path) => self.read_local(path).await?,
            ArtifactLocation::Remote(url) => self.fetch(url).await?,
        };

        info!(
            location = %location,
            bytes = preview.bytes.len(),
            total = preview.total,
            "Loaded artifact"
        );
        Ok(ArtifactDocument::from_preview(
            location,
            preview,
            self.preview_limit,
        ))
    }

    async fn read_local(&self, path: &Path) -> Result<Preview, ArtifactError> {
        let io_err = |source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).await.map_err(io_err)?;
        let size = file.metadata().await.map_err(io_err)?.len();

        let cap = Preview::capacity(self.preview_limit);
        let mut bytes = Vec::new();
        file.take(cap as u64)
            .read_to_end(&mut bytes)
            .await
            .map_err(io_err)?;
        Ok(Preview {
            total: usize::try_from(size).unwrap_or(usize::MAX),
            bytes,
        })
    }

    /// GET `url`, reading the body only up to the preview cap.
    async fn fetch(&self, url: &Url) -> Result<Preview, ArtifactError> {
        let http_err = |source| ArtifactError::Http {
            url: url.clone(),
            source,
        };
        let mut response = self.http.get(url.clone()).send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ArtifactError::Status {
                url: url.clone(),
                status,
            });
        }
        let declared = response
            .content_length()
            .and_then(|len| usize::try_from(len).ok());

        let cap = Preview::capacity(self.preview_limit);
        let mut preview = Preview::default();
        while let Some(chunk) = response.chunk().await.map_err(http_err)? {
            if !preview.push(&chunk, cap) {
                break;
            }
        }
        if let Some(declared) = declared {
            preview.total = preview.total.max(declared);
        }
        Ok(preview)
    }
}

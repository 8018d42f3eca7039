use crate::constants::NETWORK_ERROR_MESSAGE;
use reqwest::StatusCode;
use thiserror::Error;

/// Failures while talking to the analysis API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Any non-2xx answer. Only the fixed message reaches the user.
    #[error("Network response was not ok")]
    Status { status: StatusCode },

    #[error("network error calling '{url}': {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("analysis API at '{url}' returned an unreadable body: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {source}")]
    Build {
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    pub fn decode(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Text shown in the chat log when a request fails.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status { .. } => NETWORK_ERROR_MESSAGE.to_string(),
            ClientError::Network { url, source } => {
                if source.is_connect() {
                    format!("Failed to connect to {url}")
                } else if source.is_timeout() {
                    format!("Request to {url} timed out")
                } else {
                    format!("Failed to fetch {url}")
                }
            }
            ClientError::Decode { .. } => {
                "The analysis API returned a response that is not valid JSON".to_string()
            }
            ClientError::Build { source } => format!("Failed to build HTTP client: {source}"),
        }
    }
}

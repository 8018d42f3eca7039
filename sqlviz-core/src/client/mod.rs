//! Analysis API client
//!
//! [`AnalysisApi`] is the seam between the session and the network. The
//! production implementation is [`HttpAnalysisClient`]; tests substitute an
//! in-process fake.

mod error;
mod http;

pub use error::ClientError;
pub use http::HttpAnalysisClient;

use crate::domain::{AnalysisRequest, AnalysisResponse};
use async_trait::async_trait;

#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Submit one analysis request. Exactly one HTTP request per call, no
    /// retries.
    async fn analyse(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ClientError>;
}

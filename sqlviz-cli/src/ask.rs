//! One-shot mode: send a single prompt and return the raw response.

use serde_json::Value;
use sqlviz_core::client::{AnalysisApi, ClientError};
use sqlviz_core::domain::{AnalysisRequest, ChartType};
use sqlviz_core::session::SubmitError;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AskError {
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AskError {
    pub fn user_message(&self) -> String {
        match self {
            AskError::Client(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

/// Send `prompt` once and return the response as JSON. An empty prompt fails
/// without touching the network.
pub async fn ask<A>(api: &A, prompt: &str, chart_type: ChartType) -> Result<Value, AskError>
where
    A: AnalysisApi + ?Sized,
{
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(SubmitError::EmptyPrompt.into());
    }
    let request = AnalysisRequest::new(prompt, chart_type);
    info!(chart_type = %chart_type, "Dispatching single prompt");
    let response = api.analyse(&request).await?;
    Ok(serde_json::to_value(response)?)
}

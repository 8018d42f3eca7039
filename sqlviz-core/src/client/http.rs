//! reqwest implementation of the analysis API

use super::{AnalysisApi, ClientError};
use crate::domain::{AnalysisRequest, AnalysisResponse};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: Client,
    endpoint: Url,
}

impl HttpAnalysisClient {
    /// Client for the given analysis endpoint. Without a timeout a hung
    /// request stays pending indefinitely.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|source| ClientError::Build { source })?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisApi for HttpAnalysisClient {
    async fn analyse(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ClientError> {
        let url = self.endpoint.as_str();
        info!(
            url,
            chart_type = %request.chart_type,
            prompt_len = request.sql_prompt.len(),
            "Sending analysis request"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Analysis API answered with an error status");
            return Err(ClientError::Status { status });
        }

        let body: AnalysisResponse = response
            .json()
            .await
            .map_err(|e| ClientError::decode(url, e))?;
        debug!(
            status = ?body.status,
            file_path = ?body.file_path,
            explanation_len = body.explanation.as_ref().map_or(0, String::len),
            "Received analysis response"
        );
        Ok(body)
    }
}

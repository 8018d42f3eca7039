//! Submission flow
//!
//! [`AnalysisSession`] owns every piece of client state: the prompt form, the
//! chat log, the response panel and the artifact pane. A submission is split
//! into [`AnalysisSession::submit`], which validates and returns the request
//! to send, and [`AnalysisSession::complete`], which applies the outcome. The
//! caller decides how the request is awaited.
//!
//! Every submission is tagged with a sequence number. Only the outcome of the
//! most recent submission is applied; earlier ones that finish late are
//! dropped, so overlapping requests cannot overwrite newer state.

mod form;
mod panel;
mod visibility;

pub use form::PromptForm;
pub use panel::{ResponsePanel, ResponseSummary};
pub use visibility::Visibility;

use crate::artifact::{ArtifactDocument, ArtifactError, ArtifactPane};
use crate::client::{AnalysisApi, ClientError};
use crate::constants::{
    EMPTY_PROMPT_MESSAGE, PROCESSING_MESSAGE, UNDEFINED, VIEWING_ARTIFACT_MESSAGE,
};
use crate::domain::{AnalysisRequest, AnalysisResponse, ChartType, ChatLog};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter an SQL prompt")]
    EmptyPrompt,
}

/// A validated request waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub seq: u64,
    pub request: AnalysisRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The outcome was applied. `artifact` is the source the frame should
    /// now load, if any.
    Applied { artifact: Option<String> },
    /// A newer submission exists; nothing changed.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    pub form: PromptForm,
    log: ChatLog,
    panel: ResponsePanel,
    artifact: ArtifactPane,
    issued: u64,
}

impl AnalysisSession {
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            form: PromptForm::new(chart_type),
            ..Self::default()
        }
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ChatLog {
        &mut self.log
    }

    pub fn panel(&self) -> &ResponsePanel {
        &self.panel
    }

    pub fn artifact(&self) -> &ArtifactPane {
        &self.artifact
    }

    pub fn is_loading(&self) -> bool {
        self.panel == ResponsePanel::Loading
    }

    /// Append a system message.
    pub fn notice(&mut self, content: impl Into<String>) {
        self.log.push_system(content);
    }

    /// Validate the form and start a submission.
    ///
    /// An empty or whitespace-only prompt appends a single system message and
    /// leaves the input untouched. Otherwise the user message is logged, the
    /// input is cleared, the panel switches to loading and the request to
    /// send is returned.
    pub fn submit(&mut self) -> Result<PendingRequest, SubmitError> {
        let prompt = self.form.input().trim().to_string();
        let chart_type = self.form.chart_type();

        if prompt.is_empty() {
            self.log.push_system(EMPTY_PROMPT_MESSAGE);
            return Err(SubmitError::EmptyPrompt);
        }

        self.log
            .push_user(format!("SQL Query: {prompt}\nChart Type: {chart_type}"));
        self.form.clear();

        self.panel = ResponsePanel::Loading;
        self.log.push_system(PROCESSING_MESSAGE);

        self.issued += 1;
        info!(seq = self.issued, chart_type = %chart_type, "Submitting analysis request");
        Ok(PendingRequest {
            seq: self.issued,
            request: AnalysisRequest::new(prompt, chart_type),
        })
    }

    /// Apply the outcome of the submission tagged `seq`.
    pub fn complete(
        &mut self,
        seq: u64,
        result: Result<AnalysisResponse, ClientError>,
    ) -> Completion {
        if seq == 0 || seq != self.issued {
            debug!(seq, latest = self.issued, "Discarding stale analysis response");
            return Completion::Stale;
        }

        match result {
            Ok(response) => {
                info!(seq, status = ?response.status, file_path = ?response.file_path, "Analysis complete");
                self.panel = ResponsePanel::Showing(ResponseSummary::success(&response));
                let explanation = response.explanation.as_deref().unwrap_or(UNDEFINED);
                self.log
                    .push_system(format!("### Analysis complete!\n\n{explanation}"));

                let artifact = response.file_path;
                if let Some(path) = &artifact {
                    self.artifact.display(path);
                }
                Completion::Applied { artifact }
            }
            Err(err) => {
                warn!(seq, error = %err, "Analysis request failed");
                self.panel = ResponsePanel::Showing(ResponseSummary::failure());
                self.log.push_system(format!(
                    "### Error\n\n{}\n\nPlease check your API server and try again.",
                    err.user_message()
                ));
                Completion::Applied { artifact: None }
            }
        }
    }

    /// Submit and await the request in place.
    pub async fn analyse_with<A>(&mut self, api: &A) -> Result<Completion, SubmitError>
    where
        A: AnalysisApi + ?Sized,
    {
        let pending = self.submit()?;
        let result = api.analyse(&pending.request).await;
        Ok(self.complete(pending.seq, result))
    }

    /// Activate the file-path label. Returns the source to load, or `None`
    /// when the label has no target.
    pub fn open_file_path(&mut self) -> Option<String> {
        let target = match &self.panel {
            ResponsePanel::Showing(summary) => summary.target.clone()?,
            _ => return None,
        };
        self.artifact.display(&target);
        self.log.push_system(VIEWING_ARTIFACT_MESSAGE);
        Some(target)
    }

    pub fn close_artifact(&mut self) {
        self.artifact.close();
    }

    pub fn toggle_fullscreen(&mut self) {
        self.artifact.toggle_fullscreen();
    }

    /// Hand a finished artifact load to the pane.
    pub fn attach_artifact(
        &mut self,
        source: &str,
        result: Result<ArtifactDocument, ArtifactError>,
    ) -> bool {
        let applied = self.artifact.attach(source, result);
        if !applied {
            debug!(source, "Ignoring artifact load for a replaced source");
        }
        applied
    }
}

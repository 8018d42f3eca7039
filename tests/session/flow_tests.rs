//! Submission flow tests against an in-process fake API

use async_trait::async_trait;
use reqwest::StatusCode;
use sqlviz_core::artifact::ArtifactView;
use sqlviz_core::client::{AnalysisApi, ClientError};
use sqlviz_core::domain::{AnalysisRequest, AnalysisResponse, ChartType, MessageRole};
use sqlviz_core::markdown::render_message_html;
use sqlviz_core::session::{
    AnalysisSession, Completion, ResponsePanel, SubmitError, Visibility,
};
use std::sync::Mutex;

enum Reply {
    Success(AnalysisResponse),
    Status(StatusCode),
}

struct FakeApi {
    reply: Reply,
    calls: Mutex<Vec<AnalysisRequest>>,
}

impl FakeApi {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<AnalysisRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisApi for FakeApi {
    async fn analyse(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ClientError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Success(response) => Ok(response.clone()),
            Reply::Status(status) => Err(ClientError::Status { status: *status }),
        }
    }
}

fn chart_response() -> AnalysisResponse {
    AnalysisResponse {
        status: Some("ok".into()),
        file_path: Some("/out/chart1.html".into()),
        explanation: Some("**bold** text".into()),
    }
}

#[tokio::test]
async fn test_blank_prompts_send_nothing() {
    for prompt in ["", "   ", "\t\n "] {
        let api = FakeApi::new(Reply::Success(chart_response()));
        let mut session = AnalysisSession::new(ChartType::Bar);
        session.form.set_input(prompt);

        let result = session.analyse_with(&api).await;

        assert_eq!(result, Err(SubmitError::EmptyPrompt));
        assert!(api.calls().is_empty());
        assert_eq!(session.log().len(), 1);
        let message = session.log().last().unwrap();
        assert_eq!(message.role(), MessageRole::System);
        assert_eq!(message.content(), "Please enter an SQL prompt");
        assert_eq!(session.form.input(), prompt);
        assert_eq!(session.panel(), &ResponsePanel::Hidden);
    }
}

#[tokio::test]
async fn test_prompt_is_trimmed_and_input_cleared() {
    let mut session = AnalysisSession::new(ChartType::Bar);
    session.form.set_chart_type(ChartType::Pie);
    session.form.set_input("  sales by region  ");

    let pending = session.submit().unwrap();

    assert_eq!(pending.request.sql_prompt, "sales by region");
    assert_eq!(pending.request.chart_type, ChartType::Pie);
    assert!(session.form.input().is_empty());
    assert!(session.is_loading());

    let contents: Vec<&str> = session.log().messages().iter().map(|m| m.content()).collect();
    assert_eq!(
        contents,
        vec![
            "SQL Query: sales by region\nChart Type: pie",
            "Processing your request...",
        ]
    );
}

#[tokio::test]
async fn test_exactly_one_request_per_submission() {
    let api = FakeApi::new(Reply::Success(chart_response()));
    let mut session = AnalysisSession::new(ChartType::Line);
    session.form.set_input("monthly signups");

    session.analyse_with(&api).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![AnalysisRequest::new("monthly signups", ChartType::Line)]
    );
}

#[tokio::test]
async fn test_success_updates_panel_log_and_artifact() {
    let api = FakeApi::new(Reply::Success(chart_response()));
    let mut session = AnalysisSession::new(ChartType::Bar);
    session.form.set_input("top products");

    let completion = session.analyse_with(&api).await.unwrap();

    assert_eq!(
        completion,
        Completion::Applied {
            artifact: Some("/out/chart1.html".into())
        }
    );
    match session.panel() {
        ResponsePanel::Showing(summary) => {
            assert_eq!(summary.status, "ok");
            assert_eq!(summary.file_label, "chart1.html");
            assert_eq!(summary.target.as_deref(), Some("/out/chart1.html"));
        }
        other => panic!("unexpected panel {other:?}"),
    }
    assert_eq!(session.artifact().source(), Some("/out/chart1.html"));
    assert_eq!(session.artifact().view(), ArtifactView::Content);

    let html = render_message_html(session.log().last().unwrap());
    assert!(html.contains("<h3>Analysis complete!</h3>"));
    assert!(html.contains("<strong>bold</strong> text"));
}

#[tokio::test]
async fn test_failure_shows_error_without_click_target() {
    let api = FakeApi::new(Reply::Status(StatusCode::INTERNAL_SERVER_ERROR));
    let mut session = AnalysisSession::new(ChartType::Bar);
    session.form.set_input("top products");

    session.analyse_with(&api).await.unwrap();

    match session.panel() {
        ResponsePanel::Showing(summary) => {
            assert_eq!(summary.status, "Error");
            assert_eq!(summary.file_label, "N/A");
            assert!(summary.target.is_none());
        }
        other => panic!("unexpected panel {other:?}"),
    }
    assert!(!Visibility::derive(&session).file_path_clickable);
    assert!(
        session
            .log()
            .last()
            .unwrap()
            .content()
            .contains("Network response was not ok")
    );

    let before = session.log().len();
    assert_eq!(session.open_file_path(), None);
    assert_eq!(session.log().len(), before);
    assert_eq!(session.artifact().view(), ArtifactView::Placeholder);
}

#[tokio::test]
async fn test_failure_after_success_keeps_frame_source() {
    let mut session = AnalysisSession::new(ChartType::Bar);
    session.form.set_input("first");
    session
        .analyse_with(&FakeApi::new(Reply::Success(chart_response())))
        .await
        .unwrap();

    session.form.set_input("second");
    session
        .analyse_with(&FakeApi::new(Reply::Status(StatusCode::BAD_GATEWAY)))
        .await
        .unwrap();

    assert_eq!(session.artifact().source(), Some("/out/chart1.html"));
    assert_eq!(session.open_file_path(), None);
}

#[tokio::test]
async fn test_missing_fields_become_placeholders() {
    let api = FakeApi::new(Reply::Success(AnalysisResponse::default()));
    let mut session = AnalysisSession::new(ChartType::Bar);
    session.form.set_input("anything");

    let completion = session.analyse_with(&api).await.unwrap();

    assert_eq!(completion, Completion::Applied { artifact: None });
    match session.panel() {
        ResponsePanel::Showing(summary) => {
            assert_eq!(summary.status, "undefined");
            assert_eq!(summary.file_label, "N/A");
            assert!(!summary.is_error);
        }
        other => panic!("unexpected panel {other:?}"),
    }
    assert_eq!(
        session.log().last().unwrap().content(),
        "### Analysis complete!\n\nundefined"
    );
    assert_eq!(session.artifact().view(), ArtifactView::Placeholder);
}

#[test]
fn test_stale_response_is_discarded() {
    let mut session = AnalysisSession::new(ChartType::Bar);
    session.form.set_input("first");
    let first = session.submit().unwrap();
    session.form.set_input("second");
    let second = session.submit().unwrap();
    let log_len = session.log().len();

    let stale = session.complete(first.seq, Ok(chart_response()));
    assert_eq!(stale, Completion::Stale);
    assert!(session.is_loading());
    assert_eq!(session.log().len(), log_len);

    let applied = session.complete(
        second.seq,
        Err(ClientError::Status {
            status: StatusCode::NOT_FOUND,
        }),
    );
    assert_eq!(applied, Completion::Applied { artifact: None });
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_close_then_reopen_restores_same_source() {
    let api = FakeApi::new(Reply::Success(chart_response()));
    let mut session = AnalysisSession::new(ChartType::Bar);
    session.form.set_input("top products");
    session.analyse_with(&api).await.unwrap();

    session.close_artifact();
    assert_eq!(session.artifact().view(), ArtifactView::Placeholder);
    assert_eq!(session.artifact().source(), Some("/out/chart1.html"));

    let reopened = session.open_file_path();
    assert_eq!(reopened.as_deref(), Some("/out/chart1.html"));
    assert_eq!(session.artifact().view(), ArtifactView::Content);
    assert_eq!(session.artifact().source(), Some("/out/chart1.html"));
    assert_eq!(
        session.log().last().unwrap().content(),
        "Viewing chart in the artifact window."
    );
}

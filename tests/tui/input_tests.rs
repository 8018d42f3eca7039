//! TUI input, command and rendering tests

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use sqlviz_cli::tui::{
    App, CommandOutcome, CommandResult, InputAction, apply_command, handle_input, message_lines,
    parse_command,
};
use sqlviz_core::artifact::{ArtifactView, DisplayMode};
use sqlviz_core::domain::{AnalysisResponse, ChartType, ChatMessage};
use std::path::PathBuf;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn app() -> App {
    App::new(ChartType::Bar, "http://127.0.0.1:8000/api/v1/analysis/analyse")
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_input(app, key(KeyCode::Char(c)));
    }
}

fn complete_with_chart(app: &mut App) {
    app.session.form.set_input("sales");
    let pending = app.session.submit().unwrap();
    app.session.complete(
        pending.seq,
        Ok(AnalysisResponse {
            status: Some("ok".into()),
            file_path: Some("/out/chart1.html".into()),
            explanation: Some("done".into()),
        }),
    );
}

#[test]
fn test_typing_and_editing() {
    let mut app = app();
    type_text(&mut app, "sales");
    assert_eq!(app.session.form.input(), "sales");

    handle_input(&mut app, key(KeyCode::Left));
    handle_input(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.session.form.input(), "sals");

    handle_input(&mut app, key(KeyCode::Home));
    handle_input(&mut app, key(KeyCode::Delete));
    assert_eq!(app.session.form.input(), "als");

    handle_input(&mut app, ctrl('c'));
    assert!(app.session.form.input().is_empty());
}

#[test]
fn test_multibyte_input() {
    let mut app = app();
    type_text(&mut app, "café");
    handle_input(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.session.form.input(), "caf");
    handle_input(&mut app, key(KeyCode::Left));
    type_text(&mut app, "é");
    assert_eq!(app.session.form.input(), "caéf");
}

#[test]
fn test_enter_submits_even_when_empty() {
    let mut app = app();
    assert_eq!(handle_input(&mut app, key(KeyCode::Enter)), InputAction::Submit);
}

#[test]
fn test_enter_on_command_takes_input() {
    let mut app = app();
    type_text(&mut app, "/help");
    assert_eq!(
        handle_input(&mut app, key(KeyCode::Enter)),
        InputAction::Command("/help".into())
    );
    assert!(app.session.form.input().is_empty());
}

#[test]
fn test_tab_cycles_chart_type() {
    let mut app = app();
    handle_input(&mut app, key(KeyCode::Tab));
    assert_eq!(app.session.form.chart_type(), ChartType::Line);
    handle_input(&mut app, key(KeyCode::BackTab));
    handle_input(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.session.form.chart_type(), ChartType::Doughnut);
}

#[test]
fn test_q_is_typed_not_exit() {
    let mut app = app();
    assert_eq!(handle_input(&mut app, key(KeyCode::Char('q'))), InputAction::None);
    assert_eq!(app.session.form.input(), "q");
    assert_eq!(handle_input(&mut app, ctrl('q')), InputAction::Exit);
}

#[test]
fn test_artifact_shortcuts() {
    let mut app = app();
    assert_eq!(handle_input(&mut app, ctrl('o')), InputAction::OpenArtifact);
    assert_eq!(handle_input(&mut app, ctrl('x')), InputAction::CloseArtifact);
    assert_eq!(handle_input(&mut app, ctrl('f')), InputAction::ToggleFullscreen);
}

#[test]
fn test_arrows_scroll_artifact_in_fullscreen() {
    let mut app = app();
    assert_eq!(handle_input(&mut app, key(KeyCode::Up)), InputAction::ScrollUp);

    app.session.toggle_fullscreen();
    app.artifact_max_scroll = 5;
    assert_eq!(handle_input(&mut app, key(KeyCode::Down)), InputAction::None);
    assert_eq!(app.artifact_scroll, 1);
    handle_input(&mut app, key(KeyCode::Up));
    handle_input(&mut app, key(KeyCode::Up));
    assert_eq!(app.artifact_scroll, 0);
}

#[test]
fn test_parse_commands() {
    assert_eq!(parse_command("/help"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/chart PIE"), CommandResult::SetChart(ChartType::Pie));
    assert_eq!(parse_command("/chart"), CommandResult::ShowChart);
    assert_eq!(
        parse_command("/chart radar"),
        CommandResult::InvalidChart("radar".into())
    );
    assert_eq!(
        parse_command("/export out/chat log.html"),
        CommandResult::Export(PathBuf::from("out/chat log.html"))
    );
    assert_eq!(parse_command("/export"), CommandResult::MissingExportPath);
    assert_eq!(parse_command("/QUIT"), CommandResult::Exit);
    assert_eq!(parse_command("/nope"), CommandResult::Unknown("nope".into()));
}

#[test]
fn test_open_without_chart_does_nothing() {
    let mut app = app();
    let before = app.session.log().len();

    assert_eq!(apply_command(&mut app, "/open"), CommandOutcome::Continue);
    assert_eq!(handle_input(&mut app, ctrl('o')), InputAction::OpenArtifact);
    assert_eq!(app.session.open_file_path(), None);

    assert_eq!(app.session.log().len(), before);
    assert_eq!(app.session.artifact().view(), ArtifactView::Placeholder);
}

#[test]
fn test_open_close_fullscreen_commands() {
    let mut app = app();
    complete_with_chart(&mut app);

    apply_command(&mut app, "/close");
    assert_eq!(app.session.artifact().view(), ArtifactView::Placeholder);

    assert_eq!(
        apply_command(&mut app, "/open"),
        CommandOutcome::LoadArtifact("/out/chart1.html".into())
    );
    assert_eq!(app.session.artifact().view(), ArtifactView::Content);

    apply_command(&mut app, "/fullscreen");
    assert_eq!(app.session.artifact().mode(), DisplayMode::Fullscreen);
    assert_eq!(apply_command(&mut app, "/exit"), CommandOutcome::Exit);
}

#[test]
fn test_chart_command_sets_selection() {
    let mut app = app();
    apply_command(&mut app, "/chart scatter");
    assert_eq!(app.session.form.chart_type(), ChartType::Scatter);

    let before = app.session.log().len();
    apply_command(&mut app, "/chart radar");
    assert_eq!(app.session.log().len(), before + 1);
    assert_eq!(app.session.form.chart_type(), ChartType::Scatter);
}

#[test]
fn test_export_command_writes_html() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("log.html");
    let mut app = app();
    complete_with_chart(&mut app);

    apply_command(&mut app, &format!("/export {}", path.display()));

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<div class=\"message user\">"));
    assert!(html.contains("<h3>Analysis complete!</h3>"));
    assert!(app.status_message.as_deref().unwrap().starts_with("Exported to"));
}

#[test]
fn test_message_lines_prefix_and_style() {
    let lines = message_lines(&ChatMessage::system("### Done\n- **one**"));
    assert_eq!(lines.len(), 2);

    let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(first, "System: Done");
    let second: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(second, "        • one");
}

#[test]
fn test_user_lines_keep_markup() {
    let lines = message_lines(&ChatMessage::user("SQL Query: **x**\nChart Type: bar"));
    let text: Vec<String> = lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect();
    assert_eq!(text, vec!["You: SQL Query: **x**", "     Chart Type: bar"]);
}

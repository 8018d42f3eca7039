//! Event loop coordinator

use super::input::{CommandResult, InputAction, handle_input, parse_command};
use super::state::App;
use super::terminal::{Tui, init_terminal, restore_terminal};
use super::ui::ChatUi;
use crossterm::event;
use sqlviz_core::artifact::{ArtifactDocument, ArtifactError, ArtifactLoader};
use sqlviz_core::client::{AnalysisApi, ClientError};
use sqlviz_core::config::AppConfig;
use sqlviz_core::domain::{AnalysisResponse, ChartType};
use sqlviz_core::export;
use sqlviz_core::session::Completion;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

const WELCOME: &str = "Welcome to sqlviz! Describe the data you want to see, pick a chart type with Tab, and press Enter. Type /help for commands.";

const HELP: &str = r#"Available commands:
  /help            - Show this help
  /chart [type]    - Show or set the chart type
  /open            - Show the last chart in the artifact window
  /close           - Close the artifact window
  /fullscreen      - Toggle fullscreen artifact view
  /export <path>   - Save the chat log as HTML
  /exit            - Exit"#;

/// Results delivered from background tasks
enum BackgroundEvent {
    Analysis {
        seq: u64,
        result: Result<AnalysisResponse, ClientError>,
    },
    Artifact {
        source: String,
        result: Result<ArtifactDocument, ArtifactError>,
    },
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    /// Load this artifact source in the background
    LoadArtifact(String),
    Exit,
}

/// Run the interactive client until the user exits
pub async fn run_tui(
    api: Arc<dyn AnalysisApi>,
    loader: ArtifactLoader,
    config: &AppConfig,
) -> Result<(), Box<dyn Error>> {
    let endpoint = config.analyse_url()?.to_string();
    let mut app = App::new(config.default_chart_type, endpoint);
    app.session.notice(WELCOME);

    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut app, api, Arc::new(loader)).await;
    restore_terminal()?;
    result
}

async fn run_loop(
    terminal: &mut Tui,
    app: &mut App,
    api: Arc<dyn AnalysisApi>,
    loader: Arc<ArtifactLoader>,
) -> Result<(), Box<dyn Error>> {
    let (tx, mut rx) = mpsc::channel::<BackgroundEvent>(16);

    loop {
        terminal.draw(|frame| ChatUi::render(frame, app))?;

        while let Ok(event) = rx.try_recv() {
            match event {
                BackgroundEvent::Analysis { seq, result } => {
                    if let Completion::Applied {
                        artifact: Some(source),
                    } = app.session.complete(seq, result)
                    {
                        spawn_artifact_load(app, &loader, &tx, source);
                    }
                }
                BackgroundEvent::Artifact { source, result } => {
                    app.session.attach_artifact(&source, result);
                }
            }
        }

        let timeout = if app.session.is_loading() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };
        if !event::poll(timeout)? {
            app.tick_loading();
            continue;
        }

        let action = handle_input(app, event::read()?);
        match action {
            InputAction::Exit => return Ok(()),
            InputAction::Submit => {
                if let Ok(pending) = app.session.submit() {
                    app.status_message = None;
                    let api = api.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let result = api.analyse(&pending.request).await;
                        let _ = tx
                            .send(BackgroundEvent::Analysis {
                                seq: pending.seq,
                                result,
                            })
                            .await;
                    });
                }
            }
            InputAction::Command(line) => match apply_command(app, &line) {
                CommandOutcome::Continue => {}
                CommandOutcome::LoadArtifact(source) => {
                    spawn_artifact_load(app, &loader, &tx, source);
                }
                CommandOutcome::Exit => return Ok(()),
            },
            InputAction::OpenArtifact => {
                if let Some(source) = app.session.open_file_path() {
                    spawn_artifact_load(app, &loader, &tx, source);
                }
            }
            InputAction::CloseArtifact => app.session.close_artifact(),
            InputAction::ToggleFullscreen => app.session.toggle_fullscreen(),
            InputAction::ScrollUp => app.session.log_mut().scroll_up(app.chat_max_scroll),
            InputAction::ScrollDown => app.session.log_mut().scroll_down(app.chat_max_scroll),
            InputAction::ScrollTop => app.session.log_mut().scroll_to_top(),
            InputAction::ScrollBottom => app.session.log_mut().scroll_to_bottom(),
            InputAction::None => {}
        }
    }
}

fn spawn_artifact_load(
    app: &mut App,
    loader: &Arc<ArtifactLoader>,
    tx: &mpsc::Sender<BackgroundEvent>,
    source: String,
) {
    app.artifact_scroll = 0;
    let loader = loader.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = loader.load(&source).await;
        if let Err(err) = &result {
            warn!(source = %source, error = %err, "Artifact failed to load");
        }
        let _ = tx.send(BackgroundEvent::Artifact { source, result }).await;
    });
}

/// Execute a `/command` line against the screen state
pub fn apply_command(app: &mut App, line: &str) -> CommandOutcome {
    match parse_command(line) {
        CommandResult::None => {}
        CommandResult::ShowHelp => app.session.notice(HELP),
        CommandResult::ShowChart => {
            let current = app.session.form.chart_type();
            app.session.notice(format!(
                "Chart type: {current} (available: {})",
                ChartType::names()
            ));
        }
        CommandResult::SetChart(chart) => {
            app.session.form.set_chart_type(chart);
            app.status_message = Some(format!("Chart: {chart}"));
        }
        CommandResult::InvalidChart(value) => app.session.notice(format!(
            "Unknown chart type: {value}. Available: {}",
            ChartType::names()
        )),
        CommandResult::Open => {
            if let Some(source) = app.session.open_file_path() {
                return CommandOutcome::LoadArtifact(source);
            }
        }
        CommandResult::Close => app.session.close_artifact(),
        CommandResult::Fullscreen => app.session.toggle_fullscreen(),
        CommandResult::Export(path) => match export::write_document(app.session.log(), &path) {
            Ok(()) => app.status_message = Some(format!("Exported to {}", path.display())),
            Err(err) => app
                .session
                .notice(format!("Failed to export to {}: {err}", path.display())),
        },
        CommandResult::MissingExportPath => app.session.notice("Usage: /export <path>"),
        CommandResult::Exit => return CommandOutcome::Exit,
        CommandResult::Unknown(cmd) => app.session.notice(format!(
            "Unknown command: {cmd}. Type /help for available commands."
        )),
    }
    CommandOutcome::Continue
}

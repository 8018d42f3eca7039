//! Key handling

use super::state::App;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sqlviz_core::artifact::DisplayMode;
use sqlviz_core::domain::ChartType;
use std::path::PathBuf;

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    /// Submit the current prompt
    Submit,
    Exit,
    /// Execute a client command
    Command(String),
    /// Activate the file-path label
    OpenArtifact,
    CloseArtifact,
    ToggleFullscreen,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
}

/// Handle a terminal event and update the form. Input stays live while a
/// request is in flight.
pub fn handle_input(app: &mut App, event: Event) -> InputAction {
    match event {
        Event::Key(key) => handle_key(app, key),
        _ => InputAction::None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    let form = &mut app.session.form;
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') => InputAction::Exit,
            KeyCode::Char('c') => {
                form.clear();
                InputAction::None
            }
            KeyCode::Char('o') => InputAction::OpenArtifact,
            KeyCode::Char('x') => InputAction::CloseArtifact,
            KeyCode::Char('f') => InputAction::ToggleFullscreen,
            KeyCode::Char('u') => InputAction::ScrollTop,
            KeyCode::Char('d') => InputAction::ScrollBottom,
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Enter => {
            if form.is_command() {
                InputAction::Command(form.take_input())
            } else {
                InputAction::Submit
            }
        }
        KeyCode::Esc => {
            form.clear();
            InputAction::None
        }
        KeyCode::Tab => {
            form.next_chart_type();
            InputAction::None
        }
        KeyCode::BackTab => {
            form.previous_chart_type();
            InputAction::None
        }
        KeyCode::Backspace => {
            form.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            form.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            form.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            form.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            form.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            form.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => scroll(app, true),
        KeyCode::Down | KeyCode::PageDown => scroll(app, false),
        KeyCode::Char(c) => {
            form.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// In fullscreen the arrows scroll the artifact preview; otherwise the chat.
fn scroll(app: &mut App, up: bool) -> InputAction {
    if app.session.artifact().mode() == DisplayMode::Fullscreen {
        if up {
            app.scroll_artifact_up();
        } else {
            app.scroll_artifact_down();
        }
        return InputAction::None;
    }
    if up {
        InputAction::ScrollUp
    } else {
        InputAction::ScrollDown
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    None,
    ShowHelp,
    SetChart(ChartType),
    InvalidChart(String),
    ShowChart,
    Open,
    Close,
    Fullscreen,
    Export(PathBuf),
    MissingExportPath,
    Exit,
    Unknown(String),
}

/// Parse a `/command` line
pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim().trim_start_matches('/');
    let mut parts = cmd.split_whitespace();
    let name = parts.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    match name.as_str() {
        "" => CommandResult::None,
        "help" | "?" => CommandResult::ShowHelp,
        "chart" => match args.first() {
            None => CommandResult::ShowChart,
            Some(value) => value
                .parse::<ChartType>()
                .map_or_else(|_| CommandResult::InvalidChart((*value).to_string()), CommandResult::SetChart),
        },
        "open" => CommandResult::Open,
        "close" => CommandResult::Close,
        "fullscreen" | "resize" => CommandResult::Fullscreen,
        "export" => {
            if args.is_empty() {
                CommandResult::MissingExportPath
            } else {
                CommandResult::Export(PathBuf::from(args.join(" ")))
            }
        }
        "exit" | "quit" => CommandResult::Exit,
        _ => CommandResult::Unknown(name),
    }
}

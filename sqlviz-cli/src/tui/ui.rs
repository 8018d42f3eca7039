//! Screen rendering
//!
//! Layout is derived from [`Visibility`] on every frame; nothing here keeps
//! its own notion of what is shown.

use super::markdown::message_lines;
use super::state::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use sqlviz_core::artifact::FrameDocument;
use sqlviz_core::session::{ResponsePanel, Visibility};

pub struct ChatUi;

impl ChatUi {
    pub fn render(frame: &mut Frame, app: &mut App) {
        let visibility = Visibility::derive(&app.session);
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Min(6),    // Body
                Constraint::Length(3), // Prompt
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], app);

        if visibility.fullscreen {
            Self::render_artifact(frame, chunks[1], app, &visibility);
        } else {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[1]);
            Self::render_conversation(frame, body[0], app, &visibility);
            Self::render_artifact(frame, body[1], app, &visibility);
        }

        Self::render_input(frame, chunks[2], app);
        Self::render_help_bar(frame, chunks[3], app);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
        let loading = if app.session.is_loading() {
            Span::styled(
                format!(" {} ", app.spinner()),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::raw("")
        };
        let note = app
            .status_message
            .as_ref()
            .map(|s| Span::styled(format!(" │ {s} "), Style::default().fg(Color::DarkGray)))
            .unwrap_or_else(|| Span::raw(""));

        let line = Line::from(vec![
            Span::styled(" 📊 sqlviz ", Style::default().fg(Color::Cyan)),
            Span::styled("│ ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.endpoint.clone(), Style::default().fg(Color::Magenta)),
            loading,
            note,
        ]);
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_conversation(frame: &mut Frame, area: Rect, app: &mut App, visibility: &Visibility) {
        if visibility.response_panel {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(4)])
                .split(area);
            Self::render_messages(frame, split[0], app);
            Self::render_response(frame, split[1], app, visibility);
        } else {
            Self::render_messages(frame, area, app);
        }
    }

    fn render_messages(frame: &mut Frame, area: Rect, app: &mut App) {
        let mut lines: Vec<Line> = Vec::new();
        for message in app.session.log().messages() {
            lines.extend(message_lines(message));
            lines.push(Line::from(""));
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        let max_scroll = scroll_limit(&para, area);
        app.chat_max_scroll = max_scroll;
        let scroll = app.session.log().scroll().resolve(max_scroll);

        let block = Block::default()
            .title(" Chat ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para.block(block).scroll((scroll, 0)), area);
    }

    fn render_response(frame: &mut Frame, area: Rect, app: &App, visibility: &Visibility) {
        let lines = match app.session.panel() {
            ResponsePanel::Showing(summary) => {
                let status_style = if summary.is_error {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                };
                let file_style = if visibility.file_path_clickable {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let mut file_line = vec![
                    Span::raw("File:   "),
                    Span::styled(summary.file_label.clone(), file_style),
                ];
                if visibility.file_path_clickable {
                    file_line.push(Span::styled("  (Ctrl+O)", Style::default().fg(Color::DarkGray)));
                }
                vec![
                    Line::from(vec![
                        Span::raw("Status: "),
                        Span::styled(summary.status.clone(), status_style),
                    ]),
                    Line::from(file_line),
                ]
            }
            _ => vec![Line::from(Span::styled(
                format!("{} Analysing...", app.spinner()),
                Style::default().fg(Color::Yellow),
            ))],
        };

        let block = Block::default()
            .title(" Response ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_artifact(frame: &mut Frame, area: Rect, app: &mut App, visibility: &Visibility) {
        let title = format!(" Artifact {} ", visibility.resize_icon.glyph());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(if visibility.artifact_content {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });

        if visibility.artifact_placeholder {
            let para = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Charts appear here after an analysis.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            app.artifact_max_scroll = 0;
            frame.render_widget(para, area);
            return;
        }

        let artifact = app.session.artifact();
        let mut lines: Vec<Line> = vec![Line::from(vec![
            Span::styled("Source: ", Style::default().fg(Color::DarkGray)),
            Span::raw(artifact.source().unwrap_or_default().to_string()),
        ])];
        match artifact.document() {
            FrameDocument::Blank => {}
            FrameDocument::Loading => lines.push(Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::Yellow),
            ))),
            FrameDocument::Failed(reason) => lines.push(Line::from(Span::styled(
                reason.clone(),
                Style::default().fg(Color::Red),
            ))),
            FrameDocument::Loaded(document) => {
                if let Some(title) = document.title() {
                    lines.push(Line::from(Span::styled(
                        title.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                }
                lines.push(Line::from(""));
                lines.extend(document.text.lines().map(|l| Line::from(l.to_string())));
                if document.truncated {
                    lines.push(Line::from(Span::styled(
                        format!("… preview truncated ({} bytes total)", document.total_bytes),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        let max_scroll = scroll_limit(&para, area);
        app.artifact_max_scroll = max_scroll;
        app.artifact_scroll = app.artifact_scroll.min(max_scroll);

        frame.render_widget(para.block(block).scroll((app.artifact_scroll, 0)), area);
    }

    fn render_input(frame: &mut Frame, area: Rect, app: &App) {
        let form = &app.session.form;
        let display_input = if form.input().is_empty() {
            Span::styled("Describe the data you want to see...", Style::default().fg(Color::DarkGray))
        } else {
            let mut chars: Vec<char> = form.input().chars().collect();
            if form.cursor() >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(form.cursor(), '|');
            }
            Span::styled(chars.into_iter().collect::<String>(), Style::default().fg(Color::White))
        };

        let input_line = Line::from(vec![
            Span::styled(
                "> ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            display_input,
        ]);
        let title = if form.is_command() {
            " Command ".to_string()
        } else {
            format!(" SQL Prompt │ Chart: {} ", form.chart_type())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);
        frame.render_widget(Paragraph::new(input_line).block(block), area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, app: &App) {
        let key = |label: &'static str| Span::styled(label, Style::default().fg(Color::Green));
        let mut spans = vec![
            key(" Enter"),
            Span::raw(": Send │ "),
            key("Tab"),
            Span::raw(": Chart │ "),
            key("Ctrl+O/X"),
            Span::raw(": Open/Close │ "),
            key("Ctrl+F"),
            Span::raw(": Fullscreen │ "),
            key("/help"),
            Span::raw(" │ "),
            Span::styled("Ctrl+Q", Style::default().fg(Color::Red)),
            Span::raw(": Exit "),
        ];
        if app.session.is_loading() {
            spans.insert(0, Span::styled(" Processing... ", Style::default().fg(Color::Yellow)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Largest scroll offset for a wrapped paragraph drawn inside a bordered
/// block covering `area`. Counts rendered rows, not source lines.
fn scroll_limit(para: &Paragraph, area: Rect) -> u16 {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2) as usize;
    let rows = para.line_count(inner_width);
    u16::try_from(rows.saturating_sub(inner_height)).unwrap_or(u16::MAX)
}

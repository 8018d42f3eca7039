//! Chat messages as styled terminal lines

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use sqlviz_core::domain::{ChatMessage, MessageRole};
use sqlviz_core::markdown::{Inline, Token, message_tokens};

/// Render one message, prefixing the first line with the speaker and
/// indenting the rest under it.
pub fn message_lines(message: &ChatMessage) -> Vec<Line<'static>> {
    let (prefix, prefix_style) = match message.role() {
        MessageRole::User => (
            "You: ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        MessageRole::System => (
            "System: ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ),
    };
    let indent = " ".repeat(prefix.len());

    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for token in message_tokens(message) {
        match token {
            Token::Heading { level, spans } => {
                let style = heading_style(level);
                current.extend(spans.iter().map(|span| inline_span(span, style)));
            }
            Token::ListItem(spans) => {
                current.push(Span::styled("• ", Style::default().fg(Color::Green)));
                current.extend(spans.iter().map(|span| inline_span(span, Style::default())));
            }
            Token::Line(spans) => {
                current.extend(spans.iter().map(|span| inline_span(span, Style::default())));
            }
            Token::LineBreak => lines.push(std::mem::take(&mut current)),
        }
    }
    lines.push(current);

    lines
        .into_iter()
        .enumerate()
        .map(|(index, mut spans)| {
            let lead = if index == 0 {
                Span::styled(prefix, prefix_style)
            } else {
                Span::raw(indent.clone())
            };
            spans.insert(0, lead);
            Line::from(spans)
        })
        .collect()
}

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Magenta,
        2 => Color::Cyan,
        _ => Color::Green,
    };
    Style::default()
        .fg(color)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

fn inline_span(span: &Inline, base: Style) -> Span<'static> {
    match span {
        Inline::Text(text) => Span::styled(text.clone(), base),
        Inline::Bold(text) => Span::styled(text.clone(), base.add_modifier(Modifier::BOLD)),
        Inline::Italic(text) => Span::styled(text.clone(), base.add_modifier(Modifier::ITALIC)),
    }
}

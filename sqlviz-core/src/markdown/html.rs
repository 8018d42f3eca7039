//! HTML rendering for markdown tokens

use super::token::{Inline, Token, plain, tokenize};
use crate::domain::ChatMessage;

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render tokens as an HTML fragment. List items are emitted without a list
/// container.
pub fn render_html(tokens: &[Token]) -> String {
    let mut html = String::new();
    for token in tokens {
        match token {
            Token::Heading { level, spans } => {
                html.push_str(&format!("<h{level}>"));
                push_spans(&mut html, spans);
                html.push_str(&format!("</h{level}>"));
            }
            Token::ListItem(spans) => {
                html.push_str("<li>");
                push_spans(&mut html, spans);
                html.push_str("</li>");
            }
            Token::Line(spans) => push_spans(&mut html, spans),
            Token::LineBreak => html.push_str("<br>"),
        }
    }
    html
}

fn push_spans(html: &mut String, spans: &[Inline]) {
    for span in spans {
        match span {
            Inline::Text(text) => html.push_str(&escape_html(text)),
            Inline::Bold(text) => {
                html.push_str("<strong>");
                html.push_str(&escape_html(text));
                html.push_str("</strong>");
            }
            Inline::Italic(text) => {
                html.push_str("<em>");
                html.push_str(&escape_html(text));
                html.push_str("</em>");
            }
        }
    }
}

pub fn markdown_to_html(source: &str) -> String {
    render_html(&tokenize(source))
}

pub fn plain_to_html(source: &str) -> String {
    render_html(&plain(source))
}

/// HTML body for a chat message, applying markdown only where the message
/// qualifies for it.
pub fn render_message_html(message: &ChatMessage) -> String {
    render_html(&super::message_tokens(message))
}

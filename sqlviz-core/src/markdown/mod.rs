//! Constrained markdown for chat messages
//!
//! Text is parsed once into [`Token`]s and then rendered, either to HTML
//! ([`html`]) or by a front end walking the tokens itself. The supported subset
//! is headings up to level 3, `**bold**`, `*italic*`, `- ` list items and line
//! breaks. Nothing nests.

mod html;
mod token;

pub use html::{escape_html, markdown_to_html, plain_to_html, render_html, render_message_html};
pub use token::{Inline, Token, plain, tokenize};

use crate::domain::ChatMessage;

/// Tokens for a chat message: full markdown for system messages containing a
/// `#`, line breaks only for everything else.
pub fn message_tokens(message: &ChatMessage) -> Vec<Token> {
    if message.is_markdown() {
        tokenize(message.content())
    } else {
        plain(message.content())
    }
}

//! Chat messages and the append-only log that holds them.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    System,
}

impl MessageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::System => "system",
        }
    }
}

/// A single chat log entry. Fields are private so a message cannot change
/// once it has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: MessageRole,
    content: String,
    created_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Local::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Whether the markdown renderer applies to this message.
    ///
    /// Only system messages that contain a `#` anywhere are formatted; every
    /// other message only gets its newlines turned into line breaks.
    pub fn is_markdown(&self) -> bool {
        self.role == MessageRole::System && self.content.contains('#')
    }
}

/// Ordered, append-only message history.
///
/// There is no way to edit or remove a message. The log is pinned to its
/// bottom after every append; a front end may scroll away until the next one.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    scroll: Scroll,
}

/// Scroll position of the log, resolved against the content height at render
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scroll {
    #[default]
    Bottom,
    Offset(u16),
}

impl Scroll {
    /// Resolve against the largest valid offset for the current content.
    pub fn resolve(self, max_offset: u16) -> u16 {
        match self {
            Scroll::Bottom => max_offset,
            Scroll::Offset(offset) => offset.min(max_offset),
        }
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.scroll = Scroll::Bottom;
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatMessage::user(content));
    }

    pub fn push_system(&mut self, content: impl Into<String>) {
        self.push(ChatMessage::system(content));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn scroll(&self) -> Scroll {
        self.scroll
    }

    /// Scroll one line towards the top. `max_offset` is the bottom position for
    /// the content as last rendered.
    pub fn scroll_up(&mut self, max_offset: u16) {
        let current = self.scroll.resolve(max_offset);
        self.scroll = Scroll::Offset(current.saturating_sub(1));
    }

    pub fn scroll_down(&mut self, max_offset: u16) {
        let current = self.scroll.resolve(max_offset);
        self.scroll = if current.saturating_add(1) >= max_offset {
            Scroll::Bottom
        } else {
            Scroll::Offset(current + 1)
        };
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = Scroll::Offset(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = Scroll::Bottom;
    }
}

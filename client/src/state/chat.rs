//! Chat transcript state for the prompt panel.
//!
//! Messages are append-only and never mutated after creation; ids come from
//! uuid v4 so the uniqueness invariant holds without coordination.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::util::time::now_ms;

/// State for the chat transcript.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::welcome()],
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Collision-resistant unique id (uuid v4).
    pub id: String,
    pub content: String,
    pub is_user: bool,
    /// Milliseconds since the Unix epoch; zero outside the browser.
    pub timestamp: f64,
}

impl ChatMessage {
    /// Seeded greeting shown before any prompt.
    #[must_use]
    pub fn welcome() -> Self {
        Self::bot("Hello! I'm your component generator. What would you like me to create for you?")
    }

    /// New user-authored entry.
    #[must_use]
    pub fn user(content: &str) -> Self {
        Self::new(content, true)
    }

    /// New generator-authored entry.
    #[must_use]
    pub fn bot(content: &str) -> Self {
        Self::new(content, false)
    }

    fn new(content: &str, is_user: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.to_owned(),
            is_user,
            timestamp: now_ms(),
        }
    }
}

//! Chat transcript types.
//!
//! The transcript is what the chat widget shows: an append-only list of
//! user and bot messages. The backend keeps its own authoritative history
//! as `(user, bot)` pairs which can replace the visible transcript.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// A single bubble in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// One exchange of the server-side history.
///
/// Serialized on the wire as a two-element array `[user_text, bot_text]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn(pub String, pub String);

impl HistoryTurn {
    pub fn user_text(&self) -> &str {
        &self.0
    }

    pub fn bot_text(&self) -> &str {
        &self.1
    }
}

/// Ordered server-side chat history.
pub type ChatHistory = Vec<HistoryTurn>;

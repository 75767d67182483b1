//! The chat widget's transcript.

use pathwise_types::chat::{ChatHistory, ChatMessage};

/// Append-only list of chat bubbles, replaceable wholesale by history replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Rebuild the transcript from server history.
    ///
    /// Each turn becomes a user bubble followed by a bot bubble, in order.
    /// Returns the new contents.
    pub fn replay(&mut self, history: &ChatHistory) -> &[ChatMessage] {
        self.messages = history
            .iter()
            .flat_map(|turn| {
                [
                    ChatMessage::user(turn.user_text()),
                    ChatMessage::bot(turn.bot_text()),
                ]
            })
            .collect();
        &self.messages
    }
}

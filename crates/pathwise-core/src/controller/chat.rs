//! The chat widget: send, clear and save.

use pathwise_types::api::ChatRequest;
use pathwise_types::chat::{ChatHistory, ChatMessage};
use pathwise_types::error::BackendError;
use pathwise_types::ui::{MessageSlot, UiEffect};
use tracing::{debug, warn};

use super::{Controller, NETWORK_ERROR};
use crate::backend::Backend;

pub const CHAT_CLEARED: &str = "Chat cleared!";
pub const CLEAR_FAILED: &str = "Error clearing chat";
pub const SAVE_FAILED: &str = "Error saving chat";
pub const LOGIN_TO_SAVE: &str = "Please login to save chats";

impl<B: Backend> Controller<B> {
    /// Send one chat message.
    ///
    /// Blank input is ignored entirely. Otherwise the user bubble appears
    /// before the request is sent and a bot bubble follows with the reply,
    /// the server's error text, or a network error. The loading indicator
    /// is always switched off at the end.
    pub async fn send_message(&mut self, text: &str) -> Vec<UiEffect> {
        let message = text.trim();
        if message.is_empty() {
            return Vec::new();
        }

        let mut fx = self.effects();
        let user = ChatMessage::user(message);
        self.transcript.push(user.clone());
        fx.push(UiEffect::AppendChat(user));
        fx.push(UiEffect::ClearChatInput);
        fx.push(UiEffect::SetLoading(true));

        debug!(session_id = %self.session.session_id(), "Sending chat message");
        let reply = match self
            .backend
            .chat(self.session.session_id(), &ChatRequest { message })
            .await
        {
            Ok(response) => response.response,
            Err(BackendError::Rejected { status, detail }) => {
                warn!(status, "Chat message rejected by backend");
                detail
            }
            Err(err) => {
                warn!(error = %err, "Chat request failed");
                NETWORK_ERROR.to_string()
            }
        };

        let bot = ChatMessage::bot(reply);
        self.transcript.push(bot.clone());
        fx.push(UiEffect::AppendChat(bot));
        fx.push(UiEffect::SetLoading(false));
        fx.finish()
    }

    /// Ask the backend to drop this session's history.
    ///
    /// The visible transcript is only cleared once the backend agrees.
    pub async fn clear_chat(&mut self) -> Vec<UiEffect> {
        let mut fx = self.effects();
        match self.backend.clear_chat(self.session.session_id()).await {
            Ok(()) => {
                self.transcript.clear();
                fx.push(UiEffect::ClearTranscript);
                fx.success(MessageSlot::ChatActions, CHAT_CLEARED);
            }
            Err(BackendError::Rejected { status, detail }) => {
                warn!(status, "Clear chat rejected by backend");
                fx.error(MessageSlot::ChatActions, detail);
            }
            Err(err) => {
                warn!(error = %err, "Clear chat request failed");
                fx.error(MessageSlot::ChatActions, CLEAR_FAILED);
            }
        }
        fx.finish()
    }

    /// Save the current conversation under the logged-in user.
    pub async fn save_chat(&self) -> Vec<UiEffect> {
        let mut fx = self.effects();
        let Some(username) = self.session.current_user() else {
            fx.error(MessageSlot::ChatActions, LOGIN_TO_SAVE);
            return fx.finish();
        };

        match self
            .backend
            .save_chat(self.session.session_id(), username)
            .await
        {
            Ok(response) => fx.success(MessageSlot::ChatActions, response.message),
            Err(BackendError::Rejected { detail, .. }) => {
                fx.error(MessageSlot::ChatActions, detail);
            }
            Err(err) => {
                warn!(error = %err, "Save chat request failed");
                fx.error(MessageSlot::ChatActions, SAVE_FAILED);
            }
        }
        fx.finish()
    }

    /// Replace the transcript with the backend's history.
    pub fn replay_history(&mut self, history: &ChatHistory) -> Vec<UiEffect> {
        let messages = self.transcript.replay(history).to_vec();
        vec![UiEffect::ReplaceTranscript(messages)]
    }
}

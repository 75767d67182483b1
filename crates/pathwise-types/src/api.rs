//! Request and response bodies of the backend HTTP API.
//!
//! Request bodies borrow from the caller so that passwords only leave their
//! secret wrapper for the duration of serialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chat::ChatHistory;

pub const SESSION_ID_HEADER: &str = "session-id";
pub const USERNAME_HEADER: &str = "username";

#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub full_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ContactRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

/// Generic `{message}` success body.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub session_id: String,
    pub message: String,
    /// Saved chats as `"{timestamp} - {title}"` lines.
    #[serde(default)]
    pub chat_history: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Success body of the assessment endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub updated_history: bool,
    #[serde(default)]
    pub history: Option<ChatHistory>,
}

impl ServiceResponse {
    /// The history to replay, if the backend flagged it as updated.
    pub fn replay_history(&self) -> Option<&ChatHistory> {
        if self.updated_history {
            self.history.as_ref()
        } else {
            None
        }
    }
}

/// Body of a non-2xx response.
///
/// `detail` is usually a string, but request validation failures carry a
/// list of problems instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Text to show the user: a string `detail` verbatim, any other
    /// `detail` as JSON, otherwise `message`.
    pub fn text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(detail)) => Some(detail.clone()),
            Some(Value::Null) | None => self.message.clone(),
            Some(other) => Some(other.to_string()),
        }
    }
}

//! UI effects emitted by the controller.
//!
//! The controller never touches a screen. Each operation returns a list of
//! [`UiEffect`]s and a rendering adapter applies them in order.

use serde::Serialize;

use std::time::Duration;

use crate::chat::ChatMessage;
use crate::password::StrengthLevel;
use crate::service::{ServiceKind, ServicePanel, SubmitState};

/// A modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialog {
    Login,
    Signup,
    ForgotPassword,
    Service(ServicePanel),
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Login => "Login",
            Dialog::Signup => "Sign Up",
            Dialog::ForgotPassword => "Forgot Password",
            Dialog::Service(panel) => panel.title(),
        }
    }
}

/// Where an inline message is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSlot {
    Login,
    Signup,
    ForgotPassword,
    /// Shared by the chat save and clear controls.
    ChatActions,
    Service(ServiceKind),
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// One instruction for the rendering adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", content = "data", rename_all = "snake_case")]
pub enum UiEffect {
    ShowMessage {
        slot: MessageSlot,
        text: String,
        severity: Severity,
    },
    ClearMessage(MessageSlot),
    OpenDialog(Dialog),
    CloseDialog(Dialog),
    AppendChat(ChatMessage),
    ClearTranscript,
    /// Discard the transcript and show these entries instead.
    ReplaceTranscript(Vec<ChatMessage>),
    ClearChatInput,
    SetLoading(bool),
    SetSubmitState {
        kind: ServiceKind,
        state: SubmitState,
    },
    SetOutput {
        kind: ServiceKind,
        text: String,
    },
    /// `Some(username)` when logged in, `None` for the login/signup buttons.
    SetAuthDisplay(Option<String>),
    /// Saved chats returned by the backend on login.
    ShowSavedChats(Vec<String>),
    /// `None` resets the indicator.
    PasswordStrength(Option<StrengthLevel>),
    /// Blocking confirmation the user has to dismiss.
    Acknowledge(String),
    /// Apply `effects` once `delay_ms` has elapsed.
    Delayed {
        delay_ms: u64,
        effects: Vec<UiEffect>,
    },
}

impl UiEffect {
    pub fn delayed(delay: Duration, effects: Vec<UiEffect>) -> Self {
        UiEffect::Delayed {
            delay_ms: delay.as_millis() as u64,
            effects,
        }
    }
}

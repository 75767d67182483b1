//! The client session and form controller.
//!
//! [`Controller`] ties the session, the transcript and a [`Backend`]
//! together. Every user-facing operation runs local validation, calls the
//! backend at most once, updates session/transcript state and returns the
//! [`UiEffect`]s a renderer should apply. Nothing here draws anything.
//!
//! Operations are split by concern:
//! - `auth`: signup, login, logout, forgot password, strength indicator
//! - `chat`: send, clear, save
//! - `service`: the five assessment forms
//! - `contact`: the contact form

pub mod auth;
pub mod chat;
pub mod contact;
pub mod service;

#[cfg(test)]
pub(crate) mod mock;

use std::time::Duration;

use pathwise_types::config::TimingConfig;
use pathwise_types::session::Session;
use pathwise_types::ui::{Dialog, MessageSlot, Severity, UiEffect};

use crate::backend::Backend;
use crate::session::SessionManager;
use crate::transcript::Transcript;

pub use auth::{LoginForm, SignupForm};
pub use contact::ContactForm;

/// Shown when a request fails without a usable response.
pub const NETWORK_ERROR: &str = "Network error occurred";

/// Drives every form and the chat widget against one backend.
pub struct Controller<B: Backend> {
    backend: B,
    session: SessionManager,
    transcript: Transcript,
    timing: TimingConfig,
}

impl<B: Backend> Controller<B> {
    /// Create a controller in the anonymous state with an empty transcript.
    pub fn new(backend: B, timing: TimingConfig) -> Self {
        Self {
            backend,
            session: SessionManager::new(),
            transcript: Transcript::new(),
            timing,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn session(&self) -> &Session {
        self.session.session()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn open_dialog(&self, dialog: Dialog) -> Vec<UiEffect> {
        vec![UiEffect::OpenDialog(dialog)]
    }

    pub fn close_dialog(&self, dialog: Dialog) -> Vec<UiEffect> {
        vec![UiEffect::CloseDialog(dialog)]
    }

    fn effects(&self) -> Effects {
        Effects::new(self.timing.message_clear())
    }
}

/// Accumulates the effects of one operation.
///
/// Inline messages are always followed by their delayed clear.
pub(crate) struct Effects {
    effects: Vec<UiEffect>,
    message_clear: Duration,
}

impl Effects {
    fn new(message_clear: Duration) -> Self {
        Self {
            effects: Vec::new(),
            message_clear,
        }
    }

    fn push(&mut self, effect: UiEffect) {
        self.effects.push(effect);
    }

    fn message(&mut self, slot: MessageSlot, text: impl Into<String>, severity: Severity) {
        self.effects.push(UiEffect::ShowMessage {
            slot,
            text: text.into(),
            severity,
        });
        self.effects.push(UiEffect::delayed(
            self.message_clear,
            vec![UiEffect::ClearMessage(slot)],
        ));
    }

    fn success(&mut self, slot: MessageSlot, text: impl Into<String>) {
        self.message(slot, text, Severity::Success);
    }

    fn error(&mut self, slot: MessageSlot, text: impl Into<String>) {
        self.message(slot, text, Severity::Error);
    }

    fn finish(self) -> Vec<UiEffect> {
        self.effects
    }
}

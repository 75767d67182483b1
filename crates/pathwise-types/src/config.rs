//! Client configuration types for Pathwise.
//!
//! `ClientConfig` represents the `config.toml` in the data directory. Every
//! field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use std::time::Duration;

/// Top-level client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin of the backend API, without a trailing `/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Unset means requests may wait forever.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub timing: TimingConfig,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            timing: TimingConfig::default(),
        }
    }
}

/// Fixed UI delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long an inline message stays visible.
    #[serde(default = "default_message_clear_ms")]
    pub message_clear_ms: u64,

    /// Delay between a successful signup and switching to the login dialog.
    #[serde(default = "default_signup_redirect_ms")]
    pub signup_redirect_ms: u64,

    #[serde(default = "default_login_close_ms")]
    pub login_close_ms: u64,

    #[serde(default = "default_forgot_close_ms")]
    pub forgot_close_ms: u64,
}

fn default_message_clear_ms() -> u64 {
    5_000
}

fn default_signup_redirect_ms() -> u64 {
    1_500
}

fn default_login_close_ms() -> u64 {
    1_500
}

fn default_forgot_close_ms() -> u64 {
    2_000
}

impl TimingConfig {
    pub fn message_clear(&self) -> Duration {
        Duration::from_millis(self.message_clear_ms)
    }

    pub fn signup_redirect(&self) -> Duration {
        Duration::from_millis(self.signup_redirect_ms)
    }

    pub fn login_close(&self) -> Duration {
        Duration::from_millis(self.login_close_ms)
    }

    pub fn forgot_close(&self) -> Duration {
        Duration::from_millis(self.forgot_close_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            message_clear_ms: default_message_clear_ms(),
            signup_redirect_ms: default_signup_redirect_ms(),
            login_close_ms: default_login_close_ms(),
            forgot_close_ms: default_forgot_close_ms(),
        }
    }
}

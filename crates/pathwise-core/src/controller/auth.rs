//! Signup, login, logout and password recovery.
//!
//! State machine: `anonymous` (guest session) -> `authenticated` on a
//! successful login -> `anonymous` on logout. Signup and password recovery
//! never touch the session.

use pathwise_types::api::{ForgotPasswordRequest, LoginRequest, SignupRequest};
use pathwise_types::error::{BackendError, ValidationError};
use pathwise_types::ui::{Dialog, MessageSlot, UiEffect};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

use super::{Controller, NETWORK_ERROR};
use crate::backend::Backend;
use crate::validate::{validate_email, validate_name, validate_password, validate_username};

pub const LOGGED_OUT: &str = "Logged out successfully";

/// Inputs of the signup dialog.
#[derive(Debug)]
pub struct SignupForm {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Inputs of the login dialog.
#[derive(Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: SecretString,
}

/// Run the signup checks in their fixed order, stopping at the first failure.
pub fn check_signup(form: &SignupForm) -> Result<(), ValidationError> {
    if !validate_name(&form.full_name) {
        return Err(ValidationError::InvalidName);
    }
    if !validate_username(&form.username) {
        return Err(ValidationError::UsernameTooShort);
    }
    if !validate_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    let strength = validate_password(form.password.expose_secret());
    if !strength.min_length {
        return Err(ValidationError::PasswordTooShort);
    }
    if strength.score < 3 {
        return Err(ValidationError::PasswordTooWeak);
    }

    if form.password.expose_secret() != form.confirm_password.expose_secret() {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn check_login(form: &LoginForm) -> Result<(), ValidationError> {
    if form.username.is_empty() || form.password.expose_secret().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// The strength indicator for the current password input.
///
/// An empty password resets the indicator.
pub fn password_strength_effect(password: &str) -> UiEffect {
    if password.is_empty() {
        UiEffect::PasswordStrength(None)
    } else {
        UiEffect::PasswordStrength(Some(validate_password(password).level()))
    }
}

impl<B: Backend> Controller<B> {
    /// Register a new account.
    ///
    /// On success the signup dialog hands over to the login dialog after
    /// the configured redirect delay.
    pub async fn signup(&self, form: &SignupForm) -> Vec<UiEffect> {
        let mut fx = self.effects();
        if let Err(err) = check_signup(form) {
            debug!(error = %err, "Signup rejected locally");
            fx.error(MessageSlot::Signup, err.to_string());
            return fx.finish();
        }

        let request = SignupRequest {
            username: &form.username,
            email: &form.email,
            password: form.password.expose_secret(),
            confirm_password: form.confirm_password.expose_secret(),
            full_name: &form.full_name,
        };

        match self.backend.signup(&request).await {
            Ok(response) => {
                info!(username = %form.username, "Account created");
                fx.success(MessageSlot::Signup, response.message);
                fx.push(UiEffect::delayed(
                    self.timing.signup_redirect(),
                    vec![
                        UiEffect::CloseDialog(Dialog::Signup),
                        UiEffect::OpenDialog(Dialog::Login),
                    ],
                ));
            }
            Err(BackendError::Rejected { status, detail }) => {
                warn!(status, "Signup rejected by backend");
                fx.error(MessageSlot::Signup, detail);
            }
            Err(err) => {
                warn!(error = %err, "Signup request failed");
                fx.error(MessageSlot::Signup, NETWORK_ERROR);
            }
        }
        fx.finish()
    }

    /// Log in and adopt the server-issued session identifier.
    ///
    /// The session is only written on success.
    pub async fn login(&mut self, form: &LoginForm) -> Vec<UiEffect> {
        let mut fx = self.effects();
        if let Err(err) = check_login(form) {
            fx.error(MessageSlot::Login, err.to_string());
            return fx.finish();
        }

        let request = LoginRequest {
            username: &form.username,
            password: form.password.expose_secret(),
        };

        match self.backend.login(&request).await {
            Ok(response) => {
                self.session
                    .authenticate(response.session_id, form.username.clone());
                fx.success(MessageSlot::Login, response.message);
                fx.push(UiEffect::SetAuthDisplay(Some(form.username.clone())));
                if !response.chat_history.is_empty() {
                    fx.push(UiEffect::ShowSavedChats(response.chat_history));
                }
                fx.push(UiEffect::delayed(
                    self.timing.login_close(),
                    vec![UiEffect::CloseDialog(Dialog::Login)],
                ));
            }
            Err(BackendError::Rejected { status, detail }) => {
                warn!(status, "Login rejected by backend");
                fx.error(MessageSlot::Login, detail);
            }
            Err(err) => {
                warn!(error = %err, "Login request failed");
                fx.error(MessageSlot::Login, NETWORK_ERROR);
            }
        }
        fx.finish()
    }

    /// Return to the guest session and empty the transcript.
    ///
    /// Purely local: the backend is not told.
    pub fn logout(&mut self) -> Vec<UiEffect> {
        self.session.reset();
        self.transcript.clear();
        vec![
            UiEffect::SetAuthDisplay(None),
            UiEffect::ClearTranscript,
            UiEffect::Acknowledge(LOGGED_OUT.to_string()),
        ]
    }

    /// Ask the backend to send password reset instructions.
    pub async fn forgot_password(&self, email: &str) -> Vec<UiEffect> {
        let mut fx = self.effects();
        if !validate_email(email) {
            fx.error(
                MessageSlot::ForgotPassword,
                ValidationError::InvalidEmail.to_string(),
            );
            return fx.finish();
        }

        match self
            .backend
            .forgot_password(&ForgotPasswordRequest { email })
            .await
        {
            Ok(response) => {
                fx.success(MessageSlot::ForgotPassword, response.message);
                fx.push(UiEffect::delayed(
                    self.timing.forgot_close(),
                    vec![UiEffect::CloseDialog(Dialog::ForgotPassword)],
                ));
            }
            Err(BackendError::Rejected { detail, .. }) => {
                fx.error(MessageSlot::ForgotPassword, detail);
            }
            Err(err) => {
                warn!(error = %err, "Password reset request failed");
                fx.error(MessageSlot::ForgotPassword, NETWORK_ERROR);
            }
        }
        fx.finish()
    }

    /// Recompute the strength indicator for a password being typed.
    pub fn update_password_strength(&self, password: &str) -> Vec<UiEffect> {
        vec![password_strength_effect(password)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::mock::MockBackend;
    use pathwise_types::config::TimingConfig;
    use pathwise_types::password::StrengthLevel;
    use pathwise_types::session::Session;
    use pathwise_types::ui::Severity;
    use serde_json::json;

    fn signup_form(password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            full_name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: SecretString::from(password.to_string()),
            confirm_password: SecretString::from(confirm.to_string()),
        }
    }

    fn login_form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: SecretString::from(password.to_string()),
        }
    }

    fn first_message(effects: &[UiEffect]) -> Option<(MessageSlot, &str, Severity)> {
        effects.iter().find_map(|e| match e {
            UiEffect::ShowMessage {
                slot,
                text,
                severity,
            } => Some((*slot, text.as_str(), *severity)),
            _ => None,
        })
    }

    #[test]
    fn test_check_signup_order() {
        let mut form = signup_form("short", "different");
        form.full_name = "X".to_string();
        form.username = "ab".to_string();
        form.email = "bad".to_string();
        assert_eq!(check_signup(&form), Err(ValidationError::InvalidName));

        form.full_name = "Xavier".to_string();
        assert_eq!(check_signup(&form), Err(ValidationError::UsernameTooShort));

        form.username = "xav".to_string();
        assert_eq!(check_signup(&form), Err(ValidationError::InvalidEmail));

        form.email = "x@v.io".to_string();
        assert_eq!(check_signup(&form), Err(ValidationError::PasswordTooShort));

        form.password = SecretString::from("abcdefgh".to_string());
        assert_eq!(check_signup(&form), Err(ValidationError::PasswordTooWeak));

        form.password = SecretString::from("Abcdefg1".to_string());
        assert_eq!(check_signup(&form), Err(ValidationError::PasswordMismatch));

        form.confirm_password = SecretString::from("Abcdefg1".to_string());
        assert_eq!(check_signup(&form), Ok(()));
    }

    #[tokio::test]
    async fn test_signup_mismatch_sends_nothing() {
        let controller = Controller::new(
            MockBackend::new().ok("/api/signup", json!({"message": "created"})),
            TimingConfig::default(),
        );
        let effects = controller
            .signup(&signup_form("Abc12345!", "Abc12345?"))
            .await;

        assert_eq!(controller.backend().call_count(), 0);
        assert_eq!(
            first_message(&effects),
            Some((MessageSlot::Signup, "Passwords do not match", Severity::Error))
        );
    }

    #[tokio::test]
    async fn test_signup_success_redirects_to_login() {
        let controller = Controller::new(
            MockBackend::new().ok(
                "/api/signup",
                json!({"message": "Account created successfully! Please login."}),
            ),
            TimingConfig::default(),
        );
        let effects = controller
            .signup(&signup_form("Abc12345!", "Abc12345!"))
            .await;

        let calls = controller.backend().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].body["confirm_password"], "Abc12345!");
        assert_eq!(calls[0].body["full_name"], "Ada Lovelace");

        assert_eq!(
            first_message(&effects).map(|(_, text, sev)| (text, sev)),
            Some(("Account created successfully! Please login.", Severity::Success))
        );
        assert!(effects.contains(&UiEffect::Delayed {
            delay_ms: 1_500,
            effects: vec![
                UiEffect::CloseDialog(Dialog::Signup),
                UiEffect::OpenDialog(Dialog::Login),
            ],
        }));
        assert_eq!(controller.session(), &Session::guest());
    }

    #[tokio::test]
    async fn test_signup_rejected_shows_detail() {
        let controller = Controller::new(
            MockBackend::new().rejected("/api/signup", 400, "Username already exists"),
            TimingConfig::default(),
        );
        let effects = controller
            .signup(&signup_form("Abc12345!", "Abc12345!"))
            .await;
        assert_eq!(
            first_message(&effects),
            Some((MessageSlot::Signup, "Username already exists", Severity::Error))
        );
    }

    #[tokio::test]
    async fn test_signup_transport_failure() {
        let controller = Controller::new(MockBackend::new(), TimingConfig::default());
        let effects = controller
            .signup(&signup_form("Abc12345!", "Abc12345!"))
            .await;
        assert_eq!(
            first_message(&effects).map(|(_, text, _)| text),
            Some(NETWORK_ERROR)
        );
    }

    #[tokio::test]
    async fn test_login_success_adopts_server_session() {
        let mut controller = Controller::new(
            MockBackend::new().ok(
                "/api/login",
                json!({
                    "session_id": "ada_1712345678.123",
                    "message": "Welcome back, ada!",
                    "chat_history": ["2024-04-01 10:00:00 - Career change"]
                }),
            ),
            TimingConfig::default(),
        );
        let effects = controller.login(&login_form("ada", "Abc12345!")).await;

        assert_eq!(
            controller.session(),
            &Session {
                session_id: "ada_1712345678.123".to_string(),
                current_user: Some("ada".to_string()),
            }
        );
        assert!(effects.contains(&UiEffect::SetAuthDisplay(Some("ada".to_string()))));
        assert!(effects.contains(&UiEffect::ShowSavedChats(vec![
            "2024-04-01 10:00:00 - Career change".to_string()
        ])));
        assert!(effects.contains(&UiEffect::Delayed {
            delay_ms: 1_500,
            effects: vec![UiEffect::CloseDialog(Dialog::Login)],
        }));
    }

    #[tokio::test]
    async fn test_login_rejected_keeps_guest() {
        let mut controller = Controller::new(
            MockBackend::new().rejected("/api/login", 400, "Invalid username or password"),
            TimingConfig::default(),
        );
        let effects = controller.login(&login_form("ada", "wrong")).await;

        assert_eq!(controller.session(), &Session::guest());
        assert_eq!(
            first_message(&effects),
            Some((
                MessageSlot::Login,
                "Invalid username or password",
                Severity::Error
            ))
        );
    }

    #[tokio::test]
    async fn test_login_transport_failure_keeps_guest() {
        let mut controller = Controller::new(MockBackend::new(), TimingConfig::default());
        let effects = controller.login(&login_form("ada", "pw")).await;
        assert_eq!(controller.session(), &Session::guest());
        assert_eq!(
            first_message(&effects).map(|(_, text, _)| text),
            Some(NETWORK_ERROR)
        );
    }

    #[tokio::test]
    async fn test_login_empty_credentials_sends_nothing() {
        let mut controller = Controller::new(MockBackend::new(), TimingConfig::default());
        let effects = controller.login(&login_form("", "pw")).await;
        assert_eq!(controller.backend().call_count(), 0);
        assert_eq!(
            first_message(&effects).map(|(_, text, _)| text),
            Some("Please enter username and password")
        );
    }

    #[tokio::test]
    async fn test_logout_resets_everything() {
        let mut controller = Controller::new(
            MockBackend::new()
                .ok("/api/login", json!({"session_id": "tok", "message": "hi"}))
                .ok("/api/chat", json!({"response": "hello"})),
            TimingConfig::default(),
        );
        controller.login(&login_form("ada", "pw")).await;
        controller.send_message("hello").await;
        assert!(!controller.transcript().is_empty());

        let effects = controller.logout();

        assert_eq!(controller.session(), &Session::guest());
        assert!(controller.transcript().is_empty());
        assert_eq!(
            effects,
            vec![
                UiEffect::SetAuthDisplay(None),
                UiEffect::ClearTranscript,
                UiEffect::Acknowledge(LOGGED_OUT.to_string()),
            ]
        );
        // Logout never reaches the backend.
        assert!(
            controller
                .backend()
                .calls()
                .iter()
                .all(|c| c.endpoint != "/api/logout")
        );
    }

    #[test]
    fn test_logout_when_anonymous() {
        let mut controller = Controller::new(MockBackend::new(), TimingConfig::default());
        controller.logout();
        assert_eq!(controller.session(), &Session::guest());
        assert_eq!(controller.backend().call_count(), 0);
    }

    #[tokio::test]
    async fn test_forgot_password_invalid_email() {
        let controller = Controller::new(MockBackend::new(), TimingConfig::default());
        let effects = controller.forgot_password("not-an-email").await;
        assert_eq!(controller.backend().call_count(), 0);
        assert_eq!(
            first_message(&effects),
            Some((
                MessageSlot::ForgotPassword,
                "Please enter a valid email address",
                Severity::Error
            ))
        );
    }

    #[tokio::test]
    async fn test_forgot_password_success_closes_dialog() {
        let controller = Controller::new(
            MockBackend::new().ok(
                "/api/forgot-password",
                json!({"message": "Password reset instructions sent to your email!"}),
            ),
            TimingConfig::default(),
        );
        let effects = controller.forgot_password("ada@example.com").await;
        assert_eq!(controller.backend().calls()[0].body, json!({"email": "ada@example.com"}));
        assert!(effects.contains(&UiEffect::Delayed {
            delay_ms: 2_000,
            effects: vec![UiEffect::CloseDialog(Dialog::ForgotPassword)],
        }));
    }

    #[tokio::test]
    async fn test_forgot_password_rejected() {
        let controller = Controller::new(
            MockBackend::new().rejected("/api/forgot-password", 400, "Email not found"),
            TimingConfig::default(),
        );
        let effects = controller.forgot_password("nobody@example.com").await;
        assert_eq!(
            first_message(&effects).map(|(_, text, _)| text),
            Some("Email not found")
        );
    }

    #[test]
    fn test_password_strength_indicator() {
        assert_eq!(password_strength_effect(""), UiEffect::PasswordStrength(None));
        assert_eq!(
            password_strength_effect("abc"),
            UiEffect::PasswordStrength(Some(StrengthLevel::Weak))
        );
        assert_eq!(
            password_strength_effect("Abcdefg1"),
            UiEffect::PasswordStrength(Some(StrengthLevel::Medium))
        );
        assert_eq!(
            password_strength_effect("Abc12345!"),
            UiEffect::PasswordStrength(Some(StrengthLevel::Strong))
        );
    }
}

//! Session manager for the client's authentication state.
//!
//! Wraps the single [`Session`] the client holds. Only the login and
//! logout transitions mutate it; everything else reads.

use pathwise_types::session::Session;
use tracing::info;

/// Owns the process-wide session.
#[derive(Debug, Default)]
pub struct SessionManager {
    session: Session,
}

impl SessionManager {
    /// Start anonymous, tagged as `"guest"`.
    pub fn new() -> Self {
        Self {
            session: Session::guest(),
        }
    }

    /// Access the underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Identifier attached to every outgoing request.
    pub fn session_id(&self) -> &str {
        &self.session.session_id
    }

    pub fn current_user(&self) -> Option<&str> {
        self.session.current_user.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Adopt a server-issued session identifier for `username`.
    ///
    /// The identifier is stored verbatim.
    pub fn authenticate(&mut self, session_id: String, username: String) {
        info!(user = %username, "Session authenticated");
        self.session = Session {
            session_id,
            current_user: Some(username),
        };
    }

    /// Return to the guest session, whatever the prior state.
    pub fn reset(&mut self) {
        if let Some(user) = &self.session.current_user {
            info!(user = %user, "Session reset");
        }
        self.session = Session::guest();
    }
}

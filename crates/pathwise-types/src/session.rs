//! Client session state.

use serde::{Deserialize, Serialize};

/// Session identifier used before anyone logs in.
pub const GUEST_SESSION_ID: &str = "guest";

/// The client's view of who it is talking to the backend as.
///
/// `session_id` tags every outgoing chat and assessment request.
/// `current_user` is `Some` only after a successful login, and the two
/// fields always change together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub current_user: Option<String>,
}

impl Session {
    /// An anonymous session tagged with the guest identifier.
    pub fn guest() -> Self {
        Self {
            session_id: GUEST_SESSION_ID.to_string(),
            current_user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::guest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_guest() {
        let session = Session::default();
        assert_eq!(session.session_id, "guest");
        assert!(session.current_user.is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_authenticated() {
        let session = Session {
            session_id: "alice_1700000000.0".to_string(),
            current_user: Some("alice".to_string()),
        };
        assert!(session.is_authenticated());
    }
}

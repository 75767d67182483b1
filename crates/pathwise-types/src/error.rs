use thiserror::Error;

/// A form input rejected before any request is sent.
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid full name (letters only, min 2 chars)")]
    InvalidName,

    #[error("Username must be at least 3 characters long")]
    UsernameTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Password is too weak. Include uppercase, lowercase, numbers, and special characters")]
    PasswordTooWeak,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter username and password")]
    MissingCredentials,

    #[error("Please fill all fields")]
    MissingFields,

    /// A required assessment input is empty; carries the form's own message.
    #[error("{0}")]
    MissingInput(&'static str),
}

/// Errors from talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The backend answered with a non-2xx status.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// The request never produced a usable response (unreachable host,
    /// undecodable body).
    #[error("transport error: {0}")]
    Transport(String),
}

impl BackendError {
    pub fn is_transport(&self) -> bool {
        matches!(self, BackendError::Transport(_))
    }
}

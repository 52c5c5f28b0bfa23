//! Auth-specific error types.

/// Result type alias for mapventures-auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while authenticating or persisting a session.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AuthError {
    /// No identity is registered under this email.
    #[error("unknown email '{0}'")]
    UnknownEmail(String),

    /// The email is known but the password does not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The persisted session slot could not be read or written.
    #[error("session storage error: {0}")]
    Storage(#[from] mapventures_core::Error),
}

impl AuthError {
    /// Whether this error was caused by the caller's input (vs. the environment).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AuthError::UnknownEmail(_) | AuthError::InvalidCredentials
        )
    }
}

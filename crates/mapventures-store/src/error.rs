//! Error types for mapventures-store

use thiserror::Error;

/// Result type alias for mapventures-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mapventures-store
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from mapventures-core
    #[error("Core error: {0}")]
    Core(#[from] mapventures_core::Error),

    /// The provider could not complete the request.
    #[error("Provider '{provider}' unavailable: {message}")]
    Unavailable {
        /// Provider name
        provider: String,
        /// What went wrong
        message: String,
    },
}

impl Error {
    /// Creates a new provider-unavailable error.
    pub fn unavailable(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Unavailable {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

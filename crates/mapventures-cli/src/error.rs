//! Error types for mapventures-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for mapventures-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mapventures-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from mapventures-core
    #[error("Core error: {0}")]
    Core(#[from] mapventures_core::Error),

    /// Error from mapventures-store
    #[error("Store error: {0}")]
    Store(#[from] mapventures_store::Error),

    /// A guarded mutation was refused or failed
    #[error(transparent)]
    Guard(#[from] mapventures_guard::Error),

    /// Configuration could not be resolved, read, or written
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Filesystem error touching a configuration file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Email or password rejected
    #[error("Login failed: unknown email or wrong password")]
    LoginFailed,

    /// Command needs a logged-in session
    #[error("Not logged in (run `mapventures login` first)")]
    NotLoggedIn,

    /// No listing with that id
    #[error("No {kind} with id '{id}'")]
    NotFound {
        /// Resource type looked up
        kind: mapventures_core::ResourceType,
        /// Id looked up
        id: String,
    },

    /// `create` was run without a field the new listing needs
    #[error("--{field} is required when creating {kind} listings")]
    MissingField {
        /// Resource type being created
        kind: mapventures_core::ResourceType,
        /// Flag name without dashes
        field: &'static str,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new I/O error for `path`.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

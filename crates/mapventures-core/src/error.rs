//! Error types for mapventures-core

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::resource::ResourceType;

/// Result type alias for mapventures-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared by all MapVentures crates.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error, optionally tied to the file that caused it.
    #[error("I/O error{}: {source}", at_path(.path))]
    Io {
        /// File involved, if known
        path: Option<PathBuf>,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A resource record or draft violates a model invariant.
    #[error("Invalid {kind}: {message}")]
    InvalidResource {
        /// Which resource type was rejected
        kind: ResourceType,
        /// What went wrong
        message: String,
    },

    /// A value could not be parsed (roles, resource types, dates).
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse
        message: String,
    },
}

impl Error {
    /// Creates an I/O error tied to a path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new invalid-resource error.
    pub fn invalid_resource<S: Into<String>>(kind: ResourceType, message: S) -> Self {
        Error::InvalidResource {
            kind,
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }
}

fn at_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

//! Error types for mapventures-guard

use mapventures_auth::Decision;
use mapventures_core::ResourceType;
use thiserror::Error;

/// Result type alias for mapventures-guard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a guarded mutation is refused or fails.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Nobody is logged in.
    #[error("login required")]
    Unauthenticated,

    /// The target listing does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// Resource type that was looked up
        kind: ResourceType,
        /// Id that was looked up
        id: String,
    },

    /// The current identity may not edit the target listing.
    #[error("not allowed to edit {kind} '{id}': {decision}")]
    Denied {
        /// Resource type of the target
        kind: ResourceType,
        /// Id of the target
        id: String,
        /// Rule that denied access
        decision: Decision,
    },

    /// Error from mapventures-store
    #[error("Store error: {0}")]
    Store(#[from] mapventures_store::Error),
}

impl Error {
    /// Whether the error is an access-control refusal (vs. a lookup or provider failure).
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Error::Unauthenticated | Error::Denied { .. })
    }
}

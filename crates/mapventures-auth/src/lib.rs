//! Sessions and ownership-based authorization for MapVentures Hub.
//!
//! Provides:
//! - [`SessionStore`]: The current identity, with login/logout and restore-on-open
//! - [`SessionStorage`]: Trait for the single persisted session slot ([`MemoryStorage`], [`FileStorage`])
//! - [`Directory`]: Known identities and the mock credential check
//! - [`can_edit`] / [`evaluate`]: The pure edit-permission decision
//! - [`AuthError`]: Auth-specific error types

#![forbid(unsafe_code)]

mod directory;
mod error;
mod policy;
mod session;
mod storage;


pub use directory::{Directory, MOCK_PASSWORD};
pub use error::{AuthError, Result};
pub use policy::{can_edit, evaluate, Decision};
pub use session::SessionStore;
pub use storage::{default_session_path, FileStorage, MemoryStorage, SessionStorage, SESSION_KEY};

//! The persisted session slot.
//!
//! A [`SessionStorage`] holds at most one serialized identity. It is read once
//! when a [`SessionStore`](crate::SessionStore) opens, written on login, and
//! cleared on logout.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use mapventures_core::Error;

use crate::error::Result;

/// Name of the session slot.
pub const SESSION_KEY: &str = "currentUser";

/// A single durable key-value slot for the serialized current identity.
pub trait SessionStorage: Send + Sync + 'static {
    /// Read the slot. `Ok(None)` means nothing is stored.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the slot contents.
    fn save(&self, value: &str) -> Result<()>;

    /// Empty the slot. Clearing an empty slot succeeds.
    fn clear(&self) -> Result<()>;

    /// Backend name for diagnostics.
    fn name(&self) -> &str;
}

/// Default location of the file-backed slot: `<data dir>/mapventures/currentUser.json`.
pub fn default_session_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("mapventures").join(format!("{SESSION_KEY}.json")))
}

// ============================================================================
// MemoryStorage
// ============================================================================

/// In-process slot. Survives as long as the value does; used in tests and
/// when no data directory is available.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds a value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(value.into())),
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, value: &str) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// FileStorage
// ============================================================================

/// Slot backed by a single JSON file. Last write wins.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Store the slot at `path`. Parent directories are created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io_with_path(e, &self.path).into()),
        }
    }

    fn save(&self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
            }
        }
        std::fs::write(&self.path, value).map_err(|e| Error::io_with_path(e, &self.path))?;
        log::debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("Removed session file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io_with_path(e, &self.path).into()),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

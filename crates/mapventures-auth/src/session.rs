//! The session store: who is logged in right now.
//!
//! [`SessionStore`] is an explicitly owned handle. Construct it once with
//! [`SessionStore::open`], which restores any persisted identity before the
//! handle is returned, then clone it into whatever needs to read the session.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use mapventures_core::{Identity, ResourceType};

use crate::directory::Directory;
use crate::policy::{self, Decision};
use crate::storage::SessionStorage;

/// Shared handle to the current identity.
///
/// Cheap to clone (Arc internals); clones observe the same session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    directory: Directory,
    storage: Arc<dyn SessionStorage>,
    current: RwLock<Option<Identity>>,
}

impl SessionStore {
    /// Open a session over `storage`, restoring any persisted identity.
    pub fn open(directory: Directory, storage: Arc<dyn SessionStorage>) -> Self {
        let store = Self {
            inner: Arc::new(SessionInner {
                directory,
                storage,
                current: RwLock::new(None),
            }),
        };
        store.restore();
        store
    }

    /// Reload the current identity from storage.
    ///
    /// An empty slot leaves the session anonymous. An unreadable or corrupt
    /// slot is logged, cleared, and also leaves the session anonymous.
    pub fn restore(&self) -> Option<Identity> {
        let restored = match self.inner.storage.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    log::warn!("Discarding corrupt persisted session: {e}");
                    if let Err(e) = self.inner.storage.clear() {
                        log::warn!("Failed to clear corrupt session: {e}");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!(
                    "Failed to read session from {} storage: {e}",
                    self.inner.storage.name()
                );
                None
            }
        };

        match &restored {
            Some(identity) => log::info!("Restored session for {}", identity.email),
            None => log::debug!("No persisted session; starting anonymous"),
        }
        self.set_current(restored.clone());
        restored
    }

    /// Log in with email and password.
    ///
    /// Returns `true` on success, after which the identity is current and
    /// persisted. On failure the current identity is left untouched.
    pub fn login(&self, email: &str, password: &str) -> bool {
        let identity = match self.inner.directory.authenticate(email, password) {
            Ok(identity) => identity,
            Err(e) => {
                log::info!("Login rejected for '{email}': {e}");
                return false;
            }
        };

        match serde_json::to_string(&identity) {
            Ok(json) => {
                if let Err(e) = self.inner.storage.save(&json) {
                    log::warn!("Logged in but could not persist session: {e}");
                }
            }
            Err(e) => log::warn!("Logged in but could not serialize session: {e}"),
        }

        log::info!("Logged in as {identity}");
        self.set_current(Some(identity));
        true
    }

    /// Log out, clearing the current identity and the persisted slot.
    ///
    /// Logging out while anonymous is a no-op.
    pub fn logout(&self) {
        let previous = self
            .inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Err(e) = self.inner.storage.clear() {
            log::warn!("Failed to clear persisted session: {e}");
        }
        if let Some(identity) = previous {
            log::info!("Logged out {}", identity.email);
        }
    }

    /// Snapshot of the current identity.
    pub fn current(&self) -> Option<Identity> {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether any identity is current.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Decide whether the current identity may edit a resource.
    pub fn can_edit(
        &self,
        resource_type: ResourceType,
        resource_id: &str,
        owner_id: Option<&str>,
    ) -> bool {
        self.evaluate(resource_type, resource_id, owner_id)
            .is_allowed()
    }

    /// Like [`can_edit`](Self::can_edit), but reports which rule decided.
    pub fn evaluate(
        &self,
        resource_type: ResourceType,
        resource_id: &str,
        owner_id: Option<&str>,
    ) -> Decision {
        let current = self
            .inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        policy::evaluate(current.as_ref(), resource_type, resource_id, owner_id)
    }

    /// The directory logins are checked against.
    pub fn directory(&self) -> &Directory {
        &self.inner.directory
    }

    fn set_current(&self, identity: Option<Identity>) {
        *self
            .inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = identity;
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("storage", &self.inner.storage.name())
            .field("current", &self.current().map(|i| i.email))
            .finish()
    }
}

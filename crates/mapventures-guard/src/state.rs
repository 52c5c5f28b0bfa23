//! Observable gate state.
//!
//! Provides [`GateState`] and [`GateHandle`] for tracking where a guarded
//! navigation currently stands, and the [`Ticket`] generation scheme that
//! keeps a slow, superseded fetch from overwriting a newer result.
//!
//! # Usage
//!
//! ```rust
//! use mapventures_guard::{GateHandle, GateState};
//!
//! let handle = GateHandle::new("owner-gate");
//! assert_eq!(handle.state(), GateState::Idle);
//!
//! let first = handle.begin();
//! let second = handle.begin();
//! assert!(!handle.commit(first, GateState::NotFound));
//! assert!(handle.commit(second, GateState::Allowed));
//! assert_eq!(handle.state(), GateState::Allowed);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use mapventures_core::ResourceType;
use tokio::sync::watch;

use crate::route::Destination;

// ============================================================================
// GateState
// ============================================================================

/// Where a guarded navigation stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Nothing has been navigated yet.
    Idle,
    /// Waiting for the target listing to load. Children must not render.
    Loading {
        /// Type of the listing being fetched
        resource_type: ResourceType,
        /// Id of the listing being fetched
        id: String,
    },
    /// The navigation was sent elsewhere.
    Redirect(Destination),
    /// The target listing does not exist.
    NotFound,
    /// Logged in, but not allowed to edit this listing.
    Denied(ResourceType),
    /// Children may render.
    Allowed,
}

impl GateState {
    /// Returns `true` once the navigation has reached a final state.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Idle | Self::Loading { .. })
    }

    /// Returns `true` if children may render.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading { resource_type, id } => write!(f, "loading {resource_type} '{id}'"),
            Self::Redirect(destination) => write!(f, "redirect to {destination}"),
            Self::NotFound => write!(f, "not found"),
            Self::Denied(resource_type) => write!(f, "access denied ({resource_type})"),
            Self::Allowed => write!(f, "allowed"),
        }
    }
}

// ============================================================================
// GateHandle
// ============================================================================

/// Identifies one navigation. Only the newest ticket may commit state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Thread-safe handle for observing and updating gate state.
///
/// Cheap to clone (Arc internals). State changes are broadcast
/// to all subscribers via a watch channel.
#[derive(Clone)]
pub struct GateHandle {
    inner: Arc<GateHandleInner>,
}

struct GateHandleInner {
    name: String,
    tx: watch::Sender<GateState>,
    generation: Mutex<u64>,
}

impl GateHandle {
    /// Create a new gate handle with the given name.
    ///
    /// Initial state is [`GateState::Idle`].
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(GateState::Idle);
        Self {
            inner: Arc::new(GateHandleInner {
                name: name.into(),
                tx,
                generation: Mutex::new(0),
            }),
        }
    }

    /// Get the gate name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the current gate state.
    pub fn state(&self) -> GateState {
        self.inner.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.inner.tx.subscribe()
    }

    /// Start a navigation, invalidating every earlier ticket.
    pub fn begin(&self) -> Ticket {
        let mut generation = self
            .inner
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *generation += 1;
        Ticket(*generation)
    }

    /// Whether `ticket` still belongs to the newest navigation.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        *self
            .inner
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            == ticket.0
    }

    /// Publish `state` on behalf of `ticket`.
    ///
    /// Returns `false`, leaving the published state untouched, if a newer
    /// navigation has begun since the ticket was issued.
    pub fn commit(&self, ticket: Ticket, state: GateState) -> bool {
        let generation = self
            .inner
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *generation != ticket.0 {
            log::debug!(
                "Gate '{}' dropped stale result from navigation {} (current {})",
                self.inner.name,
                ticket.0,
                *generation
            );
            return false;
        }
        log::debug!("Gate '{}' → {state}", self.inner.name);
        self.inner.tx.send_replace(state);
        true
    }

    /// Wait until the gate settles, or timeout.
    pub async fn wait_settled(&self, timeout: Duration) -> Result<GateState, String> {
        let mut rx = self.subscribe();
        let deadline = tokio::time::sleep(timeout);
        tokio::pin!(deadline);

        // Check current state first
        {
            let state = rx.borrow_and_update().clone();
            if state.is_settled() {
                return Ok(state);
            }
        }

        loop {
            tokio::select! {
                _ = &mut deadline => {
                    return Err(format!(
                        "Gate '{}' not settled after {timeout:?} (state: {})",
                        self.inner.name, self.state()
                    ));
                }
                result = rx.changed() => {
                    if result.is_err() {
                        return Err(format!("Gate '{}' channel closed", self.inner.name));
                    }
                    let state = rx.borrow_and_update().clone();
                    if state.is_settled() {
                        return Ok(state);
                    }
                }
            }
        }
    }
}

impl fmt::Debug for GateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateHandle")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

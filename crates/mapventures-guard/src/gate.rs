//! The two route gates.
//!
//! [`AuthenticatedGate`] only asks whether anyone is logged in.
//! [`OwnerGate`] loads the target listing first and asks the authorization
//! rules about it, publishing its progress on a [`GateHandle`].

use mapventures_auth::SessionStore;
use mapventures_core::{Identity, Resource, ResourceType};
use mapventures_store::ResourceProvider;

use crate::route::Destination;
use crate::state::{GateHandle, GateState, Ticket};

/// User-facing message shown when an owner gate denies access.
pub fn denied_message(resource_type: ResourceType) -> String {
    format!("Access denied: you do not have permission to edit this {resource_type}.")
}

// ============================================================================
// AuthenticatedGate
// ============================================================================

/// Result of the authenticated-only check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Logged in; render the protected content.
    Admit(Identity),
    /// Send the navigation elsewhere.
    Redirect(Destination),
}

/// Admits any logged-in identity.
#[derive(Debug, Clone)]
pub struct AuthenticatedGate {
    session: SessionStore,
}

impl AuthenticatedGate {
    /// Create a gate over `session`.
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Admit the current identity, or redirect to login.
    pub fn check(&self) -> Admission {
        match self.session.current() {
            Some(identity) => Admission::Admit(identity),
            None => {
                log::debug!("Anonymous navigation to a protected route; redirecting to login");
                Admission::Redirect(Destination::Login)
            }
        }
    }
}

// ============================================================================
// OwnerGate
// ============================================================================

/// Outcome of one owner-gate navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict<R> {
    /// Not logged in.
    Redirect(Destination),
    /// No listing with that id.
    NotFound,
    /// Logged in but not allowed to edit.
    Denied(ResourceType),
    /// Allowed; carries the loaded listing for the edit form.
    Allowed(R),
    /// A newer navigation started while this one was loading; its result was dropped.
    Superseded,
}

impl<R> Verdict<R> {
    /// The state this verdict publishes, if it publishes one.
    fn to_state(&self) -> Option<GateState> {
        match self {
            Verdict::Redirect(destination) => Some(GateState::Redirect(destination.clone())),
            Verdict::NotFound => Some(GateState::NotFound),
            Verdict::Denied(resource_type) => Some(GateState::Denied(*resource_type)),
            Verdict::Allowed(_) => Some(GateState::Allowed),
            Verdict::Superseded => None,
        }
    }
}

/// Admits only identities allowed to edit the target listing.
///
/// Each call to [`check`](Self::check) is one navigation. Starting a new one
/// invalidates any still loading, so a slow fetch can never overwrite the
/// state of a later navigation.
#[derive(Debug, Clone)]
pub struct OwnerGate {
    session: SessionStore,
    handle: GateHandle,
}

impl OwnerGate {
    /// Create a gate over `session` with a fresh [`GateHandle`].
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            handle: GateHandle::new("owner-gate"),
        }
    }

    /// Handle for observing this gate's state.
    pub fn handle(&self) -> &GateHandle {
        &self.handle
    }

    /// Run the gate for listing `id`, loaded from `provider`.
    pub async fn check<R: Resource>(
        &self,
        provider: &dyn ResourceProvider<R>,
        id: &str,
    ) -> Verdict<R> {
        let ticket = self.handle.begin();

        if !self.session.is_authenticated() {
            return self.settle(ticket, Verdict::Redirect(Destination::Login));
        }

        self.handle.commit(
            ticket,
            GateState::Loading {
                resource_type: R::KIND,
                id: id.to_string(),
            },
        );

        let fetched = match provider.get_by_id(id).await {
            Ok(record) => record,
            Err(e) => {
                log::warn!(
                    "Failed to load {} '{id}' from {}: {e}; treating as not found",
                    R::KIND,
                    provider.name()
                );
                None
            }
        };

        if !self.handle.is_current(ticket) {
            log::debug!("Discarding stale {} '{id}' lookup", R::KIND);
            return Verdict::Superseded;
        }

        // The session may have changed while the fetch was in flight.
        if !self.session.is_authenticated() {
            return self.settle(ticket, Verdict::Redirect(Destination::Login));
        }

        let verdict = match fetched {
            None => Verdict::NotFound,
            Some(record) => {
                let decision = self
                    .session
                    .evaluate(R::KIND, id, Some(record.owner_id()));
                if decision.is_allowed() {
                    Verdict::Allowed(record)
                } else {
                    log::info!("Edit of {} '{id}' refused: {decision}", R::KIND);
                    Verdict::Denied(R::KIND)
                }
            }
        };
        self.settle(ticket, verdict)
    }

    fn settle<R>(&self, ticket: Ticket, verdict: Verdict<R>) -> Verdict<R> {
        match verdict.to_state() {
            Some(state) => {
                if self.handle.commit(ticket, state) {
                    verdict
                } else {
                    Verdict::Superseded
                }
            }
            None => verdict,
        }
    }

    /// Leave the edit route: invalidate any lookup still in flight and
    /// publish [`GateState::Idle`].
    pub fn reset(&self) {
        let ticket = self.handle.begin();
        self.handle.commit(ticket, GateState::Idle);
    }
}

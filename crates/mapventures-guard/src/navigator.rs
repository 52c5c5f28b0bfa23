//! Path-driven navigation.
//!
//! [`Navigator::navigate`] resolves a path to a [`Route`] and runs it through
//! whichever gate the route's [`Access`] level calls for.

use mapventures_auth::SessionStore;
use mapventures_core::{Company, Event, ResourceType};
use mapventures_store::Catalog;

use crate::gate::{Admission, AuthenticatedGate, OwnerGate, Verdict};
use crate::route::{Access, Destination, Route};
use crate::state::GateHandle;

/// A listing the owner gate admitted for editing.
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
    /// Company edit form.
    Company(Company),
    /// Event edit form.
    Event(Event),
}

impl EditTarget {
    /// Type of the listing.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            EditTarget::Company(_) => ResourceType::Company,
            EditTarget::Event(_) => ResourceType::Event,
        }
    }
}

/// What the user ends up looking at.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The route's page renders.
    Render(Route),
    /// The edit form renders for this listing.
    Edit(EditTarget),
    /// The navigation was sent elsewhere.
    Redirect(Destination),
    /// The access-denied message renders in place of the page.
    Denied(ResourceType),
    /// A newer navigation replaced this one before it finished.
    Superseded,
}

/// Resolves paths and applies the right gate.
#[derive(Debug, Clone)]
pub struct Navigator {
    session: SessionStore,
    catalog: Catalog,
    auth_gate: AuthenticatedGate,
    owner_gate: OwnerGate,
}

impl Navigator {
    /// Create a navigator over a session and catalog.
    pub fn new(session: SessionStore, catalog: Catalog) -> Self {
        Self {
            auth_gate: AuthenticatedGate::new(session.clone()),
            owner_gate: OwnerGate::new(session.clone()),
            session,
            catalog,
        }
    }

    /// Handle for observing the owner gate.
    pub fn handle(&self) -> &GateHandle {
        self.owner_gate.handle()
    }

    /// Navigate to `path`.
    pub async fn navigate(&self, path: &str) -> Outcome {
        let route = Route::parse(path);
        log::debug!("Navigating to {path} ({route})");

        match route.access() {
            Access::Public => {
                self.owner_gate.reset();
                Outcome::Render(route)
            }
            Access::Authenticated => {
                self.owner_gate.reset();
                match self.auth_gate.check() {
                    Admission::Admit(_) => Outcome::Render(route),
                    Admission::Redirect(destination) => Outcome::Redirect(destination),
                }
            }
            Access::Owner(resource_type) => {
                let id = match &route {
                    Route::Edit { id, .. } => id.as_str(),
                    _ => return Outcome::Redirect(Destination::NotFound),
                };
                match resource_type {
                    ResourceType::Company => {
                        let verdict = self
                            .owner_gate
                            .check(self.catalog.companies.as_ref(), id)
                            .await;
                        Self::settle(verdict, EditTarget::Company)
                    }
                    ResourceType::Event => {
                        let verdict = self
                            .owner_gate
                            .check(self.catalog.events.as_ref(), id)
                            .await;
                        Self::settle(verdict, EditTarget::Event)
                    }
                }
            }
        }
    }

    /// Where the current identity's "edit my listing" shortcut leads.
    ///
    /// Identities affiliated with a company go to that company's edit route,
    /// anonymous visitors go to login, and everyone else stays put.
    pub fn redirect_to_edit(&self) -> Option<Destination> {
        match self.session.current() {
            None => Some(Destination::Login),
            Some(identity) => identity.company_id.map(|company_id| {
                Destination::Path(Route::edit(ResourceType::Company, company_id).path())
            }),
        }
    }

    fn settle<R>(verdict: Verdict<R>, target: fn(R) -> EditTarget) -> Outcome {
        match verdict {
            Verdict::Redirect(destination) => Outcome::Redirect(destination),
            Verdict::NotFound => Outcome::Redirect(Destination::NotFound),
            Verdict::Denied(resource_type) => Outcome::Denied(resource_type),
            Verdict::Allowed(record) => Outcome::Edit(target(record)),
            Verdict::Superseded => Outcome::Superseded,
        }
    }
}

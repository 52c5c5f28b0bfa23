//! Form submissions for the back office.
//!
//! The owner gate only decides whether an edit form is shown. Every
//! mutation here loads the listing again and re-runs the authorization
//! rules against it, so a stale form cannot write past a changed session.

use mapventures_auth::SessionStore;
use mapventures_core::{
    Company, CompanyDraft, CompanyPatch, Event, EventDraft, EventPatch, Identity, Resource,
};
use mapventures_store::{Catalog, ResourceProvider};

use crate::error::{Error, Result};

/// Authorized create, update, and delete of listings.
#[derive(Debug, Clone)]
pub struct ListingEditor {
    session: SessionStore,
    catalog: Catalog,
}

impl ListingEditor {
    /// Create an editor over a session and catalog.
    pub fn new(session: SessionStore, catalog: Catalog) -> Self {
        Self { session, catalog }
    }

    /// Save the company edit form.
    pub async fn update_company(&self, id: &str, patch: CompanyPatch) -> Result<Company> {
        self.update(self.catalog.companies.as_ref(), id, patch).await
    }

    /// Save the event edit form.
    pub async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Event> {
        self.update(self.catalog.events.as_ref(), id, patch).await
    }

    /// Remove a company listing.
    pub async fn delete_company(&self, id: &str) -> Result<()> {
        self.delete(self.catalog.companies.as_ref(), id).await
    }

    /// Remove an event listing.
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        self.delete(self.catalog.events.as_ref(), id).await
    }

    /// Publish a new event owned by the current identity.
    ///
    /// Any logged-in identity may create one. The draft's owner is always
    /// replaced with the current identity's id.
    pub async fn create_event(&self, mut draft: EventDraft) -> Result<Event> {
        draft.owner_id = self.require_identity()?.id;
        Ok(self.catalog.events.create(draft).await?)
    }

    /// Register a new company owned by the current identity.
    pub async fn create_company(&self, mut draft: CompanyDraft) -> Result<Company> {
        draft.owner_id = self.require_identity()?.id;
        Ok(self.catalog.companies.create(draft).await?)
    }

    async fn update<R: Resource>(
        &self,
        provider: &dyn ResourceProvider<R>,
        id: &str,
        patch: R::Patch,
    ) -> Result<R> {
        self.authorize(provider, id).await?;
        provider
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }

    async fn delete<R: Resource>(&self, provider: &dyn ResourceProvider<R>, id: &str) -> Result<()> {
        self.authorize(provider, id).await?;
        if provider.delete(id).await? {
            Ok(())
        } else {
            Err(not_found::<R>(id))
        }
    }

    /// Load `id` and check the current identity may edit it.
    async fn authorize<R: Resource>(
        &self,
        provider: &dyn ResourceProvider<R>,
        id: &str,
    ) -> Result<R> {
        if !self.session.is_authenticated() {
            return Err(Error::Unauthenticated);
        }

        let record = provider
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found::<R>(id))?;

        let decision = self
            .session
            .evaluate(R::KIND, id, Some(record.owner_id()));
        if !decision.is_allowed() {
            log::info!("Refused mutation of {} '{id}': {decision}", R::KIND);
            return Err(Error::Denied {
                kind: R::KIND,
                id: id.to_string(),
                decision,
            });
        }
        Ok(record)
    }

    fn require_identity(&self) -> Result<Identity> {
        self.session.current().ok_or(Error::Unauthenticated)
    }
}

fn not_found<R: Resource>(id: &str) -> Error {
    Error::NotFound {
        kind: R::KIND,
        id: id.to_string(),
    }
}

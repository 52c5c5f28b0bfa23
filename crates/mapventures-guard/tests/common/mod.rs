//! Common test utilities and harness for mapventures-guard integration tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mapventures_auth::{Directory, MemoryStorage, SessionStore, MOCK_PASSWORD};
use mapventures_core::{Company, Event, Resource};
use mapventures_guard::{ListingEditor, Navigator};
use mapventures_store::{seed, Catalog, Latency, MockProvider, ResourceProvider};

/// Mock emails, one per role.
pub const ADMIN: &str = "admin@admin.com";
pub const TECHJOINVILLE: &str = "contato@techjoinville.com.br";
pub const METALURGICA: &str = "contato@metalurgicnorte.com.br";
pub const ORGANIZER: &str = "organizador@eventos.com";

/// Test harness for integration tests.
///
/// Wires an in-memory session to a catalog and hands out navigators and
/// editors that share both.
pub struct TestHarness {
    /// Session shared by everything the harness builds
    pub session: SessionStore,
    /// Providers shared by everything the harness builds
    pub catalog: Catalog,
}

impl TestHarness {
    /// Anonymous session over the seeded mock catalog, without latency.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::mock(Latency::none()))
    }

    /// Anonymous session over a custom catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let session = SessionStore::open(Directory::mock(), Arc::new(MemoryStorage::new()));
        Self { session, catalog }
    }

    /// Log in with the mock password, asserting success.
    pub fn login_as(&self, email: &str) -> &Self {
        assert!(
            self.session.login(email, MOCK_PASSWORD),
            "login as {email} should succeed"
        );
        self
    }

    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.session.clone(), self.catalog.clone())
    }

    pub fn editor(&self) -> ListingEditor {
        ListingEditor::new(self.session.clone(), self.catalog.clone())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider that sleeps a scripted time per id before answering lookups.
pub struct DelayedProvider<R: Resource> {
    inner: MockProvider<R>,
    delays: HashMap<String, Duration>,
}

impl<R: Resource> DelayedProvider<R> {
    pub fn new(records: Vec<R>, delays: &[(&str, u64)]) -> Self {
        Self {
            inner: MockProvider::with_records("delayed", records, Latency::none()),
            delays: delays
                .iter()
                .map(|(id, ms)| (id.to_string(), Duration::from_millis(*ms)))
                .collect(),
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceProvider<R> for DelayedProvider<R> {
    async fn get_all(&self) -> mapventures_store::Result<Vec<R>> {
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: &str) -> mapventures_store::Result<Option<R>> {
        if let Some(delay) = self.delays.get(id) {
            tokio::time::sleep(*delay).await;
        }
        self.inner.get_by_id(id).await
    }

    async fn create(&self, draft: R::Draft) -> mapventures_store::Result<R> {
        self.inner.create(draft).await
    }

    async fn update(&self, id: &str, patch: R::Patch) -> mapventures_store::Result<Option<R>> {
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &str) -> mapventures_store::Result<bool> {
        self.inner.delete(id).await
    }

    fn name(&self) -> &str {
        "delayed"
    }
}

/// Provider whose every call fails.
pub struct FailingProvider;

#[async_trait]
impl<R: Resource> ResourceProvider<R> for FailingProvider {
    async fn get_all(&self) -> mapventures_store::Result<Vec<R>> {
        Err(unavailable())
    }

    async fn get_by_id(&self, _id: &str) -> mapventures_store::Result<Option<R>> {
        Err(unavailable())
    }

    async fn create(&self, _draft: R::Draft) -> mapventures_store::Result<R> {
        Err(unavailable())
    }

    async fn update(&self, _id: &str, _patch: R::Patch) -> mapventures_store::Result<Option<R>> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &str) -> mapventures_store::Result<bool> {
        Err(unavailable())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn unavailable() -> mapventures_store::Error {
    mapventures_store::Error::unavailable("failing", "connection refused")
}

/// Catalog whose company lookups are delayed per id.
pub fn delayed_companies(delays: &[(&str, u64)]) -> Catalog {
    Catalog::new(
        Arc::new(DelayedProvider::<Company>::new(seed::companies(), delays)),
        Arc::new(MockProvider::<Event>::with_records(
            "events",
            seed::events(),
            Latency::none(),
        )),
    )
}

/// Catalog whose providers always fail.
pub fn failing_catalog() -> Catalog {
    Catalog::new(Arc::new(FailingProvider), Arc::new(FailingProvider))
}

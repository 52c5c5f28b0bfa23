//! The resource provider contract.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use mapventures_core::{Company, Event, Resource};

use crate::error::Result;
use crate::memory::{Latency, MockProvider};
use crate::seed;

/// Async CRUD access to one resource type.
///
/// Implementations may be remote or simulated. `Ok(None)` / `Ok(false)` mean
/// "no such record"; `Err` is reserved for the provider itself failing.
#[async_trait]
pub trait ResourceProvider<R: Resource>: Send + Sync {
    /// Every record, in insertion order.
    async fn get_all(&self) -> Result<Vec<R>>;

    /// The record with this id, if any.
    async fn get_by_id(&self, id: &str) -> Result<Option<R>>;

    /// Store a new record, assigning its id.
    async fn create(&self, draft: R::Draft) -> Result<R>;

    /// Apply a patch to an existing record, returning the updated record.
    async fn update(&self, id: &str, patch: R::Patch) -> Result<Option<R>>;

    /// Remove a record. Returns whether it existed.
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Provider name for diagnostics.
    fn name(&self) -> &str;
}

/// The company and event providers used by one running hub.
#[derive(Clone)]
pub struct Catalog {
    /// Company records.
    pub companies: Arc<dyn ResourceProvider<Company>>,
    /// Event records.
    pub events: Arc<dyn ResourceProvider<Event>>,
}

impl Catalog {
    /// Bundle two providers.
    pub fn new(
        companies: Arc<dyn ResourceProvider<Company>>,
        events: Arc<dyn ResourceProvider<Event>>,
    ) -> Self {
        Self { companies, events }
    }

    /// Mock providers loaded with the seed records.
    pub fn mock(latency: Latency) -> Self {
        Self::new(
            Arc::new(MockProvider::with_records(
                "companies",
                seed::companies(),
                latency,
            )),
            Arc::new(MockProvider::with_records("events", seed::events(), latency)),
        )
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("companies", &self.companies.name())
            .field("events", &self.events.name())
            .finish()
    }
}

//! In-memory resource provider with simulated latency.
//!
//! Every call sleeps for its configured delay before touching the record
//! list, so callers see the same suspension points a remote API would give
//! them. The record lock is never held across an await.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use mapventures_core::Resource;

use crate::error::Result;
use crate::provider::ResourceProvider;

/// Per-operation artificial delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Delay before listing all records.
    pub get_all: Duration,
    /// Delay before a single lookup.
    pub get_by_id: Duration,
    /// Delay before inserting.
    pub create: Duration,
    /// Delay before patching.
    pub update: Duration,
    /// Delay before removing.
    pub delete: Duration,
}

impl Latency {
    /// The delays of the hosted mock API.
    pub const fn mock() -> Self {
        Self {
            get_all: Duration::from_millis(500),
            get_by_id: Duration::from_millis(300),
            create: Duration::from_millis(800),
            update: Duration::from_millis(800),
            delete: Duration::from_millis(500),
        }
    }

    /// No delay at all.
    pub const fn none() -> Self {
        Self {
            get_all: Duration::ZERO,
            get_by_id: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::mock()
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Mock provider storing records in a `Vec`.
///
/// New ids are the current Unix time in milliseconds, bumped past any id
/// already in use.
pub struct MockProvider<R: Resource> {
    name: String,
    records: RwLock<Vec<R>>,
    latency: Latency,
}

impl<R: Resource> MockProvider<R> {
    /// Create an empty provider.
    pub fn new(name: impl Into<String>, latency: Latency) -> Self {
        Self::with_records(name, Vec::new(), latency)
    }

    /// Create a provider pre-loaded with records.
    pub fn with_records(name: impl Into<String>, records: Vec<R>, latency: Latency) -> Self {
        Self {
            name: name.into(),
            records: RwLock::new(records),
            latency,
        }
    }

    /// Number of stored records (no latency).
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the provider holds no records (no latency).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn next_id(records: &[R]) -> String {
        let mut candidate = chrono::Utc::now().timestamp_millis();
        loop {
            let id = candidate.to_string();
            if !records.iter().any(|r| r.id() == id) {
                return id;
            }
            candidate += 1;
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceProvider<R> for MockProvider<R> {
    async fn get_all(&self) -> Result<Vec<R>> {
        pause(self.latency.get_all).await;
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<R>> {
        pause(self.latency.get_by_id).await;
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn create(&self, draft: R::Draft) -> Result<R> {
        R::validate_draft(&draft)?;
        pause(self.latency.create).await;

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let record = R::from_draft(Self::next_id(&records), draft);
        records.push(record.clone());
        log::info!(
            "Created {} '{}' ({})",
            R::KIND,
            record.id(),
            record.name()
        );
        Ok(record)
    }

    async fn update(&self, id: &str, patch: R::Patch) -> Result<Option<R>> {
        pause(self.latency.update).await;

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            log::debug!("Update of missing {} '{id}'", R::KIND);
            return Ok(None);
        };
        record.apply(patch);
        log::info!("Updated {} '{id}'", R::KIND);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        pause(self.latency.delete).await;

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let Some(index) = records.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };
        records.remove(index);
        log::info!("Deleted {} '{id}'", R::KIND);
        Ok(true)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//! Listings that can be browsed and edited.
//!
//! Two resource types exist: [`Company`] and [`Event`]. Both carry an `id`
//! and an `ownerId`; the owner is fixed when the record is created and no
//! patch type can change it.

mod company;
mod event;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use company::{Company, CompanyDraft, CompanyPatch};
pub use event::{Event, EventDraft, EventPatch};

/// Kind of listing a permission check or route refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// A company profile.
    Company,
    /// An event.
    Event,
}

impl ResourceType {
    /// Lowercase name, as used in permission checks.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Company => "company",
            ResourceType::Event => "event",
        }
    }

    /// Plural path segment used in navigation targets.
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceType::Company => "companies",
            ResourceType::Event => "events",
        }
    }

    /// Maps a plural path segment back to a resource type.
    pub fn from_collection(segment: &str) -> Option<Self> {
        match segment {
            "companies" => Some(ResourceType::Company),
            "events" => Some(ResourceType::Event),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "company" => Ok(ResourceType::Company),
            "event" => Ok(ResourceType::Event),
            other => Err(Error::parse(format!("unknown resource type '{other}'"))),
        }
    }
}

/// Common behavior of listing records.
///
/// `Draft` is a record without its id (input to create); `Patch` holds the
/// optional replacements accepted by update.
pub trait Resource:
    Clone + fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Creation input: every field except `id`.
    type Draft: Clone + fmt::Debug + Send + Sync + 'static;
    /// Partial update: mutable fields only.
    type Patch: Clone + fmt::Debug + Default + Send + Sync + 'static;

    /// Resource type of this record.
    const KIND: ResourceType;

    /// Record id.
    fn id(&self) -> &str;

    /// Id of the identity that owns the record.
    fn owner_id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Whether a search term hits this record, ignoring case.
    ///
    /// Matches against the name; an empty term matches everything.
    fn matches(&self, term: &str) -> bool {
        contains_ignore_case(self.name(), term)
    }

    /// Owner named by a draft.
    fn draft_owner(draft: &Self::Draft) -> &str;

    /// Builds a record from a draft and a freshly assigned id.
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Applies a patch in place.
    fn apply(&mut self, patch: Self::Patch);

    /// Rejects drafts that would create an ownerless record.
    fn validate_draft(draft: &Self::Draft) -> Result<()> {
        if Self::draft_owner(draft).trim().is_empty() {
            return Err(Error::invalid_resource(
                Self::KIND,
                "owner id must not be empty",
            ));
        }
        Ok(())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

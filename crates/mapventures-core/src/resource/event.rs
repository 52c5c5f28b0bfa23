use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceType};

/// An event listed in the directory and pinned on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Record id.
    pub id: String,
    /// Event title.
    pub name: String,
    /// Free-text summary.
    pub description: String,
    /// Calendar day the event takes place, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Venue name.
    pub location: String,
    /// Map latitude.
    pub lat: f64,
    /// Map longitude.
    pub lng: f64,
    /// Id of the identity that created the event.
    pub owner_id: String,
}

/// An event without an id, as submitted by the creation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Event title.
    pub name: String,
    /// Free-text summary.
    pub description: String,
    /// Calendar day.
    pub date: NaiveDate,
    /// Venue name.
    pub location: String,
    /// Map latitude.
    pub lat: f64,
    /// Map longitude.
    pub lng: f64,
    /// Owner of the new listing.
    pub owner_id: String,
}

/// Replacement values for an existing event. The owner cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    /// New title.
    pub name: Option<String>,
    /// New summary.
    pub description: Option<String>,
    /// New calendar day.
    pub date: Option<NaiveDate>,
    /// New venue name.
    pub location: Option<String>,
    /// New map latitude.
    pub lat: Option<f64>,
    /// New map longitude.
    pub lng: Option<f64>,
}

impl Resource for Event {
    type Draft = EventDraft;
    type Patch = EventPatch;

    const KIND: ResourceType = ResourceType::Event;

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn draft_owner(draft: &EventDraft) -> &str {
        &draft.owner_id
    }

    fn from_draft(id: String, draft: EventDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            date: draft.date,
            location: draft.location,
            lat: draft.lat,
            lng: draft.lng,
            owner_id: draft.owner_id,
        }
    }

    fn apply(&mut self, patch: EventPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(lat) = patch.lat {
            self.lat = lat;
        }
        if let Some(lng) = patch.lng {
            self.lng = lng;
        }
    }
}

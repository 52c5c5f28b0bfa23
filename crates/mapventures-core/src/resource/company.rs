use serde::{Deserialize, Serialize};

use super::{contains_ignore_case, Resource, ResourceType};

/// A company listed in the directory and pinned on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Record id.
    pub id: String,
    /// Trading name.
    pub name: String,
    /// Free-text profile.
    pub description: String,
    /// Industry, e.g. `"Tecnologia"`.
    pub category: String,
    /// Contact phone.
    pub phone: String,
    /// Website, usually without a scheme.
    pub website: String,
    /// Street address.
    pub address: String,
    /// Head-count bracket, e.g. `"50-100"`.
    pub employees: String,
    /// Year the company was founded.
    pub founded: i32,
    /// Map latitude.
    pub lat: f64,
    /// Map longitude.
    pub lng: f64,
    /// Id of the identity that owns the listing.
    pub owner_id: String,
}

/// A company without an id, as submitted by the creation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    /// Trading name.
    pub name: String,
    /// Free-text profile.
    pub description: String,
    /// Industry.
    pub category: String,
    /// Contact phone.
    pub phone: String,
    /// Website.
    pub website: String,
    /// Street address.
    pub address: String,
    /// Head-count bracket.
    pub employees: String,
    /// Year founded.
    pub founded: i32,
    /// Map latitude.
    pub lat: f64,
    /// Map longitude.
    pub lng: f64,
    /// Owner of the new listing.
    pub owner_id: String,
}

/// Replacement values for an existing company. The owner cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    /// New trading name.
    pub name: Option<String>,
    /// New profile text.
    pub description: Option<String>,
    /// New industry.
    pub category: Option<String>,
    /// New contact phone.
    pub phone: Option<String>,
    /// New website.
    pub website: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New head-count bracket.
    pub employees: Option<String>,
    /// New founding year.
    pub founded: Option<i32>,
    /// New map latitude.
    pub lat: Option<f64>,
    /// New map longitude.
    pub lng: Option<f64>,
}

impl Resource for Company {
    type Draft = CompanyDraft;
    type Patch = CompanyPatch;

    const KIND: ResourceType = ResourceType::Company;

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, term: &str) -> bool {
        contains_ignore_case(&self.name, term) || contains_ignore_case(&self.category, term)
    }

    fn draft_owner(draft: &CompanyDraft) -> &str {
        &draft.owner_id
    }

    fn from_draft(id: String, draft: CompanyDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            phone: draft.phone,
            website: draft.website,
            address: draft.address,
            employees: draft.employees,
            founded: draft.founded,
            lat: draft.lat,
            lng: draft.lng,
            owner_id: draft.owner_id,
        }
    }

    fn apply(&mut self, patch: CompanyPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(website) = patch.website {
            self.website = website;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(employees) = patch.employees {
            self.employees = employees;
        }
        if let Some(founded) = patch.founded {
            self.founded = founded;
        }
        if let Some(lat) = patch.lat {
            self.lat = lat;
        }
        if let Some(lng) = patch.lng {
            self.lng = lng;
        }
    }
}

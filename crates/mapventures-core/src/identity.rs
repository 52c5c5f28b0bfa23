//! Identities and roles.
//!
//! An [`Identity`] is the acting user. Its JSON form is the one persisted in
//! the session slot, so field names are kept stable: the role is stored under
//! `type` and the company affiliation under `companyId`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The role an identity holds. Drives the authorization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May edit everything.
    Admin,
    /// Represents a single company; may edit that company.
    Company,
    /// Creates events; may edit the events it owns.
    Organizer,
    /// Browses only.
    Visitor,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Company, Role::Organizer, Role::Visitor];

    /// Lowercase wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Company => "company",
            Role::Organizer => "organizer",
            Role::Visitor => "visitor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::parse(format!("unknown role '{s}'")))
    }
}

/// A user of the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique identity id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email; matched exactly.
    pub email: String,
    /// Role held by this identity.
    #[serde(rename = "type")]
    pub role: Role,
    /// Company this identity represents (company-role identities only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

impl Identity {
    /// Creates an identity without a company affiliation.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            company_id: None,
        }
    }

    /// Sets the company this identity represents.
    pub fn with_company(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    /// Returns `true` for admin identities.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> ({})", self.name, self.email, self.role)
    }
}

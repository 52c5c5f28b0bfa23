//! Edit-permission decisions.
//!
//! [`evaluate`] is a total, pure function of the acting identity and the
//! target resource. Rules are tried in a fixed order and the first one that
//! applies decides:
//!
//! 1. No identity: denied.
//! 2. Admin: allowed, whatever the resource.
//! 3. Company role on a company: allowed iff the identity's `companyId`
//!    equals the *resource id*. The resource's owner is not consulted.
//! 4. Organizer role on an event: allowed iff the identity's id equals the
//!    event's `ownerId`.
//! 5. Anything else: denied.

use std::fmt;

use mapventures_core::{Identity, ResourceType, Role};

/// Outcome of a permission check, naming the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Allowed: the identity is an admin.
    AdminOverride,
    /// Allowed: the identity represents this company.
    CompanyAffiliation,
    /// Allowed: the identity created this event.
    EventOwnership,
    /// Denied: nobody is logged in.
    Anonymous,
    /// Denied: a company account checking a company it does not represent.
    NotAffiliated,
    /// Denied: an organizer checking an event it does not own.
    NotOwner,
    /// Denied: no rule grants this role access to this resource type.
    NoRule,
}

impl Decision {
    /// Whether the decision grants edit access.
    pub fn is_allowed(&self) -> bool {
        matches!(
            self,
            Decision::AdminOverride | Decision::CompanyAffiliation | Decision::EventOwnership
        )
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Decision::AdminOverride => "allowed (admin)",
            Decision::CompanyAffiliation => "allowed (company affiliation)",
            Decision::EventOwnership => "allowed (event owner)",
            Decision::Anonymous => "denied (not logged in)",
            Decision::NotAffiliated => "denied (not affiliated with this company)",
            Decision::NotOwner => "denied (not the event owner)",
            Decision::NoRule => "denied (role has no edit rights here)",
        };
        f.write_str(text)
    }
}

/// Decide whether `identity` may edit the given resource, and why.
pub fn evaluate(
    identity: Option<&Identity>,
    resource_type: ResourceType,
    resource_id: &str,
    owner_id: Option<&str>,
) -> Decision {
    let Some(identity) = identity else {
        return Decision::Anonymous;
    };

    let decision = match (identity.role, resource_type) {
        (Role::Admin, _) => Decision::AdminOverride,
        (Role::Company, ResourceType::Company) => {
            // Compared against the resource id, not its owner.
            if identity.company_id.as_deref() == Some(resource_id) {
                Decision::CompanyAffiliation
            } else {
                Decision::NotAffiliated
            }
        }
        (Role::Organizer, ResourceType::Event) => {
            if owner_id == Some(identity.id.as_str()) {
                Decision::EventOwnership
            } else {
                Decision::NotOwner
            }
        }
        _ => Decision::NoRule,
    };

    log::debug!(
        "can_edit {resource_type}/{resource_id} by {} ({}): {decision}",
        identity.id,
        identity.role
    );
    decision
}

/// Whether `identity` may edit the given resource.
pub fn can_edit(
    identity: Option<&Identity>,
    resource_type: ResourceType,
    resource_id: &str,
    owner_id: Option<&str>,
) -> bool {
    evaluate(identity, resource_type, resource_id, owner_id).is_allowed()
}

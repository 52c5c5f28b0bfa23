//! The navigation table.
//!
//! | Path | Route | Access |
//! |------|-------|--------|
//! | `/` | [`Route::Home`] (map) | public |
//! | `/companies`, `/events` | listings | public |
//! | `/companies/:id`, `/events/:id` | profile / details | public |
//! | `/login` | [`Route::Login`] | public |
//! | `/admin`, `/admin/companies`, `/admin/events`, `/admin/profile`, `.../new` | back office | authenticated |
//! | `/admin/companies/:id/edit`, `/admin/events/:id/edit` | [`Route::Edit`] | owner |
//!
//! `/companies/:id/edit` and `/events/:id/edit` are accepted as aliases of
//! the edit routes. Anything else resolves to [`Route::NotFound`].

use std::fmt;

use mapventures_core::ResourceType;

/// Where a guard sends a navigation it refuses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The login page.
    Login,
    /// The not-found page.
    NotFound,
    /// Any other in-app path.
    Path(String),
}

impl Destination {
    /// Path of the destination.
    pub fn path(&self) -> &str {
        match self {
            Destination::Login => "/login",
            Destination::NotFound => "/404",
            Destination::Path(path) => path,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Which gate protects a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone may view.
    Public,
    /// Any logged-in identity may view.
    Authenticated,
    /// Only identities allowed to edit the target listing.
    Owner(ResourceType),
}

/// A resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The map.
    Home,
    /// Login form.
    Login,
    /// Company listing.
    Companies,
    /// Event listing.
    Events,
    /// One company's public profile.
    CompanyProfile(String),
    /// One event's public details.
    EventDetails(String),
    /// Back-office landing page.
    Dashboard,
    /// Back-office company list.
    ManageCompanies,
    /// Company creation form.
    NewCompany,
    /// Back-office event list.
    ManageEvents,
    /// Event creation form.
    NewEvent,
    /// The current identity's profile.
    Profile,
    /// Edit form for one listing.
    Edit {
        /// Type of the listing being edited
        resource_type: ResourceType,
        /// Id taken from the path
        id: String,
    },
    /// No route matched.
    NotFound,
}

impl Route {
    /// Resolve a path. Query strings, fragments, and trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["companies"] => Route::Companies,
            ["events"] => Route::Events,
            ["companies", id] => Route::CompanyProfile(id.to_string()),
            ["events", id] => Route::EventDetails(id.to_string()),
            ["admin"] => Route::Dashboard,
            ["admin", "companies"] => Route::ManageCompanies,
            ["admin", "companies", "new"] => Route::NewCompany,
            ["admin", "events"] => Route::ManageEvents,
            ["admin", "events", "new"] => Route::NewEvent,
            ["admin", "profile"] => Route::Profile,
            ["admin", collection, id, "edit"] | [collection, id, "edit"] => {
                match ResourceType::from_collection(collection) {
                    Some(resource_type) => Route::edit(resource_type, *id),
                    None => Route::NotFound,
                }
            }
            _ => Route::NotFound,
        }
    }

    /// The edit route for a listing.
    pub fn edit(resource_type: ResourceType, id: impl Into<String>) -> Self {
        Route::Edit {
            resource_type,
            id: id.into(),
        }
    }

    /// Canonical path of the route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Companies => "/companies".to_string(),
            Route::Events => "/events".to_string(),
            Route::CompanyProfile(id) => format!("/companies/{id}"),
            Route::EventDetails(id) => format!("/events/{id}"),
            Route::Dashboard => "/admin".to_string(),
            Route::ManageCompanies => "/admin/companies".to_string(),
            Route::NewCompany => "/admin/companies/new".to_string(),
            Route::ManageEvents => "/admin/events".to_string(),
            Route::NewEvent => "/admin/events/new".to_string(),
            Route::Profile => "/admin/profile".to_string(),
            Route::Edit { resource_type, id } => {
                format!("/admin/{}/{id}/edit", resource_type.collection())
            }
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Which gate protects this route.
    pub fn access(&self) -> Access {
        match self {
            Route::Home
            | Route::Login
            | Route::Companies
            | Route::Events
            | Route::CompanyProfile(_)
            | Route::EventDetails(_)
            | Route::NotFound => Access::Public,
            Route::Dashboard
            | Route::ManageCompanies
            | Route::NewCompany
            | Route::ManageEvents
            | Route::NewEvent
            | Route::Profile => Access::Authenticated,
            Route::Edit { resource_type, .. } => Access::Owner(*resource_type),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

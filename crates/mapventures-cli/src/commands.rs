//! Handlers for session, browsing, and editing commands.
//!
//! Each handler writes its report to `out` so the binary can print to stdout
//! and tests can capture it.

use std::io::Write;
use std::sync::Arc;

use chrono::Datelike;
use mapventures_auth::{Directory, FileStorage, SessionStorage, SessionStore};
use mapventures_core::{
    CompanyDraft, CompanyPatch, EventDraft, EventPatch, Resource, ResourceType,
};
use mapventures_guard::{denied_message, EditTarget, ListingEditor, Navigator, Outcome};
use mapventures_store::{Catalog, ResourceProvider};
use serde::Serialize;

use crate::cli::{BrowseAction, EditFields};
use crate::config::HubConfig;
use crate::error::{Error, Result};

// Map center used when a new listing gives no coordinates.
const DEFAULT_LAT: f64 = -26.3044;
const DEFAULT_LNG: f64 = -48.8487;

/// Everything a command needs: one session, one catalog.
#[derive(Debug, Clone)]
pub struct App {
    session: SessionStore,
    catalog: Catalog,
    navigator: Navigator,
    editor: ListingEditor,
}

impl App {
    /// Build from configuration: file-backed session, mock catalog.
    pub fn from_config(config: &HubConfig) -> Result<Self> {
        let path = config.session_path()?;
        log::debug!("Session file: {}", path.display());
        Ok(Self::new(
            Arc::new(FileStorage::new(path)),
            Catalog::mock(config.latency()),
        ))
    }

    /// Build over explicit storage and catalog.
    pub fn new(storage: Arc<dyn SessionStorage>, catalog: Catalog) -> Self {
        let session = SessionStore::open(Directory::mock(), storage);
        Self {
            navigator: Navigator::new(session.clone(), catalog.clone()),
            editor: ListingEditor::new(session.clone(), catalog.clone()),
            session,
            catalog,
        }
    }

    /// The session this app acts as.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // ------------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------------

    /// `login <email> --password <password>`
    pub fn login(&self, out: &mut impl Write, email: &str, password: &str) -> Result<()> {
        if !self.session.login(email, password) {
            return Err(Error::LoginFailed);
        }
        match self.session.current() {
            Some(identity) => emit(out, format_args!("Logged in as {identity}")),
            None => Err(Error::LoginFailed),
        }
    }

    /// `logout`
    pub fn logout(&self, out: &mut impl Write) -> Result<()> {
        let was = self.session.current();
        self.session.logout();
        match was {
            Some(identity) => emit(out, format_args!("Logged out {}", identity.email)),
            None => emit(out, format_args!("Not logged in")),
        }
    }

    /// `whoami`
    pub fn whoami(&self, out: &mut impl Write) -> Result<()> {
        match self.session.current() {
            Some(identity) => {
                emit(out, format_args!("{identity}"))?;
                if let Some(company_id) = &identity.company_id {
                    emit(out, format_args!("company: {company_id}"))?;
                }
                Ok(())
            }
            None => emit(out, format_args!("anonymous")),
        }
    }

    // ------------------------------------------------------------------------
    // Browsing
    // ------------------------------------------------------------------------

    /// `companies <list|show>` / `events <list|show>`
    pub async fn browse(
        &self,
        out: &mut impl Write,
        resource_type: ResourceType,
        action: BrowseAction,
    ) -> Result<()> {
        match resource_type {
            ResourceType::Company => browse(out, self.catalog.companies.as_ref(), action).await,
            ResourceType::Event => browse(out, self.catalog.events.as_ref(), action).await,
        }
    }

    /// `can-edit <type> <id>`
    pub async fn can_edit(
        &self,
        out: &mut impl Write,
        resource_type: ResourceType,
        id: &str,
    ) -> Result<()> {
        let owner_id = match resource_type {
            ResourceType::Company => owner_of(self.catalog.companies.as_ref(), id).await?,
            ResourceType::Event => owner_of(self.catalog.events.as_ref(), id).await?,
        };
        let decision = self
            .session
            .evaluate(resource_type, id, Some(owner_id.as_str()));
        emit(out, format_args!("{resource_type} '{id}': {decision}"))
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// `open <path>`
    pub async fn open(&self, out: &mut impl Write, path: &str) -> Result<()> {
        match self.navigator.navigate(path).await {
            Outcome::Render(route) => emit(out, format_args!("render {route}")),
            Outcome::Edit(target) => {
                let (name, id) = match &target {
                    EditTarget::Company(company) => (company.name(), company.id()),
                    EditTarget::Event(event) => (event.name(), event.id()),
                };
                emit(
                    out,
                    format_args!("edit {} '{id}' ({name})", target.resource_type()),
                )
            }
            Outcome::Redirect(destination) => emit(out, format_args!("redirect {destination}")),
            Outcome::Denied(resource_type) => {
                emit(out, format_args!("{}", denied_message(resource_type)))
            }
            Outcome::Superseded => emit(out, format_args!("superseded")),
        }
    }

    /// `my-listing`
    pub fn my_listing(&self, out: &mut impl Write) -> Result<()> {
        match self.navigator.redirect_to_edit() {
            Some(destination) => emit(out, format_args!("redirect {destination}")),
            None => emit(out, format_args!("no listing to edit")),
        }
    }

    // ------------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------------

    /// `create <type> --name .. [fields]`
    pub async fn create(
        &self,
        out: &mut impl Write,
        resource_type: ResourceType,
        fields: EditFields,
    ) -> Result<()> {
        let (id, json) = match resource_type {
            ResourceType::Company => {
                let company = self.editor.create_company(company_draft(fields)?).await?;
                (company.id.clone(), to_json(&company)?)
            }
            ResourceType::Event => {
                let event = self.editor.create_event(event_draft(fields)?).await?;
                (event.id.clone(), to_json(&event)?)
            }
        };
        log::info!("Created {resource_type} '{id}'");
        emit(out, format_args!("{json}"))
    }

    /// `edit <type> <id> [fields]`
    pub async fn edit(
        &self,
        out: &mut impl Write,
        resource_type: ResourceType,
        id: &str,
        fields: EditFields,
    ) -> Result<()> {
        let json = match resource_type {
            ResourceType::Company => {
                to_json(&self.editor.update_company(id, company_patch(fields)).await?)?
            }
            ResourceType::Event => {
                to_json(&self.editor.update_event(id, event_patch(fields)).await?)?
            }
        };
        emit(out, format_args!("{json}"))
    }

    /// `delete <type> <id>`
    pub async fn delete(
        &self,
        out: &mut impl Write,
        resource_type: ResourceType,
        id: &str,
    ) -> Result<()> {
        match resource_type {
            ResourceType::Company => self.editor.delete_company(id).await?,
            ResourceType::Event => self.editor.delete_event(id).await?,
        }
        emit(out, format_args!("Deleted {resource_type} '{id}'"))
    }
}

async fn browse<R: Resource>(
    out: &mut impl Write,
    provider: &dyn ResourceProvider<R>,
    action: BrowseAction,
) -> Result<()> {
    match action {
        BrowseAction::List { search } => {
            let records = provider.get_all().await?;
            let term = search.as_deref().unwrap_or_default();
            for record in records.iter().filter(|record| record.matches(term)) {
                emit(
                    out,
                    format_args!("{:>14}  {}  (owner {})", record.id(), record.name(), record.owner_id()),
                )?;
            }
            Ok(())
        }
        BrowseAction::Show { id } => {
            let record = provider.get_by_id(&id).await?.ok_or(Error::NotFound {
                kind: R::KIND,
                id: id.clone(),
            })?;
            emit(out, format_args!("{}", to_json(&record)?))
        }
    }
}

// ============================================================================
// Form mapping
// ============================================================================

fn company_patch(fields: EditFields) -> CompanyPatch {
    CompanyPatch {
        name: fields.name,
        description: fields.description,
        category: fields.category,
        phone: fields.phone,
        website: fields.website,
        address: fields.address,
        employees: fields.employees,
        founded: fields.founded,
        lat: fields.lat,
        lng: fields.lng,
    }
}

fn event_patch(fields: EditFields) -> EventPatch {
    EventPatch {
        name: fields.name,
        description: fields.description,
        date: fields.date,
        location: fields.location,
        lat: fields.lat,
        lng: fields.lng,
    }
}

// Drafts leave the owner blank; the editor stamps the current identity.
fn company_draft(fields: EditFields) -> Result<CompanyDraft> {
    Ok(CompanyDraft {
        name: required(ResourceType::Company, "name", fields.name)?,
        description: fields.description.unwrap_or_default(),
        category: fields.category.unwrap_or_default(),
        phone: fields.phone.unwrap_or_default(),
        website: fields.website.unwrap_or_default(),
        address: fields.address.unwrap_or_default(),
        employees: fields.employees.unwrap_or_default(),
        founded: fields
            .founded
            .unwrap_or_else(|| chrono::Local::now().year()),
        lat: fields.lat.unwrap_or(DEFAULT_LAT),
        lng: fields.lng.unwrap_or(DEFAULT_LNG),
        owner_id: String::new(),
    })
}

fn event_draft(fields: EditFields) -> Result<EventDraft> {
    Ok(EventDraft {
        name: required(ResourceType::Event, "name", fields.name)?,
        description: fields.description.unwrap_or_default(),
        date: required(ResourceType::Event, "date", fields.date)?,
        location: fields.location.unwrap_or_default(),
        lat: fields.lat.unwrap_or(DEFAULT_LAT),
        lng: fields.lng.unwrap_or(DEFAULT_LNG),
        owner_id: String::new(),
    })
}

fn required<T>(kind: ResourceType, field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(Error::MissingField { kind, field })
}

async fn owner_of<R: Resource>(provider: &dyn ResourceProvider<R>, id: &str) -> Result<String> {
    provider
        .get_by_id(id)
        .await?
        .map(|record| record.owner_id().to_string())
        .ok_or_else(|| Error::NotFound {
            kind: R::KIND,
            id: id.to_string(),
        })
}

fn to_json(value: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| mapventures_core::Error::from(e).into())
}

fn emit(out: &mut impl Write, args: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{args}").map_err(|e| mapventures_core::Error::from(e).into())
}

//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use mapventures_core::ResourceType;

use crate::config::CONFIG_ENV_VAR;

/// MapVentures Hub - company and event directory
#[derive(Parser, Debug)]
#[command(name = "mapventures", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and persist the session
    Login {
        /// Account email
        email: String,
        /// Account password
        #[arg(short, long, env = "MAPVENTURES_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log out and clear the persisted session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Browse companies
    Companies {
        /// What to do with the company listings
        #[command(subcommand)]
        action: BrowseAction,
    },
    /// Browse events
    Events {
        /// What to do with the event listings
        #[command(subcommand)]
        action: BrowseAction,
    },
    /// Check whether the current identity may edit a listing
    CanEdit {
        /// `company` or `event`
        resource_type: ResourceType,
        /// Listing id
        id: String,
    },
    /// Navigate to an in-app path and report what would render
    Open {
        /// Path such as `/admin/companies/1/edit`
        path: String,
    },
    /// Where "edit my listing" leads for the current identity
    MyListing,
    /// Create a listing owned by the current identity
    Create {
        /// `company` or `event`
        resource_type: ResourceType,
        /// Field values; `--name` is required, and `--date` for events
        #[command(flatten)]
        fields: EditFields,
    },
    /// Edit a listing
    Edit {
        /// `company` or `event`
        resource_type: ResourceType,
        /// Listing id
        id: String,
        /// Field replacements
        #[command(flatten)]
        fields: EditFields,
    },
    /// Delete a listing
    Delete {
        /// `company` or `event`
        resource_type: ResourceType,
        /// Listing id
        id: String,
    },
    /// Configuration management
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Listing subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum BrowseAction {
    /// List records
    List {
        /// Only records whose name contains this text (companies also match on category)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one record as JSON
    Show {
        /// Listing id
        id: String,
    },
}

/// Listing fields accepted by `create` and `edit`.
///
/// `edit` leaves unset fields unchanged. Fields that only exist on one
/// resource type are ignored for the other.
#[derive(Args, Debug, Clone, Default)]
pub struct EditFields {
    /// Name
    #[arg(long)]
    pub name: Option<String>,
    /// Description
    #[arg(long)]
    pub description: Option<String>,
    /// Company industry
    #[arg(long)]
    pub category: Option<String>,
    /// Company contact phone
    #[arg(long)]
    pub phone: Option<String>,
    /// Company website
    #[arg(long)]
    pub website: Option<String>,
    /// Company street address
    #[arg(long)]
    pub address: Option<String>,
    /// Company head-count bracket, e.g. `50-100`
    #[arg(long)]
    pub employees: Option<String>,
    /// Company founding year
    #[arg(long)]
    pub founded: Option<i32>,
    /// Event day, `YYYY-MM-DD`
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Event venue
    #[arg(long)]
    pub location: Option<String>,
    /// Map latitude
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Map longitude
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

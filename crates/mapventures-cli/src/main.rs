//! MapVentures CLI
//!
//! Command-line interface for MapVentures Hub.

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use mapventures_cli::cli::{Cli, Command};
use mapventures_cli::config::LoggingConfig;
use mapventures_cli::config_handlers::handle_config_command;
use mapventures_cli::{logging, App, HubConfig};
use mapventures_core::ResourceType;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    // Config commands must work even when the file is broken.
    let command = match cli.command {
        Command::Config { action } => {
            logging::init(&LoggingConfig::default(), cli.verbose);
            return Ok(handle_config_command(config_path, action)?);
        }
        command => command,
    };

    let config = HubConfig::load(config_path).context("loading configuration")?;
    logging::init(&config.logging, cli.verbose);
    tracing::debug!(?config, "configuration loaded");

    let app = App::from_config(&config)?;
    let mut out = std::io::stdout().lock();

    match command {
        Command::Login { email, password } => app.login(&mut out, &email, &password)?,
        Command::Logout => app.logout(&mut out)?,
        Command::Whoami => app.whoami(&mut out)?,
        Command::Companies { action } => {
            app.browse(&mut out, ResourceType::Company, action).await?
        }
        Command::Events { action } => app.browse(&mut out, ResourceType::Event, action).await?,
        Command::CanEdit { resource_type, id } => {
            app.can_edit(&mut out, resource_type, &id).await?
        }
        Command::Open { path } => app.open(&mut out, &path).await?,
        Command::MyListing => app.my_listing(&mut out)?,
        Command::Create {
            resource_type,
            fields,
        } => app.create(&mut out, resource_type, fields).await?,
        Command::Edit {
            resource_type,
            id,
            fields,
        } => app.edit(&mut out, resource_type, &id, fields).await?,
        Command::Delete { resource_type, id } => {
            app.delete(&mut out, resource_type, &id).await?
        }
        Command::Config { .. } => {}
    }

    Ok(())
}

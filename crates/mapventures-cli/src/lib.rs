//! # mapventures-cli
//!
//! The `mapventures` command-line tool.
//!
//! - [`cli`]: argument definitions
//! - [`config`]: the TOML configuration file
//! - [`config_handlers`]: `config path|show|init`
//! - [`commands`]: login, browsing, permission checks, navigation, edits
//! - [`logging`]: subscriber setup

#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use commands::App;
pub use config::HubConfig;
pub use error::{Error, Result};

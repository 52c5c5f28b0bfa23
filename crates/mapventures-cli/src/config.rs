//! The `mapventures` configuration file.
//!
//! ```toml
//! [session]
//! # path = "/home/me/.local/share/mapventures/currentUser.json"
//!
//! [api]
//! simulate_latency = true
//!
//! [logging]
//! filter = "warn,mapventures=info"
//! ```
//!
//! Every key is optional. A missing file means all defaults.

use std::path::{Path, PathBuf};

use mapventures_store::Latency;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name used for the config directory and file.
pub const PROJECT_NAME: &str = "mapventures";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "MAPVENTURES_CONFIG";

/// Default log filter when neither the file nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn,mapventures=info";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Where the session is persisted.
    pub session: SessionConfig,
    /// Provider behavior.
    pub api: ApiConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

/// `[session]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session file. Defaults to `currentUser.json` in the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// `[api]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Sleep like the hosted mock API before answering.
    pub simulate_latency: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive. `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl HubConfig {
    /// `<platform config dir>/mapventures/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// The explicit path if given, else the default path.
    ///
    /// `--config` and `MAPVENTURES_CONFIG` both arrive here as `explicit`.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load the resolved config file, or defaults if it does not exist.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::debug!("No config file at {}; using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                log::debug!("No platform config directory; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse one config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Session file to use.
    pub fn session_path(&self) -> Result<PathBuf> {
        self.session
            .path
            .clone()
            .or_else(mapventures_auth::default_session_path)
            .ok_or_else(|| Error::config("Could not determine data directory for the session file"))
    }

    /// Provider latency to simulate.
    pub fn latency(&self) -> Latency {
        if self.api.simulate_latency {
            Latency::mock()
        } else {
            Latency::none()
        }
    }
}

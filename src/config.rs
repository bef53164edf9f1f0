//! Layered configuration
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `config.toml` in the platform config directory (or `--config <path>`)
//! 3. `TICKET_DESK__SECTION__KEY` environment variables
//! 4. command-line overrides applied by the binary

use crate::error::Result;
use config::{Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default address of the ticket backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Page size used by the "next page" heuristic
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; the `/api/tickets/...` paths are appended to it
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// A page with fewer tickets than this is treated as the last one
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: 30,
            },
            ui: UiConfig {
                page_size: DEFAULT_PAGE_SIZE,
            },
        }
    }
}

impl ApiConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from defaults, file and environment
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.timeout_secs", defaults.api.timeout_secs)?
            .set_default("ui.page_size", defaults.ui.page_size as u64)?;

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            },
            None => {
                if let Some(default_path) = Self::default_path() {
                    tracing::debug!("Looking for config at {}", default_path.display());
                    builder = builder.add_source(File::from(default_path).required(false));
                }
            },
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix("TICKET_DESK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Platform config file location, e.g. `~/.config/ticket-desk/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ticket-desk").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Replace the base URL, e.g. from `--base-url`
    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.api.base_url = url;
        }
        self
    }
}

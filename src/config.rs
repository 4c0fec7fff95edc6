//! Application configuration.
//!
//! The root path used to be a hard-coded literal inside the view model;
//! it is injected configuration now, read from a JSON file in the user
//! config directory with environment overrides on top.

use std::env;
use std::fs;
use std::path::PathBuf;

use color_eyre::{eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};

/// Environment override for the root path.
pub const ROOT_ENV: &str = "DIRVIEW_ROOT";
/// Environment override for the log filter.
pub const LOG_ENV: &str = "DIRVIEW_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory whose immediate subdirectories are listed.
    pub root: PathBuf,
    /// tracing env-filter directive; `RUST_LOG` wins over this when set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Set the root path.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Location of the config file, when a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dirview").join("config.json"))
    }

    /// Load the config file if present, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let json = fs::read_to_string(&path)
                    .wrap_err(format!("Failed to read config from {:?}", path))?;
                serde_json::from_str(&json).wrap_err("Failed to deserialize config")?
            }
            _ => Self::default(),
        };

        if let Ok(root) = env::var(ROOT_ENV) {
            config.root = PathBuf::from(root);
        }
        if let Ok(filter) = env::var(LOG_ENV) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

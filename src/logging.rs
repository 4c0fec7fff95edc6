//! Logging initialization.
//!
//! The terminal is owned by the TUI, so records are appended to a file
//! under the user data directory. Level selection comes from the config's
//! env-filter directive, with `RUST_LOG` taking precedence as usual.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Where log records are written.
pub fn log_path() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| eyre!("no user data directory available"))?
        .join("dirview");
    if !dir.exists() {
        fs::create_dir_all(&dir).wrap_err("Failed to create log directory")?;
    }
    Ok(dir.join("dirview.log"))
}

/// Install the global tracing subscriber. Call once, before the host is
/// built, so composition logs are captured.
pub fn init(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .wrap_err(format!("Invalid log filter {:?}", config.log_filter))?;

    let path = log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err(format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

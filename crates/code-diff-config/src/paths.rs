//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/code-diff/`, `~/.cache/code-diff/`
//! - macOS: `~/Library/Application Support/code-diff/`, `~/Library/Caches/code-diff/`
//! - Windows: `%APPDATA%\code-diff\`, `%LOCALAPPDATA%\code-diff\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "code-diff";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory (log files)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the persisted client state (tokens, user profile)
pub fn storage_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("storage.json"))
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

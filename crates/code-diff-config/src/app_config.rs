//! Application configuration
//!
//! Configuration loaded from `.code-diff.toml`, with environment overrides
//! for the two base URLs.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding `api_base_url`
pub const API_URL_ENV: &str = "CODE_DIFF_API_URL";
/// Environment variable overriding `share_base_url`
pub const SHARE_URL_ENV: &str = "CODE_DIFF_SHARE_URL";

/// Initial layout of the diff editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewModeSetting {
    #[default]
    Split,
    Inline,
}

/// Application configuration loaded from .code-diff.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the diff REST API (e.g., "https://api.example.com")
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL used to build shareable links (`{share_base_url}/{identifier}`)
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Quiet period before editor keystrokes are committed to state
    #[serde(default = "default_edit_debounce_ms")]
    pub edit_debounce_ms: u64,

    /// Delay before returning home after a diff was not found
    #[serde(default = "default_not_found_redirect_ms")]
    pub not_found_redirect_ms: u64,

    /// Language selected on the home route
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default = "default_dark_theme")]
    pub dark_theme: bool,

    #[serde(default)]
    pub view_mode: ViewModeSetting,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_share_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_edit_debounce_ms() -> u64 {
    300
}

fn default_not_found_redirect_ms() -> u64 {
    2000
}

fn default_language() -> String {
    "json".to_string()
}

fn default_dark_theme() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            share_base_url: default_share_base_url(),
            edit_debounce_ms: default_edit_debounce_ms(),
            not_found_redirect_ms: default_not_found_redirect_ms(),
            default_language: default_language(),
            dark_theme: default_dark_theme(),
            view_mode: ViewModeSetting::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    /// Environment overrides are applied last.
    pub fn load() -> Self {
        let config = match crate::load_config_file() {
            Some(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        };

        config.with_overrides(env::var(API_URL_ENV).ok(), env::var(SHARE_URL_ENV).ok())
    }

    /// Replace the base URLs when an override is given
    pub fn with_overrides(mut self, api_url: Option<String>, share_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Overriding api_base_url with {}", url);
            self.api_base_url = url;
        }
        if let Some(url) = share_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Overriding share_base_url with {}", url);
            self.share_base_url = url;
        }
        self
    }

    /// Shareable link for a diff identifier
    pub fn share_url(&self, identifier: &str) -> String {
        format!("{}/{}", self.share_base_url.trim_end_matches('/'), identifier)
    }
}

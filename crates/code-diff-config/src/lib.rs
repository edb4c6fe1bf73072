//! Configuration and persisted state for code-diff
//!
//! This crate provides:
//! - Config and cache directory paths
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Local storage for the login session and per-diff access tokens

pub mod app_config;
pub mod config_file;
pub mod local_storage;
pub mod paths;

pub use app_config::{AppConfig, ViewModeSetting};
pub use config_file::load_config_file;
pub use local_storage::{LocalStorage, StoredState};
pub use paths::{app_config_path, cache_dir, config_dir, storage_path};

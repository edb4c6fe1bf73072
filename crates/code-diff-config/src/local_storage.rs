//! Persisted client state
//!
//! A small JSON document playing the role of the browser's persistent
//! storage: the login session (`access_token`, `refresh_token`, `user`) and
//! the access tokens handed out when a diff is created, keyed by the diff's
//! identifier.
//!
//! Every accessor re-reads the file. Nothing is held in memory between
//! calls, so a `logout` from another process is visible to the next call.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout of the storage file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// JSON-serialized user profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<serde_json::Value>,
    /// Diff identifier → resource access token
    #[serde(default)]
    pub diff_tokens: BTreeMap<String, String>,
}

/// Handle to the storage file
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    /// Use the storage file at `path` (created on first write)
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the storage file in the config directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(crate::paths::storage_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. A missing or unreadable file reads as empty.
    pub fn load(&self) -> StoredState {
        match self.load_from_path() {
            Ok(state) => state,
            Err(e) => {
                if self.path.exists() {
                    log::warn!("Ignoring unreadable storage file {:?}: {:#}", self.path, e);
                }
                StoredState::default()
            }
        }
    }

    fn load_from_path(&self) -> Result<StoredState> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file: {:?}", self.path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse storage file: {:?}", self.path))
    }

    fn save(&self, state: &StoredState) -> Result<()> {
        let content = serde_json::to_string_pretty(state).context("Failed to serialize storage")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write storage file: {:?}", self.path))
    }

    fn update(&self, f: impl FnOnce(&mut StoredState)) -> Result<()> {
        let mut state = self.load();
        f(&mut state);
        self.save(&state)
    }

    /// Bearer token of the logged-in user
    pub fn access_token(&self) -> Option<String> {
        self.load().access_token.filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.load().refresh_token
    }

    pub fn user(&self) -> Option<serde_json::Value> {
        self.load().user
    }

    pub fn is_logged_in(&self) -> bool {
        self.access_token().is_some()
    }

    /// Persist a login session, replacing any previous one
    pub fn save_session(
        &self,
        access: &str,
        refresh: &str,
        user: serde_json::Value,
    ) -> Result<()> {
        self.update(|state| {
            state.access_token = Some(access.to_string());
            state.refresh_token = Some(refresh.to_string());
            state.user = Some(user);
        })?;
        log::info!("Saved login session to {:?}", self.path);
        Ok(())
    }

    /// Forget the login session. Diff access tokens are kept.
    pub fn clear_session(&self) -> Result<()> {
        self.update(|state| {
            state.access_token = None;
            state.refresh_token = None;
            state.user = None;
        })?;
        log::info!("Cleared login session in {:?}", self.path);
        Ok(())
    }

    /// Access token previously returned when `identifier` was created here
    pub fn resource_token(&self, identifier: &str) -> Option<String> {
        self.load().diff_tokens.get(identifier).cloned()
    }

    pub fn remember_resource_token(&self, identifier: &str, token: &str) -> Result<()> {
        self.update(|state| {
            state
                .diff_tokens
                .insert(identifier.to_string(), token.to_string());
        })
    }

    pub fn forget_resource_token(&self, identifier: &str) -> Result<()> {
        self.update(|state| {
            state.diff_tokens.remove(identifier);
        })
    }
}

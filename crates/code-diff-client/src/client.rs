//! Diff client trait and cache mode definitions
//!
//! This module defines the core `DiffClient` trait that all client
//! implementations must satisfy, as well as the `CacheMode` enum for
//! controlling caching behavior.

use crate::error::ClientError;
use crate::types::{
    decode_resource, DiffId, DiffPage, DiffPayload, DiffResource, LoginSession,
};
use async_trait::async_trait;

/// Cache behavior mode for diff clients
///
/// Controls how the client interacts with the cache layer.
/// This is set at client construction time, not per-request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// No caching - neither read nor write
    None,

    /// Write-only - skip cache reads, but write responses to cache
    /// Use for "force refresh" to get fresh data while populating cache
    WriteOnly,

    /// Read-only - read from cache, but don't update it
    ReadOnly,

    /// Full caching - read from cache, write to cache
    #[default]
    ReadWrite,
}

impl CacheMode {
    /// Should we attempt to read from cache before making API call?
    pub fn should_read(&self) -> bool {
        matches!(self, CacheMode::ReadOnly | CacheMode::ReadWrite)
    }

    /// Should we write API responses to cache?
    pub fn should_write(&self) -> bool {
        matches!(self, CacheMode::WriteOnly | CacheMode::ReadWrite)
    }
}

/// Diff resource API client trait
///
/// Implementations can be direct (hitting the API) or decorated with
/// caching. All futures are cancel-safe in the sense that dropping them
/// (e.g. by aborting the task that polls them) abandons the request
/// without side effects on the caller's state.
#[async_trait]
pub trait DiffClient: Send + Sync {
    /// Persist a new diff
    ///
    /// The returned resource carries the backend-assigned `identifier` and
    /// the `access_token` that later proves edit rights.
    async fn create(&self, payload: &DiffPayload) -> Result<DiffResource, ClientError>;

    /// Fetch a diff and return the response body as received
    ///
    /// Fails with `ClientError::NotFound` when the backend answers 404.
    async fn read_raw(&self, id: &DiffId) -> Result<String, ClientError>;

    /// Fetch a diff by identifier
    async fn read(&self, id: &DiffId) -> Result<DiffResource, ClientError> {
        let body = self.read_raw(id).await?;
        decode_resource(&body, id)
    }

    /// Replace the snippets and language of an existing diff
    async fn update(&self, id: &DiffId, payload: &DiffPayload)
        -> Result<DiffResource, ClientError>;

    /// List the logged-in user's diffs (bearer token required)
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number
    /// * `query` - Optional free-text filter
    async fn list(&self, page: u32, query: Option<&str>) -> Result<DiffPage, ClientError>;

    /// Flip the `is_active` flag (bearer token required)
    async fn toggle_active(&self, id: &DiffId) -> Result<DiffResource, ClientError>;

    /// Delete a diff (bearer token required)
    async fn delete(&self, id: &DiffId) -> Result<(), ClientError>;

    /// Exchange an identity-provider token for an API session
    async fn google_login(&self, token: &str) -> Result<LoginSession, ClientError>;
}

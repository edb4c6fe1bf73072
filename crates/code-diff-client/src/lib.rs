//! Diff resource API client with caching support
//!
//! This crate provides a trait-based client for the code-diff REST API with
//! optional session caching. The design follows the decorator pattern,
//! allowing caching behavior to be composed with the base client.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                DiffClient trait                  │
//! │  - create() / read() / read_raw() / update()     │
//! │  - list() / toggle_active() / delete()           │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ HttpDiffClient  │         │ CachedDiffClient    │
//! │ (direct API)    │◄────────│ (decorator)         │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use code_diff_client::{CacheMode, CachedDiffClient, DiffClient, DiffId, HttpDiffClient};
//! use code_diff_cache::SessionCache;
//! use code_diff_config::LocalStorage;
//! use std::sync::{Arc, Mutex};
//!
//! # async fn example() -> Result<(), code_diff_client::ClientError> {
//! let storage = LocalStorage::open_default().expect("config dir");
//! let http = HttpDiffClient::new("http://localhost:8000", Arc::new(storage))?;
//!
//! let cache = Arc::new(Mutex::new(SessionCache::new()));
//! let client = CachedDiffClient::new(http, cache, CacheMode::ReadWrite);
//!
//! let diff = client.read(&DiffId::new("a1b2c3")).await?;
//! println!("{} vs {}", diff.code_before, diff.code_after);
//! # Ok(())
//! # }
//! ```

pub mod cached_client;
pub mod client;
pub mod error;
pub mod http_client;
pub mod token;
pub mod types;

pub use cached_client::CachedDiffClient;
pub use client::{CacheMode, DiffClient};
pub use error::{ClientError, ErrorKind};
pub use http_client::HttpDiffClient;
pub use token::{StaticToken, TokenSource};
pub use types::{DiffId, DiffPage, DiffPayload, DiffResource, LoginSession, UserProfile};

// Re-export cache types for convenience
pub use code_diff_cache::{CacheStats, SessionCache};

//! Session-scoped result cache
//!
//! Holds the verbatim JSON of every diff resource fetched during the current
//! session, keyed by `diff-{identifier}`. Entries never expire and the cache
//! is never written to disk: dropping the cache ends the session.
//!
//! Invalidation is explicit. Callers that mutate a resource remotely must
//! call [`SessionCache::invalidate`] for its identifier, otherwise a later
//! read in the same session serves the old body.

use chrono::{DateTime, Utc};
use log::debug;
use std::collections::HashMap;

/// Prefix shared by every cache key
pub const KEY_PREFIX: &str = "diff-";

/// A cached response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedEntry {
    /// Verbatim JSON of the resource
    pub body: String,
    /// When the entry was written
    pub stored_at: DateTime<Utc>,
}

/// Cache hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// In-memory key → JSON cache for one session
#[derive(Debug, Default)]
pub struct SessionCache {
    entries: HashMap<String, CachedEntry>,
    hits: u64,
    misses: u64,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage key for a resource identifier
    pub fn key_for(identifier: &str) -> String {
        format!("{}{}", KEY_PREFIX, identifier)
    }

    /// Look up the entry for `identifier`, recording a hit or a miss
    pub fn get(&mut self, identifier: &str) -> Option<CachedEntry> {
        let key = Self::key_for(identifier);
        match self.entries.get(&key) {
            Some(entry) => {
                self.hits += 1;
                debug!("SessionCache: HIT {}", key);
                Some(entry.clone())
            }
            None => {
                self.misses += 1;
                debug!("SessionCache: MISS {}", key);
                None
            }
        }
    }

    /// Look up without touching the counters
    pub fn peek(&self, identifier: &str) -> Option<&CachedEntry> {
        self.entries.get(&Self::key_for(identifier))
    }

    /// Store (or overwrite) the body for `identifier`
    pub fn set(&mut self, identifier: &str, body: impl Into<String>) {
        let key = Self::key_for(identifier);
        debug!("SessionCache: SET {}", key);
        self.entries.insert(
            key,
            CachedEntry {
                body: body.into(),
                stored_at: Utc::now(),
            },
        );
    }

    /// Drop the entry for `identifier`. Returns whether one existed.
    pub fn invalidate(&mut self, identifier: &str) -> bool {
        let key = Self::key_for(identifier);
        let removed = self.entries.remove(&key).is_some();
        if removed {
            debug!("SessionCache: invalidated {}", key);
        }
        removed
    }

    /// Drop every entry whose key contains `pattern`. Returns the number removed.
    pub fn invalidate_pattern(&mut self, pattern: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.contains(pattern));
        let removed = before - self.entries.len();
        debug!(
            "SessionCache: invalidated {} entries matching '{}'",
            removed, pattern
        );
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

//! Cached diff API client (decorator pattern)
//!
//! Wraps any `DiffClient` implementation to add session caching of reads.
//! The cache mode determines whether to read from cache, write to cache, or both.
//! Entries hold the response body exactly as received, keyed by the
//! identifier that was requested.

use crate::client::{CacheMode, DiffClient};
use crate::error::ClientError;
use crate::types::{
    decode_resource, DiffId, DiffPage, DiffPayload, DiffResource, LoginSession,
};
use async_trait::async_trait;
use code_diff_cache::SessionCache;
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cached diff client using the decorator pattern
///
/// Wraps an inner `DiffClient` and adds caching behavior based on the
/// configured `CacheMode`. Successful reads populate the cache; successful
/// updates, toggles and deletes invalidate the entry for that identifier so
/// a later read in the same session never serves content older than the
/// last mutation made through this client.
#[derive(Debug, Clone)]
pub struct CachedDiffClient<C: DiffClient + Clone> {
    inner: C,
    cache: Arc<Mutex<SessionCache>>,
    mode: CacheMode,
}

impl<C: DiffClient + Clone> CachedDiffClient<C> {
    /// Create a new cached client
    ///
    /// # Arguments
    ///
    /// * `inner` - The inner client to delegate API calls to
    /// * `cache` - Shared cache instance
    /// * `mode` - Cache behavior mode
    pub fn new(inner: C, cache: Arc<Mutex<SessionCache>>, mode: CacheMode) -> Self {
        Self { inner, cache, mode }
    }

    pub fn cache_mode(&self) -> CacheMode {
        self.mode
    }

    /// Create a new client with a different cache mode sharing the same cache
    pub fn with_mode(&self, mode: CacheMode) -> CachedDiffClient<C> {
        CachedDiffClient {
            inner: self.inner.clone(),
            cache: Arc::clone(&self.cache),
            mode,
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    fn lock_cache(&self) -> MutexGuard<'_, SessionCache> {
        // The cache holds plain data, a poisoned lock leaves it consistent
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Cached body for `id` along with the resource it decodes to
    fn lookup(&self, id: &DiffId) -> Option<(String, DiffResource)> {
        if !self.mode.should_read() {
            return None;
        }

        let entry = self.lock_cache().get(id.as_str())?;
        match decode_resource(&entry.body, id) {
            Ok(resource) => {
                debug!("Cache HIT for diff {}", id);
                Some((entry.body, resource))
            }
            Err(e) => {
                debug!("Failed to parse cached diff {}: {}", id, e);
                None
            }
        }
    }

    /// Synchronous cache lookup, without any network fallback
    ///
    /// Returns `None` when the mode forbids cache reads, on a miss, or when
    /// the cached body no longer parses.
    pub fn cached(&self, id: &DiffId) -> Option<DiffResource> {
        self.lookup(id).map(|(_, resource)| resource)
    }

    fn cache_set(&self, id: &DiffId, body: &str) {
        if self.mode.should_write() {
            self.lock_cache().set(id.as_str(), body);
        }
    }

    /// Fetch from the inner client and cache the body if it decodes
    async fn fetch(&self, id: &DiffId) -> Result<(String, DiffResource), ClientError> {
        debug!("Cache MISS for diff {}", id);
        let body = self.inner.read_raw(id).await?;
        let resource = decode_resource(&body, id)?;
        self.cache_set(id, &body);
        Ok((body, resource))
    }

    fn cache_invalidate(&self, id: &DiffId) {
        if self.lock_cache().invalidate(id.as_str()) {
            debug!("Cache invalidated for diff {}", id);
        }
    }
}

#[async_trait]
impl<C: DiffClient + Clone> DiffClient for CachedDiffClient<C> {
    async fn create(&self, payload: &DiffPayload) -> Result<DiffResource, ClientError> {
        // Mutations are never cached - pass through directly
        self.inner.create(payload).await
    }

    async fn read_raw(&self, id: &DiffId) -> Result<String, ClientError> {
        if let Some((body, _)) = self.lookup(id) {
            return Ok(body);
        }
        self.fetch(id).await.map(|(body, _)| body)
    }

    async fn read(&self, id: &DiffId) -> Result<DiffResource, ClientError> {
        if let Some((_, resource)) = self.lookup(id) {
            return Ok(resource);
        }
        self.fetch(id).await.map(|(_, resource)| resource)
    }

    async fn update(
        &self,
        id: &DiffId,
        payload: &DiffPayload,
    ) -> Result<DiffResource, ClientError> {
        let result = self.inner.update(id, payload).await;
        if result.is_ok() {
            self.cache_invalidate(id);
        }
        result
    }

    async fn list(&self, page: u32, query: Option<&str>) -> Result<DiffPage, ClientError> {
        // Account listings change underneath us - always fetch
        self.inner.list(page, query).await
    }

    async fn toggle_active(&self, id: &DiffId) -> Result<DiffResource, ClientError> {
        let result = self.inner.toggle_active(id).await;
        if result.is_ok() {
            self.cache_invalidate(id);
        }
        result
    }

    async fn delete(&self, id: &DiffId) -> Result<(), ClientError> {
        let result = self.inner.delete(id).await;
        if result.is_ok() {
            self.cache_invalidate(id);
        }
        result
    }

    async fn google_login(&self, token: &str) -> Result<LoginSession, ClientError> {
        self.inner.google_login(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Mock client for testing
    #[derive(Debug, Clone, Default)]
    struct MockClient {
        diffs: Arc<Mutex<HashMap<DiffId, DiffResource>>>,
        raw: Arc<Mutex<HashMap<DiffId, String>>>,
        call_count: Arc<Mutex<usize>>,
    }

    impl MockClient {
        fn with(resources: Vec<DiffResource>) -> Self {
            let mock = Self::default();
            for r in resources {
                mock.diffs.lock().unwrap().insert(r.identifier.clone(), r);
            }
            mock
        }

        /// Serve `body` verbatim for reads of `id`
        fn with_raw(self, id: &str, body: &str) -> Self {
            self.raw
                .lock()
                .unwrap()
                .insert(DiffId::new(id), body.to_string());
            self
        }

        fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }

        fn count(&self) {
            *self.call_count.lock().unwrap() += 1;
        }
    }

    #[async_trait]
    impl DiffClient for MockClient {
        async fn create(&self, payload: &DiffPayload) -> Result<DiffResource, ClientError> {
            self.count();
            let id = DiffId::new(format!("id{}", self.diffs.lock().unwrap().len() + 1));
            let resource = DiffResource {
                identifier: id.clone(),
                code_before: payload.code_before.clone(),
                code_after: payload.code_after.clone(),
                language: payload.language.clone(),
                access_token: Some(format!("token-{}", id)),
                is_active: true,
                created_at: None,
                updated_at: None,
            };
            self.diffs.lock().unwrap().insert(id, resource.clone());
            Ok(resource)
        }

        async fn read_raw(&self, id: &DiffId) -> Result<String, ClientError> {
            self.count();
            if let Some(body) = self.raw.lock().unwrap().get(id) {
                return Ok(body.clone());
            }
            self.diffs
                .lock()
                .unwrap()
                .get(id)
                .map(|r| serde_json::json!({ "data": r }).to_string())
                .ok_or_else(|| ClientError::NotFound(id.to_string()))
        }

        async fn update(
            &self,
            id: &DiffId,
            payload: &DiffPayload,
        ) -> Result<DiffResource, ClientError> {
            self.count();
            let mut diffs = self.diffs.lock().unwrap();
            let resource = diffs
                .get_mut(id)
                .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
            resource.code_before = payload.code_before.clone();
            resource.code_after = payload.code_after.clone();
            resource.language = payload.language.clone();
            Ok(resource.clone())
        }

        async fn list(&self, _page: u32, _query: Option<&str>) -> Result<DiffPage, ClientError> {
            self.count();
            let results: Vec<_> = self.diffs.lock().unwrap().values().cloned().collect();
            Ok(DiffPage {
                count: results.len() as u64,
                next: None,
                previous: None,
                results,
            })
        }

        async fn toggle_active(&self, id: &DiffId) -> Result<DiffResource, ClientError> {
            self.count();
            let mut diffs = self.diffs.lock().unwrap();
            let resource = diffs
                .get_mut(id)
                .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
            resource.is_active = !resource.is_active;
            Ok(resource.clone())
        }

        async fn delete(&self, id: &DiffId) -> Result<(), ClientError> {
            self.count();
            self.diffs
                .lock()
                .unwrap()
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| ClientError::NotFound(id.to_string()))
        }

        async fn google_login(&self, _token: &str) -> Result<LoginSession, ClientError> {
            self.count();
            Err(ClientError::Auth("mock".to_string()))
        }
    }

    fn create_test_diff(id: &str) -> DiffResource {
        DiffResource {
            identifier: DiffId::new(id),
            code_before: "{\"a\": 1}".to_string(),
            code_after: "{\"a\": 2}".to_string(),
            language: "json".to_string(),
            access_token: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn new_cache() -> Arc<Mutex<SessionCache>> {
        Arc::new(Mutex::new(SessionCache::new()))
    }

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let mock = MockClient::with(vec![create_test_diff("a")]);
        let client = CachedDiffClient::new(mock.clone(), new_cache(), CacheMode::ReadWrite);

        let first = client.read(&DiffId::new("a")).await.unwrap();
        assert_eq!(mock.call_count(), 1);

        let second = client.read(&DiffId::new("a")).await.unwrap();
        assert_eq!(mock.call_count(), 1); // Still 1, used cache
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_cache_mode_none_skips_cache() {
        let mock = MockClient::with(vec![create_test_diff("a")]);
        let client = CachedDiffClient::new(mock.clone(), new_cache(), CacheMode::None);

        client.read(&DiffId::new("a")).await.unwrap();
        client.read(&DiffId::new("a")).await.unwrap();
        assert_eq!(mock.call_count(), 2);
        assert!(client.cached(&DiffId::new("a")).is_none());
    }

    #[tokio::test]
    async fn test_cache_mode_write_only_skips_read() {
        let mock = MockClient::with(vec![create_test_diff("a")]);
        let cache = new_cache();
        let client = CachedDiffClient::new(mock.clone(), cache.clone(), CacheMode::WriteOnly);

        client.read(&DiffId::new("a")).await.unwrap();
        client.read(&DiffId::new("a")).await.unwrap();
        assert_eq!(mock.call_count(), 2);

        // But cache should have the data (verify with ReadWrite mode)
        let read_client = client.with_mode(CacheMode::ReadWrite);
        read_client.read(&DiffId::new("a")).await.unwrap();
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_not_found_is_not_cached() {
        let mock = MockClient::default();
        let client = CachedDiffClient::new(mock.clone(), new_cache(), CacheMode::ReadWrite);

        let err = client.read(&DiffId::new("missing")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        client.read(&DiffId::new("missing")).await.unwrap_err();
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_update_invalidates_cached_entry() {
        let mock = MockClient::with(vec![create_test_diff("a")]);
        let client = CachedDiffClient::new(mock.clone(), new_cache(), CacheMode::ReadWrite);
        let id = DiffId::new("a");

        client.read(&id).await.unwrap();
        let payload = DiffPayload::new("x", "y", "python").unwrap();
        client.update(&id, &payload).await.unwrap();
        assert!(client.cached(&id).is_none());

        // Revisit fetches the fresh content
        let fresh = client.read(&id).await.unwrap();
        assert_eq!(fresh.code_before, "x");
        assert_eq!(fresh.language, "python");
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_cached_entry() {
        let mock = MockClient::with(vec![create_test_diff("a")]);
        let cache = new_cache();
        let client = CachedDiffClient::new(mock.clone(), cache.clone(), CacheMode::ReadWrite);

        client.read(&DiffId::new("a")).await.unwrap();
        cache.lock().unwrap().set("b", "{}");
        let payload = DiffPayload::new("x", "y", "json").unwrap();
        client.update(&DiffId::new("b"), &payload).await.unwrap_err();

        assert!(client.cached(&DiffId::new("a")).is_some());
        assert_eq!(cache.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_and_delete_invalidate() {
        let mock = MockClient::with(vec![create_test_diff("a"), create_test_diff("b")]);
        let client = CachedDiffClient::new(mock.clone(), new_cache(), CacheMode::ReadWrite);
        let a = DiffId::new("a");
        let b = DiffId::new("b");

        client.read(&a).await.unwrap();
        client.read(&b).await.unwrap();

        let toggled = client.toggle_active(&a).await.unwrap();
        assert!(!toggled.is_active);
        assert!(client.cached(&a).is_none());

        client.delete(&b).await.unwrap();
        assert!(client.cached(&b).is_none());
    }

    #[tokio::test]
    async fn test_create_then_read_round_trip() {
        let mock = MockClient::default();
        let client = CachedDiffClient::new(mock.clone(), new_cache(), CacheMode::ReadWrite);

        let payload = DiffPayload::new("fn a() {}", "fn b() {}", "rust").unwrap();
        let created = client.create(&payload).await.unwrap();
        assert!(created.access_token.is_some());

        let read = client.read(&created.identifier).await.unwrap();
        assert_eq!(read.code_before, payload.code_before);
        assert_eq!(read.code_after, payload.code_after);
        assert_eq!(read.language, payload.language);
    }

    #[tokio::test]
    async fn test_cache_keeps_body_verbatim_under_requested_id() {
        let body = r#"{"data": {"code_before": "a", "code_after": "b", "language": "go", "views": 7}}"#;
        let mock = MockClient::default().with_raw("short", body);
        let cache = new_cache();
        let client = CachedDiffClient::new(mock.clone(), cache.clone(), CacheMode::ReadWrite);
        let id = DiffId::new("short");

        let resource = client.read(&id).await.unwrap();
        assert_eq!(resource.identifier, id);
        assert_eq!(resource.language, "go");

        let entry = cache.lock().unwrap().get("short").unwrap();
        assert_eq!(entry.body, body);

        assert_eq!(client.read_raw(&id).await.unwrap(), body);
        assert_eq!(client.cached(&id).map(|r| r.code_after).as_deref(), Some("b"));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_not_cached() {
        let mock = MockClient::default().with_raw("bad", "<html>maintenance</html>");
        let cache = new_cache();
        let client = CachedDiffClient::new(mock.clone(), cache.clone(), CacheMode::ReadWrite);

        let err = client.read(&DiffId::new("bad")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(cache.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_falls_back_to_network() {
        let mock = MockClient::with(vec![create_test_diff("a")]);
        let cache = new_cache();
        cache.lock().unwrap().set("a", "not json");
        let client = CachedDiffClient::new(mock.clone(), cache, CacheMode::ReadWrite);

        let resource = client.read(&DiffId::new("a")).await.unwrap();
        assert_eq!(resource.language, "json");
        assert_eq!(mock.call_count(), 1);
    }
}

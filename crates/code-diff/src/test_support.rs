//! In-memory `DiffClient` for middleware tests

use async_trait::async_trait;
use code_diff_client::{
    ClientError, DiffClient, DiffId, DiffPage, DiffPayload, DiffResource, LoginSession,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PAGE_SIZE: usize = 2;

pub fn resource(id: &str, before: &str, after: &str) -> DiffResource {
    DiffResource {
        identifier: DiffId::new(id),
        code_before: before.to_string(),
        code_after: after.to_string(),
        language: "json".to_string(),
        access_token: None,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

#[derive(Clone, Default)]
pub struct MockClient {
    diffs: Arc<Mutex<BTreeMap<DiffId, DiffResource>>>,
    delays: HashMap<DiffId, Duration>,
    write_delay: Duration,
    fail_reads: bool,
    authorized: bool,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
    lists: Arc<AtomicUsize>,
}

impl MockClient {
    pub fn with(resources: Vec<DiffResource>) -> Self {
        let mock = Self::default();
        {
            let mut diffs = mock.diffs.lock().unwrap();
            for r in resources {
                diffs.insert(r.identifier.clone(), r);
            }
        }
        mock
    }

    /// Delay reads of `id`
    pub fn with_delay(mut self, id: &str, delay: Duration) -> Self {
        self.delays.insert(DiffId::new(id), delay);
        self
    }

    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = delay;
        self
    }

    /// Every read fails with a network error
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Accept account-scoped calls as if a bearer token were present
    pub fn authorized(mut self) -> Self {
        self.authorized = true;
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn lists(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: &str) -> Option<DiffResource> {
        self.diffs.lock().unwrap().get(&DiffId::new(id)).cloned()
    }

    /// Remove a diff behind the client's back
    pub fn delete_now(&self, id: &str) {
        self.diffs.lock().unwrap().remove(&DiffId::new(id));
    }

    fn require_auth(&self) -> Result<(), ClientError> {
        if self.authorized {
            Ok(())
        } else {
            Err(ClientError::Auth("not logged in".to_string()))
        }
    }

    fn lookup(&self, id: &DiffId) -> Result<DiffResource, ClientError> {
        self.diffs
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl DiffClient for MockClient {
    async fn create(&self, payload: &DiffPayload) -> Result<DiffResource, ClientError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.write_delay).await;
        let mut diffs = self.diffs.lock().unwrap();
        let id = DiffId::new(format!("id{}", diffs.len() + 1));
        let created = DiffResource {
            identifier: id.clone(),
            code_before: payload.code_before.clone(),
            code_after: payload.code_after.clone(),
            language: payload.language.clone(),
            access_token: Some(format!("token-{}", id)),
            is_active: true,
            created_at: None,
            updated_at: None,
        };
        diffs.insert(id, created.clone());
        Ok(created)
    }

    async fn read_raw(&self, id: &DiffId) -> Result<String, ClientError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(id) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_reads {
            return Err(ClientError::Network("connection refused".to_string()));
        }
        let resource = self.lookup(id)?;
        Ok(serde_json::json!({ "data": resource }).to_string())
    }

    async fn update(
        &self,
        id: &DiffId,
        payload: &DiffPayload,
    ) -> Result<DiffResource, ClientError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.write_delay).await;
        let mut updated = self.lookup(id)?;
        updated.code_before = payload.code_before.clone();
        updated.code_after = payload.code_after.clone();
        updated.language = payload.language.clone();
        self.diffs
            .lock()
            .unwrap()
            .insert(id.clone(), updated.clone());
        Ok(updated)
    }

    async fn list(&self, page: u32, query: Option<&str>) -> Result<DiffPage, ClientError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.require_auth()?;
        let matching: Vec<DiffResource> = self
            .diffs
            .lock()
            .unwrap()
            .values()
            .filter(|r| query.is_none_or(|q| r.identifier.as_str().contains(q)))
            .cloned()
            .collect();
        let start = (page.max(1) as usize - 1) * PAGE_SIZE;
        let results: Vec<DiffResource> =
            matching.iter().skip(start).take(PAGE_SIZE).cloned().collect();
        Ok(DiffPage {
            count: matching.len() as u64,
            next: (start + PAGE_SIZE < matching.len()).then(|| format!("?page={}", page + 1)),
            previous: (page > 1).then(|| format!("?page={}", page - 1)),
            results,
        })
    }

    async fn toggle_active(&self, id: &DiffId) -> Result<DiffResource, ClientError> {
        self.require_auth()?;
        let mut toggled = self.lookup(id)?;
        toggled.is_active = !toggled.is_active;
        self.diffs
            .lock()
            .unwrap()
            .insert(id.clone(), toggled.clone());
        Ok(toggled)
    }

    async fn delete(&self, id: &DiffId) -> Result<(), ClientError> {
        self.require_auth()?;
        self.diffs
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    async fn google_login(&self, token: &str) -> Result<LoginSession, ClientError> {
        if token.is_empty() {
            return Err(ClientError::Auth("empty identity token".to_string()));
        }
        Ok(LoginSession {
            access: format!("access-{}", token),
            refresh: format!("refresh-{}", token),
            user: Default::default(),
        })
    }
}

//! Bearer token lookup
//!
//! Authenticated calls ask the token source right before each request and
//! never keep the value, so a login or logout between two calls is honoured.

use code_diff_config::LocalStorage;

/// Supplies the user's bearer token at call time
pub trait TokenSource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

impl TokenSource for LocalStorage {
    fn bearer_token(&self) -> Option<String> {
        self.access_token()
    }
}

/// A fixed token (or none), for tests and one-off commands
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl TokenSource for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_local_storage_token_is_read_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("storage.json"));
        let source: &dyn TokenSource = &storage;

        assert!(source.bearer_token().is_none());
        storage.save_session("acc", "ref", json!({})).unwrap();
        assert_eq!(source.bearer_token().as_deref(), Some("acc"));
        storage.clear_session().unwrap();
        assert!(source.bearer_token().is_none());
    }
}

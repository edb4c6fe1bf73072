//! `login` and `logout` subcommands

use anyhow::{Context, Result};
use code_diff_client::DiffClient;
use code_diff_config::LocalStorage;

/// Exchange an identity-provider token and persist the returned session
pub async fn login(client: &impl DiffClient, storage: &LocalStorage, token: &str) -> Result<()> {
    let session = client
        .google_login(token.trim())
        .await
        .context("Login failed")?;
    let user = serde_json::to_value(&session.user).context("Failed to encode user profile")?;
    storage.save_session(&session.access, &session.refresh, user)?;

    let who = session
        .user
        .email
        .or(session.user.name)
        .unwrap_or_else(|| "unknown user".to_string());
    log::info!("Logged in as {}", who);
    println!("Logged in as {}", who);
    Ok(())
}

pub fn logout(storage: &LocalStorage) -> Result<()> {
    storage.clear_session()?;
    println!("Logged out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockClient;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_login_then_logout() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("storage.json"));

        login(&MockClient::default(), &storage, "id-token").await.unwrap();
        assert_eq!(storage.access_token().as_deref(), Some("access-id-token"));
        assert_eq!(storage.refresh_token().as_deref(), Some("refresh-id-token"));
        assert!(storage.user().is_some());

        logout(&storage).unwrap();
        assert_eq!(storage.access_token(), None);
        assert_eq!(storage.user(), None);
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_storage_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("storage.json"));

        assert!(login(&MockClient::default(), &storage, "  ").await.is_err());
        assert!(!storage.is_logged_in());
    }
}

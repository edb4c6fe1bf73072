//! reqwest-based diff API client
//!
//! Direct implementation of the `DiffClient` trait against the REST API.
//! This client makes real HTTP calls without any caching.

use crate::client::DiffClient;
use crate::error::ClientError;
use crate::token::TokenSource;
use crate::types::{
    decode_body, decode_resource, DiffId, DiffPage, DiffPayload, DiffResource, LoginSession,
};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use url::Url;

const DIFF_COLLECTION: &[&str] = &["api", "code-diff"];
const GOOGLE_LOGIN: &[&str] = &["api", "users", "google-login"];

/// Direct diff API client
///
/// This is the base implementation that makes actual API calls.
/// It can be wrapped by `CachedDiffClient` to add caching behavior.
#[derive(Clone)]
pub struct HttpDiffClient {
    http: Client,
    base_url: Url,
    tokens: Arc<dyn TokenSource>,
}

impl fmt::Debug for HttpDiffClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpDiffClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl HttpDiffClient {
    /// Create a client for the API at `base_url`
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root, e.g. `https://api.example.com`
    /// * `tokens` - Where to read the bearer token before each authenticated call
    pub fn new(base_url: &str, tokens: Arc<dyn TokenSource>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(concat!("code-diff/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Network(format!("failed to build HTTP client: {}", e)))?;
        Self::with_http_client(http, base_url, tokens)
    }

    /// Create a client reusing an existing reqwest `Client`
    pub fn with_http_client(
        http: Client,
        base_url: &str,
        tokens: Arc<dyn TokenSource>,
    ) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url).map_err(|e| {
            ClientError::Validation(format!("invalid API base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Validation(format!(
                "invalid API base URL '{}'",
                base_url
            )));
        }
        // Url::join would otherwise drop the last path segment of the base
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{segments...}/` (the API expects trailing slashes)
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url
    }

    fn diff_endpoint(&self, id: &DiffId) -> Url {
        let mut segments = DIFF_COLLECTION.to_vec();
        segments.push(id.as_str());
        self.endpoint(&segments)
    }

    /// Bearer token for calls that require one
    fn required_token(&self) -> Result<String, ClientError> {
        self.tokens
            .bearer_token()
            .ok_or_else(|| ClientError::Auth("not logged in".to_string()))
    }

    /// Send a request and return the body of a 2xx response
    async fn send(&self, request: RequestBuilder) -> Result<String, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            return Ok(body);
        }

        let message = error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
        debug!("Request failed with {}: {}", status, message);
        Err(ClientError::from_status(status.as_u16(), message))
    }
}

/// Pull a human-readable message out of an error body
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[async_trait]
impl DiffClient for HttpDiffClient {
    async fn create(&self, payload: &DiffPayload) -> Result<DiffResource, ClientError> {
        payload.validate()?;
        let url = self.endpoint(DIFF_COLLECTION);
        debug!("POST {}", url);

        let mut request = self.http.post(url).json(payload);
        if let Some(token) = self.tokens.bearer_token() {
            request = request.bearer_auth(token);
        }

        let body = self.send(request).await?;
        let resource: DiffResource = decode_body(&body)?;
        if resource.identifier.is_empty() {
            return Err(ClientError::Decode(
                "create response carried no identifier".to_string(),
            ));
        }
        debug!("Created diff {}", resource.identifier);
        Ok(resource)
    }

    async fn read_raw(&self, id: &DiffId) -> Result<String, ClientError> {
        let url = self.diff_endpoint(id);
        debug!("GET {}", url);

        self.send(self.http.get(url)).await
    }

    async fn update(
        &self,
        id: &DiffId,
        payload: &DiffPayload,
    ) -> Result<DiffResource, ClientError> {
        payload.validate()?;
        let url = self.diff_endpoint(id);
        debug!("PUT {}", url);

        let body = self.send(self.http.put(url).json(payload)).await?;
        decode_resource(&body, id)
    }

    async fn list(&self, page: u32, query: Option<&str>) -> Result<DiffPage, ClientError> {
        let token = self.required_token()?;
        let url = self.endpoint(DIFF_COLLECTION);
        debug!("GET {} page={} q={:?}", url, page, query);

        let mut params = vec![("page", page.max(1).to_string())];
        if let Some(q) = query.map(str::trim).filter(|q| !q.is_empty()) {
            params.push(("q", q.to_string()));
        }

        let request = self.http.get(url).query(&params).bearer_auth(token);
        let body = self.send(request).await?;
        decode_body(&body)
    }

    async fn toggle_active(&self, id: &DiffId) -> Result<DiffResource, ClientError> {
        let token = self.required_token()?;
        let mut segments = DIFF_COLLECTION.to_vec();
        segments.extend([id.as_str(), "toggle-diff"]);
        let url = self.endpoint(&segments);
        debug!("POST {}", url);

        let body = self.send(self.http.post(url).bearer_auth(token)).await?;
        decode_resource(&body, id)
    }

    async fn delete(&self, id: &DiffId) -> Result<(), ClientError> {
        let token = self.required_token()?;
        let url = self.diff_endpoint(id);
        debug!("DELETE {}", url);

        self.send(self.http.delete(url).bearer_auth(token)).await?;
        Ok(())
    }

    async fn google_login(&self, token: &str) -> Result<LoginSession, ClientError> {
        let url = self.endpoint(GOOGLE_LOGIN);
        debug!("POST {}", url);

        let request = self.http.post(url).json(&json!({ "token": token }));
        let body = self.send(request).await?;
        decode_body(&body)
    }
}

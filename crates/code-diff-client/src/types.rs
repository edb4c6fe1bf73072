//! Diff API data transfer objects
//!
//! These types mirror the JSON exchanged with the backend. They are kept
//! separate from the application's editing state.

use crate::error::ClientError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier assigned by the backend when a diff is created
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffId(String);

impl DiffId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DiffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DiffId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPayload {
    pub code_before: String,
    pub code_after: String,
    pub language: String,
}

impl DiffPayload {
    /// Build a payload, rejecting empty (or whitespace-only) buffers
    pub fn new(
        code_before: impl Into<String>,
        code_after: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let payload = Self {
            code_before: code_before.into(),
            code_after: code_after.into(),
            language: language.into(),
        };
        payload.validate()?;
        Ok(payload)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        match (
            self.code_before.trim().is_empty(),
            self.code_after.trim().is_empty(),
        ) {
            (true, true) => Err(ClientError::Validation(
                "both code snippets are empty".to_string(),
            )),
            (true, false) => Err(ClientError::Validation(
                "the original code snippet is empty".to_string(),
            )),
            (false, true) => Err(ClientError::Validation(
                "the modified code snippet is empty".to_string(),
            )),
            (false, false) => Ok(()),
        }
    }
}

/// A persisted pair of code snippets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResource {
    #[serde(rename = "unique_identifier", default)]
    pub identifier: DiffId,

    #[serde(default)]
    pub code_before: String,

    #[serde(default)]
    pub code_after: String,

    #[serde(default)]
    pub language: String,

    /// Returned to the creator only; proves edit rights over this diff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Naive forms are read as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a backend timestamp, RFC 3339 or one of the naive forms
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Timestamps are informational: an unreadable one becomes `None` rather
/// than failing the whole body
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(parse_timestamp))
}

/// One page of the account's diffs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPage {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<DiffResource>,
}

/// Profile returned by the identity exchange
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Tokens and profile returned by `/api/users/google-login/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginSession {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user: UserProfile,
}

/// The `{ "data": ... }` wrapper most endpoints use
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Decode a response body that is either wrapped in `{ "data": ... }` or bare
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(body) {
        return Ok(envelope.data);
    }
    Ok(serde_json::from_str::<T>(body)?)
}

/// Decode a single diff, filling in `identifier` when the body omits it
pub fn decode_resource(body: &str, id: &DiffId) -> Result<DiffResource, ClientError> {
    let mut resource: DiffResource = decode_body(body)?;
    if resource.identifier.is_empty() {
        resource.identifier = id.clone();
    }
    Ok(resource)
}

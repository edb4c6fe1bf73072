//! Error taxonomy for diff API calls

use thiserror::Error;

/// Errors returned by [`crate::DiffClient`] implementations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Rejected locally before any network call (e.g. an empty buffer)
    #[error("validation failed: {0}")]
    Validation(String),

    /// HTTP 404
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing bearer token, or HTTP 401/403
    #[error("insufficient permissions: {0}")]
    Auth(String),

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Any other non-2xx response
    #[error("server responded with {status}: {message}")]
    Server { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Fieldless view of [`ClientError`] for branching in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Auth,
    Network,
    Server,
    Decode,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Auth(_) => ErrorKind::Auth,
            Self::Network(_) => ErrorKind::Network,
            Self::Server { .. } => ErrorKind::Server,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Map a non-success HTTP status to the matching error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            404 => Self::NotFound(message),
            401 | 403 => Self::Auth(message),
            _ => Self::Server { status, message },
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::from_status(status.as_u16(), e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ClientError::from_status(404, "x").kind(), ErrorKind::NotFound);
        assert_eq!(ClientError::from_status(401, "x").kind(), ErrorKind::Auth);
        assert_eq!(ClientError::from_status(403, "x").kind(), ErrorKind::Auth);
        assert_eq!(ClientError::from_status(500, "x").kind(), ErrorKind::Server);
        assert_eq!(
            ClientError::from_status(422, "bad"),
            ClientError::Server {
                status: 422,
                message: "bad".to_string()
            }
        );
    }

    #[test]
    fn test_display_mentions_status() {
        let err = ClientError::from_status(502, "bad gateway");
        assert_eq!(err.to_string(), "server responded with 502: bad gateway");
    }
}

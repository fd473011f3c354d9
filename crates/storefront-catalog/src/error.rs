//! Catalog fetch error types.

use thiserror::Error;

/// Errors that can occur when reading the catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {url}")]
    Timeout { url: String },

    /// Failed to connect or send the request.
    #[error("Request failed: {0}")]
    Connection(String),

    /// Non-success HTTP response.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The requested resource does not exist.
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Base URL could not be joined with the endpoint path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }

    /// Classify a transport error from the HTTP client.
    pub(crate) fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            }
        } else {
            FetchError::Connection(err.to_string())
        }
    }
}

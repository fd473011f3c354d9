//! Catalog response decoding.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// A buffered catalog response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The URL that produced the response.
    pub url: String,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            url: url.into(),
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the body is empty or the JSON literal `null`.
    pub fn is_blank(&self) -> bool {
        let text = String::from_utf8_lossy(&self.body);
        let trimmed = text.trim();
        trimmed.is_empty() || trimmed == "null"
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Parse a single resource. A blank body means the resource does not
    /// exist.
    pub fn json_resource<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        if self.is_blank() {
            return Err(FetchError::NotFound {
                url: self.url.clone(),
            });
        }
        self.json()
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        match self.status {
            404 => Err(FetchError::NotFound { url: self.url }),
            _ if self.is_success() => Ok(self),
            status => Err(FetchError::Http {
                status,
                url: self.url,
            }),
        }
    }
}

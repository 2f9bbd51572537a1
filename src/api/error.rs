//! Transport-level failures of the API client.
//!
//! These never reach the presentation layer directly: repositories collapse
//! them into a single connectivity message. The variants exist for logging.

use thiserror::Error;

use super::client::Endpoint;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Configured base URL is not an absolute http(s) URL
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request to '{endpoint}' timed out")]
    Timeout {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// Could not connect to the server
    #[error("Connection to '{endpoint}' failed: {source}")]
    Connection {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not the expected JSON
    #[error("Failed to decode '{endpoint}' response: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    /// Any other transport failure
    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Classify a reqwest failure for `endpoint`.
    pub(crate) fn from_reqwest(endpoint: Endpoint, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ApiError::Timeout { endpoint, source }
        } else if source.is_connect() {
            ApiError::Connection { endpoint, source }
        } else {
            ApiError::Request { endpoint, source }
        }
    }

    /// Short error type string for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::ClientBuild(_) => "client_build",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Connection { .. } => "connection",
            ApiError::Decode { .. } => "decode",
            ApiError::Request { .. } => "request",
        }
    }
}

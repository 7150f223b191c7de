//! Error types for the API client.
//!
//! Every failure path of the client (transport, non-success status, unexpected
//! content type, malformed payload) converges to a single [`ApiError`] so callers
//! only ever branch on one type.

use serde::{Deserialize, Serialize};

/// Coarse classification of an [`ApiError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// The request never produced a response (DNS, connection refused, timeout).
    Network,
    /// Non-success status with a JSON (or empty) error body.
    Http,
    /// HTML response that mentions a reverse proxy or CORS rejection.
    Cors,
    /// HTML 404 page, usually a wrong base URL.
    NotFound,
    /// HTML 403 page, usually CORS or authentication.
    Forbidden,
    /// HTML where JSON was expected, cause unknown.
    UnexpectedHtml,
    /// Neither HTML nor JSON.
    UnexpectedContentType,
    /// The body claimed to be JSON but did not parse into the expected shape.
    MalformedJson,
    /// The request could not be built (bad URL, header, or body).
    InvalidRequest,
    /// The call never completed (the task running it panicked or was cancelled).
    Aborted,
}

/// Unified error returned by every client call.
///
/// `status` is the HTTP status code, or `0` when no usable response exists
/// (network failure, malformed JSON). `status_code` and `error` are copied from
/// the backend's JSON error body when it provides them.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, status: u16, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status,
            status_code: None,
            error: None,
        }
    }

    /// Transport-level failure: no response was received.
    pub fn network(url: &str, cause: impl std::fmt::Display) -> Self {
        Self::new(
            ApiErrorKind::Network,
            0,
            format!(
                "Network error: could not connect to the server. Check that the backend is running and reachable at: {}. Error: {}",
                url, cause
            ),
        )
    }

    /// The payload was not valid JSON or did not match the expected shape.
    pub fn malformed_json(url: &str, cause: impl std::fmt::Display) -> Self {
        Self::new(
            ApiErrorKind::MalformedJson,
            0,
            format!(
                "Failed to parse JSON: the server returned a payload that is not valid for this endpoint. Original error: {}. URL: {}",
                cause, url
            ),
        )
    }

    pub fn invalid_request(url: &str, cause: impl std::fmt::Display) -> Self {
        Self::new(
            ApiErrorKind::InvalidRequest,
            0,
            format!("Could not build request to {}: {}", url, cause),
        )
    }

    pub fn aborted(cause: impl std::fmt::Display) -> Self {
        Self::new(
            ApiErrorKind::Aborted,
            0,
            format!("Request did not complete: {}", cause),
        )
    }

    /// True when the failure happened before any HTTP status was available.
    pub fn is_transport(&self) -> bool {
        self.status == 0
    }
}

//! Response classification: turns a status, content type and body into either
//! a JSON body to decode or an [`ApiError`].

use serde_json::Value;

use crate::errors::{ApiError, ApiErrorKind};

/// Longest body excerpt quoted in an error message.
const SNIPPET_LEN: usize = 200;

/// Declared content type of a response, reduced to what the client cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Json,
    Other,
}

impl ContentKind {
    pub fn from_content_type(content_type: &str) -> Self {
        let lower = content_type.to_ascii_lowercase();
        if lower.contains("text/html") {
            ContentKind::Html
        } else if lower.contains("application/json") {
            ContentKind::Json
        } else {
            ContentKind::Other
        }
    }
}

/// Pulls `message` out of a backend error body. Validation failures send it
/// as a list of strings, joined here.
fn message_field(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::String(text) => Some(text.clone()),
        Value::Array(lines) => {
            let lines: Vec<&str> = lines.iter().filter_map(Value::as_str).collect();
            (!lines.is_empty()).then(|| lines.join(", "))
        }
        _ => None,
    }
}

/// Classifies a received response.
///
/// Returns `Ok(None)` for `204 No Content`, `Ok(Some(body))` for a successful
/// JSON response, and an error for everything else, including a successful
/// status carrying HTML or an unknown content type.
pub fn classify(
    url: &str,
    status: u16,
    content_type: &str,
    body: String,
) -> Result<Option<String>, ApiError> {
    let kind = ContentKind::from_content_type(content_type);
    let success = (200..300).contains(&status);

    if success && status == 204 {
        return Ok(None);
    }
    if success && kind == ContentKind::Json {
        return Ok(Some(body));
    }

    Err(match kind {
        ContentKind::Json => json_error(status, &body),
        ContentKind::Html => html_error(url, status, &body),
        ContentKind::Other => ApiError::new(
            ApiErrorKind::UnexpectedContentType,
            status,
            format!(
                "Unexpected content type: '{}'. Status: {}. URL: {}",
                content_type, status, url
            ),
        ),
    })
}

/// Decodes the `{statusCode, message, error}` body field by field, so one
/// field of an unexpected shape does not hide the others.
fn json_error(status: u16, body: &str) -> ApiError {
    let fallback = format!("HTTP error! status: {}", status);
    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        return ApiError::new(ApiErrorKind::Http, status, fallback);
    };

    let error = parsed
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string);
    let status_code = parsed
        .get("statusCode")
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok());
    let message = message_field(&parsed)
        .filter(|m| !m.is_empty())
        .or_else(|| error.clone().filter(|e| !e.is_empty()))
        .unwrap_or(fallback);

    ApiError {
        kind: ApiErrorKind::Http,
        message,
        status,
        status_code,
        error,
    }
}

/// HTML instead of JSON almost always means a proxy, tunnel or CORS layer
/// answered instead of the backend. Try to say which.
fn html_error(url: &str, status: u16, body: &str) -> ApiError {
    if body.contains("ngrok") || body.to_lowercase().contains("cors") {
        return ApiError::new(
            ApiErrorKind::Cors,
            status,
            format!(
                "CORS error: the server or tunnel blocked the request. Check the backend CORS configuration for this origin. URL: {}",
                url
            ),
        );
    }
    match status {
        404 => ApiError::new(
            ApiErrorKind::NotFound,
            status,
            format!(
                "Endpoint not found (404): {}. Check that the API URL is correct.",
                url
            ),
        ),
        403 => ApiError::new(
            ApiErrorKind::Forbidden,
            status,
            format!(
                "Access denied (403). Possible CORS or authentication problem. URL: {}",
                url
            ),
        ),
        _ => ApiError::new(
            ApiErrorKind::UnexpectedHtml,
            status,
            format!(
                "The server returned HTML instead of JSON. Status: {}. This points to a CORS or configuration problem. URL: {}. Response: {}",
                status,
                url,
                truncate_body(body)
            ),
        ),
    }
}

pub fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(SNIPPET_LEN) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...", &body[..idx]),
    }
}

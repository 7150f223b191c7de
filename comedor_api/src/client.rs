//! HTTP client for the cafeteria REST backend.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use url::Url;

use crate::{
    errors::ApiError,
    response::{classify, truncate_body},
    types::Paginated,
};

/// Backend used when no base URL is configured (local development).
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/v1";

/// Request timeout used by [`Client::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of a request that succeeded at the HTTP level.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply<T> {
    /// A JSON body decoded as `T`.
    Content(T),
    /// `204 No Content`.
    NoContent,
}

impl<T: DeserializeOwned> Reply<T> {
    /// Unwraps the content. `NoContent` decodes as JSON `null`, which succeeds
    /// for `()` and `Option<_>` and fails for anything that needs a body.
    pub fn into_content(self, url: &str) -> Result<T, ApiError> {
        match self {
            Reply::Content(value) => Ok(value),
            Reply::NoContent => T::deserialize(serde_json::Value::Null).map_err(|e| {
                tracing::error!("Expected a body from {} but got 204: {}", url, e);
                ApiError::malformed_json(url, e)
            }),
        }
    }
}

/// Method, extra headers and JSON body of a single request.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Adds a header. Overrides a default header of the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP client for the cafeteria backend.
///
/// Stateless apart from its base URL and default headers; construct one per
/// backend and share it by reference. Failures are never retried.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API, e.g. `http://localhost:3001/api/v1`.
    base_api_url: String,
    /// Headers added to every request after the defaults.
    headers: Vec<(String, String)>,
}

impl Client {
    /// Creates a client for `base_url` with the default 30-second timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                ApiError::invalid_request(base_url, e)
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.to_string(),
            headers: Vec::new(),
        })
    }

    /// Adds a header sent with every request (e.g. `Authorization`).
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Joins the base URL and `endpoint` with exactly one `/` between them.
    /// Query strings in `endpoint` are kept as they are.
    pub fn normalize(&self, endpoint: &str) -> String {
        let base = self
            .base_api_url
            .strip_suffix('/')
            .unwrap_or(&self.base_api_url);
        if endpoint.starts_with('/') {
            format!("{}{}", base, endpoint)
        } else {
            format!("{}/{}", base, endpoint)
        }
    }

    fn build_headers(&self, extra: &[(String, String)]) -> Result<HeaderMap, String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("ngrok-skip-browser-warning"),
            HeaderValue::from_static("true"),
        );
        for (name, value) in self.headers.iter().chain(extra.iter()) {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| format!("invalid header name '{}': {}", name, e))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| format!("invalid value for header '{}': {}", name, e))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Sends a request and classifies the response.
    ///
    /// The body is decoded as `T` exactly as received; envelopes are never
    /// unwrapped here.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Reply<T>, ApiError> {
        let url = self.normalize(endpoint);
        let parsed = Url::parse(&url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            ApiError::invalid_request(&url, e)
        })?;
        let headers = self.build_headers(&options.headers).map_err(|e| {
            tracing::error!("Invalid request headers: {}", e);
            ApiError::invalid_request(&url, e)
        })?;

        tracing::debug!("{} {}", options.method, url);
        let mut builder = self
            .http
            .request(options.method.clone(), parsed)
            .headers(headers);
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to reach {}: {}", url, e);
            ApiError::network(&url, e)
        })?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            ApiError::network(&url, e)
        })?;

        let json = classify(&url, status, &content_type, body).map_err(|e| {
            tracing::error!(
                "{} {} failed with status {}: {}",
                options.method,
                url,
                e.status,
                e.message
            );
            e
        })?;

        match json {
            None => Ok(Reply::NoContent),
            Some(text) => serde_json::from_str::<T>(&text)
                .map(Reply::Content)
                .map_err(|e| {
                    tracing::error!(
                        "Failed to parse response: {} | body: {}",
                        e,
                        truncate_body(&text)
                    );
                    ApiError::malformed_json(&url, e)
                }),
        }
    }

    async fn send_json<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut options = RequestOptions::new(method);
        if let Some(body) = body {
            let value = serde_json::to_value(body).map_err(|e| {
                tracing::error!("Failed to serialize request body: {}", e);
                ApiError::invalid_request(&self.normalize(endpoint), e)
            })?;
            options = options.with_body(value);
        }
        self.request::<T>(endpoint, options)
            .await?
            .into_content(&self.normalize(endpoint))
    }

    /// `GET` decoding the body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.send_json::<T, ()>(Method::GET, endpoint, None).await
    }

    /// `GET` on a list endpoint, keeping the pagination metadata.
    pub async fn get_with_meta<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<Paginated<T>, ApiError> {
        self.get::<Paginated<T>>(endpoint).await
    }

    /// `GET` on a list endpoint, returning only the `data` part of the envelope.
    pub async fn get_data<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.get_with_meta::<T>(endpoint)
            .await
            .map(Paginated::into_data)
    }

    /// `POST` with an optional JSON body.
    pub async fn post<T, B>(&self, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, endpoint, body).await
    }

    /// `PUT` with a JSON body.
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, endpoint, Some(body)).await
    }

    /// `DELETE`. Any body the backend sends back is ignored.
    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        self.send_json::<IgnoredAny, ()>(Method::DELETE, endpoint, None)
            .await
            .map(|_| ())
    }
}

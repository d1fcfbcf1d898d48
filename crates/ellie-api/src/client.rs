//! HTTP client wrapper for the Ellie API.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ApiError, Error, Result};

/// Default base URL for the Ellie API.
pub const DEFAULT_BASE_URL: &str = "https://api.ellieplanner.com";

/// Default timeout applied to every request (30 seconds).
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Builder for [`EllieClient`].
#[derive(Debug, Clone)]
pub struct EllieClientBuilder {
    api_key: String,
    base_url: String,
    request_timeout: Duration,
}

impl EllieClientBuilder {
    /// Creates a builder with the default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the API base URL. A trailing slash is ignored.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::error::Error::Transport) if the
    /// underlying HTTP client cannot be constructed (e.g. TLS backend failure).
    pub fn build(self) -> Result<EllieClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()?;

        Ok(EllieClient {
            api_key: self.api_key,
            http_client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            request_timeout: self.request_timeout,
        })
    }
}

/// Client for the Ellie planner REST API.
///
/// Each call performs exactly one HTTP request: no retries, no backoff.
#[derive(Clone)]
pub struct EllieClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
    request_timeout: Duration,
}

impl EllieClient {
    /// Creates a client for the default base URL.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        EllieClientBuilder::new(api_key).build()
    }

    /// Creates a client for a custom base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        EllieClientBuilder::new(api_key).base_url(base_url).build()
    }

    /// Returns a builder for custom configuration.
    pub fn builder(api_key: impl Into<String>) -> EllieClientBuilder {
        EllieClientBuilder::new(api_key)
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base URL (without a trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Sends one authenticated request and returns the raw response body.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path including any query string (e.g. "/v1/users/me")
    /// * `body` - Optional request body, serialized as JSON
    ///
    /// # Errors
    ///
    /// - [`Error::Json`](crate::error::Error::Json) if the body cannot be serialized
    /// - [`Error::Transport`](crate::error::Error::Transport) if no response arrives
    ///   or its body cannot be read
    /// - [`Error::Api`](crate::error::Error::Api) for any status outside 200..300
    pub async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .header(API_KEY_HEADER, self.api_key_header()?)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        tracing::debug!(%method, path, "sending request");
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response.bytes().await?.to_vec());
        }

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let message = response.text().await?;

        Err(ApiError::from_status(status.as_u16(), retry_after, message).into())
    }

    /// Performs a GET request.
    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        self.send::<()>(Method::GET, path, None).await
    }

    /// Performs a POST request with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Vec<u8>> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// Performs a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> Result<Vec<u8>> {
        self.send::<()>(Method::POST, path, None).await
    }

    /// Decodes a raw response body into a typed value.
    pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn api_key_header(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&self.api_key).map_err(|_| Error::InvalidApiKey)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for EllieClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EllieClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

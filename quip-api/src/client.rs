//! HTTP client for the Quip platform REST API.
//!
//! Handles bearer authentication, timeout management, status checking,
//! and the JSON / raw-bytes split of response handling. Every endpoint
//! method goes through one of the request primitives defined here.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::debug;

use quip_core::config::ClientConfig;
use quip_core::error::{QuipError, QuipResult};

use crate::form::FormFields;

/// HTTP client for communicating with the Quip platform.
///
/// Wraps an owned `reqwest::Client` with Quip authentication and error
/// handling. Configuration is fixed at construction, so a single client
/// can be cloned and shared across tasks freely.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// API root without a trailing slash (e.g. "https://platform.quip.com/1").
    base_url: String,
    /// Bearer credential attached to every request.
    access_token: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    /// Per-request timeout.
    timeout: Duration,
}

impl ApiClient {
    /// Create a new ApiClient from client configuration.
    ///
    /// Fails with `QuipError::MissingConfig` when no access token is set.
    pub fn new(config: &ClientConfig) -> QuipResult<Self> {
        config.validate()?;

        let timeout = config.request_timeout();
        let inner = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuipError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url: config.normalized_base_url().to_string(),
            access_token: config.access_token.clone().unwrap_or_default(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            timeout,
        })
    }

    /// Get the API root URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the bearer credential.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the OAuth client id, if configured.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Get the OAuth client secret, if configured.
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// Get the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Internal: build an authenticated request for the given method and path.
    fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.inner
            .request(method, self.url(path))
            .bearer_auth(&self.access_token)
            .timeout(self.timeout)
    }

    /// Send a request and turn transport failures and non-2xx statuses into errors.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> QuipResult<Response> {
        debug!("{} {}", method, path);

        let response = builder.send().await.map_err(Self::classify_error)?;
        debug!("{} {} -> {}", method, path, response.status().as_u16());

        Self::check_status(response).await
    }

    // --- Request primitives ---

    /// GET a path and parse the body as JSON.
    pub async fn get_json(&self, path: &str) -> QuipResult<serde_json::Value> {
        let builder = self.build_request(Method::GET, path);
        let resp = self.execute(Method::GET, path, builder).await?;
        Self::parse_json(resp).await
    }

    /// GET a path and return the body unparsed (for blob downloads).
    pub async fn get_raw(&self, path: &str) -> QuipResult<Vec<u8>> {
        let builder = self.build_request(Method::GET, path);
        let resp = self.execute(Method::GET, path, builder).await?;
        Self::response_bytes(resp).await
    }

    /// POST form-encoded fields to a path and parse the body as JSON.
    ///
    /// Only the fields present in `fields` are sent; absent optionals were
    /// already dropped when the field set was built.
    pub async fn post_json(
        &self,
        path: &str,
        fields: &FormFields,
    ) -> QuipResult<serde_json::Value> {
        let builder = self.build_request(Method::POST, path).form(fields.pairs());
        let resp = self.execute(Method::POST, path, builder).await?;
        Self::parse_json(resp).await
    }

    /// POST a multipart form to a path and parse the body as JSON.
    pub async fn post_multipart_json(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> QuipResult<serde_json::Value> {
        let builder = self.build_request(Method::POST, path).multipart(form);
        let resp = self.execute(Method::POST, path, builder).await?;
        Self::parse_json(resp).await
    }

    // --- Response helpers ---

    /// Read the full response body as bytes.
    async fn response_bytes(response: Response) -> QuipResult<Vec<u8>> {
        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| QuipError::Http(format!("failed to read response bytes: {e}")))
    }

    /// Read the full response body and parse it as JSON.
    async fn parse_json(response: Response) -> QuipResult<serde_json::Value> {
        let bytes = Self::response_bytes(response).await?;
        serde_json::from_slice(&bytes).map_err(|e| QuipError::Decode {
            message: format!("failed to parse response: {e}"),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Check the HTTP status code and convert to QuipError if needed.
    async fn check_status(response: Response) -> QuipResult<Response> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuipError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Classify a reqwest error into a QuipError variant.
    fn classify_error(e: reqwest::Error) -> QuipError {
        if e.is_timeout() {
            QuipError::Timeout(e.to_string())
        } else if e.is_connect() {
            QuipError::Http(format!("connection failed: {e}"))
        } else {
            QuipError::Http(e.to_string())
        }
    }
}

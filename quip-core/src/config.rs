//! Client configuration.
//!
//! A `ClientConfig` is built once by the embedding application, either
//! programmatically or from a TOML fragment it already owns, and handed to
//! the API client. Nothing here reads the environment or the filesystem.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{QuipError, QuipResult};

/// Connection settings for the Quip platform.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bearer credential sent on every request. Required.
    #[serde(default)]
    pub access_token: Option<String>,

    /// OAuth client id. Held for future authorization flows.
    #[serde(default)]
    pub client_id: Option<String>,

    /// OAuth client secret. Held for future authorization flows.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// API root, e.g. "https://platform.quip.com/1".
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    constants::DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            client_id: None,
            client_secret: None,
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the given access token and defaults for everything else.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text.
    ///
    /// Missing optional keys fall back to their defaults. A missing
    /// `access_token` is accepted here and reported by [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> QuipResult<Self> {
        let config: ClientConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Set the OAuth client credentials.
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Override the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Check that the configuration can be used to build a client.
    pub fn validate(&self) -> QuipResult<()> {
        match self.access_token.as_deref() {
            Some(token) if !token.trim().is_empty() => {}
            _ => return Err(QuipError::MissingConfig("access_token".into())),
        }
        if self.base_url.trim().is_empty() {
            return Err(QuipError::MissingConfig("base_url".into()));
        }
        Ok(())
    }

    /// The base URL without any trailing slash, so paths join with exactly one `/`.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// The per-request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

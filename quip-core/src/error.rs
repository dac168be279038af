//! Error types for the Quip client.
//!
//! Every failure a client call can produce is folded into a single
//! `QuipError` enum. Nothing is retried or suppressed; callers decide
//! what to do with each category.

use thiserror::Error;

/// Convenience type alias for Results using QuipError.
pub type QuipResult<T> = Result<T, QuipError>;

/// Unified error type covering every failure category of the client.
#[derive(Error, Debug)]
pub enum QuipError {
    // -- Configuration errors --
    /// Configuration could not be parsed or the transport could not be built.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Transport errors --
    /// The request never produced a response (DNS, connect, body read).
    #[error("http error: {0}")]
    Http(String),

    /// The request exceeded the configured timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- Remote errors --
    /// The platform answered with a non-success status.
    #[error("api error (status {status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// A JSON body was expected but could not be parsed.
    #[error("decode error: {message}")]
    Decode {
        /// Parser diagnostic.
        message: String,
        /// The body that failed to parse, lossily decoded as UTF-8.
        body: String,
    },
}

impl QuipError {
    /// HTTP status attached to this error, if the remote answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            QuipError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body attached to this error, if any was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            QuipError::Api { body, .. } | QuipError::Decode { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Whether this is a network-level failure rather than a remote answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, QuipError::Http(_) | QuipError::Timeout(_))
    }
}

impl From<toml::de::Error> for QuipError {
    fn from(e: toml::de::Error) -> Self {
        QuipError::Config(e.to_string())
    }
}

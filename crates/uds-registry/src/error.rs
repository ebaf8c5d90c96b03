//! Error types for registry operations.
//!
//! No error here is fatal to the process: every failure is scoped to the
//! call that raised it and the caller is free to re-issue the request.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Connection or DNS failure reaching the registry.
    #[error("Network error contacting registry: {source}")]
    Network {
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded the configured timeout and was cancelled.
    #[error("Request to {url} timed out")]
    Timeout {
        /// URL of the timed-out request.
        url: String,
    },

    /// The registry answered with a non-success HTTP status.
    #[error("Registry returned HTTP status {status}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The response body was not valid JSON for the expected type.
    #[error("Failed to parse registry response: {source}")]
    Parse {
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The configured registry URL could not be parsed.
    #[error("Invalid registry URL: {url}")]
    InvalidUrl {
        /// Offending URL string.
        url: String,
    },

    /// The configured session cookie contains characters that cannot be
    /// carried in an HTTP header.
    #[error("Invalid session cookie value")]
    InvalidSessionCookie,
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: err
                    .url()
                    .map_or_else(|| "unknown".to_string(), ToString::to_string),
            }
        } else {
            Self::Network { source: err }
        }
    }
}

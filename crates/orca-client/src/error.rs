//! Error types for the Orca Security API client.

use thiserror::Error;

/// Result type alias using `OrcaError`.
pub type OrcaResult<T> = Result<T, OrcaError>;

/// Errors that can occur when talking to the Orca Security API.
#[derive(Debug, Error)]
pub enum OrcaError {
    /// The provider rejected the configured credentials.
    ///
    /// Raised only by [`verify_authentication`](crate::OrcaClient::verify_authentication).
    #[error("authentication failed: {endpoint} returned {status} {status_text}")]
    Authentication {
        /// Full URL the verification request was sent to.
        endpoint: String,
        /// HTTP status observed.
        status: u16,
        /// Canonical status text for that status.
        status_text: String,
    },

    /// A resource fetch returned a non-2xx status.
    #[error("request to {endpoint} failed with status {status}")]
    Api {
        /// Endpoint path that was requested.
        endpoint: String,
        /// HTTP status observed.
        status: u16,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("failed to parse response from {endpoint}")]
    Parse {
        /// Endpoint path that was requested.
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Network-level failure (connection refused, timeout, DNS).
    ///
    /// Propagates from the transport unchanged; not classified further.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An ingestion callback aborted the iteration.
    ///
    /// Never constructed by the client itself; available to callers that
    /// need to abort `iterate_users`/`iterate_groups` with their own message.
    #[error("callback error: {0}")]
    Callback(String),
}

impl OrcaError {
    /// True if the provider rejected the configured credentials.
    pub fn is_authentication(&self) -> bool {
        matches!(self, OrcaError::Authentication { .. })
    }

    /// True for network-level failures that may resolve on their own.
    ///
    /// The client performs no retries; this lets the caller decide whether
    /// an aborted iteration is worth rescheduling.
    pub fn is_transient(&self) -> bool {
        match self {
            OrcaError::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

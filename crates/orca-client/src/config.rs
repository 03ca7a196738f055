//! Client configuration: bearer token, API origin, request timeout.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{OrcaError, OrcaResult};

/// Default API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.orcasecurity.io";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for an [`OrcaClient`](crate::OrcaClient).
///
/// Holds the bearer token presented on every request. The token is immutable
/// for the client's lifetime; there is no refresh logic.
///
/// The [`Debug`] impl redacts the token to prevent accidental credential
/// exposure in log output.
#[derive(Clone)]
pub struct OrcaConfig {
    api_token: SecretString,
    base_url: String,
    request_timeout: Duration,
}

impl OrcaConfig {
    /// Create a configuration pointing at the default API origin.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into().into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the API origin. Trailing slashes are stripped.
    ///
    /// Intended for tests pointing at a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the per-request timeout (default 30 seconds).
    ///
    /// This bounds individual requests only; an iteration as a whole has no
    /// deadline of its own.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrcaError::Config`] if the token is empty or the base URL
    /// is not a valid HTTP(S) URL.
    pub fn validate(&self) -> OrcaResult<()> {
        if self.api_token.expose_secret().is_empty() {
            return Err(OrcaError::Config("api token must not be empty".into()));
        }

        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| OrcaError::Config(format!("invalid base URL: {e}")))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(OrcaError::Config(format!(
                "base URL scheme '{scheme}' not allowed; only HTTP(S) permitted"
            ))),
        }
    }

    /// The configured API origin, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_token(&self) -> &SecretString {
        &self.api_token
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl std::fmt::Debug for OrcaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrcaConfig")
            .field("api_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

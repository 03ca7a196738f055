//! Orca Security REST API client.
//!
//! Wraps `reqwest::Client` with bearer-token authentication, a connectivity
//! check, and the user/group iteration operations the ingestion pipeline
//! consumes.

use std::future::Future;

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::OrcaConfig;
use crate::error::{OrcaError, OrcaResult};
use crate::types::{OrcaGroup, OrcaGroupResponse, OrcaGroupsResponse, OrcaUser, OrcaUsersResponse};

/// Read-only client for the Orca Security REST API.
///
/// Requests are issued and awaited strictly sequentially: at most one
/// outstanding HTTP request at any time, and iteration callbacks are never
/// invoked concurrently with each other or with the next fetch. The client
/// holds no interior mutability; callers must serialize use of one instance,
/// or construct one instance per concurrent consumer.
#[derive(Debug, Clone)]
pub struct OrcaClient {
    config: OrcaConfig,
    http_client: Client,
}

impl OrcaClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns [`OrcaError::Config`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: OrcaConfig) -> OrcaResult<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("orca-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OrcaError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(config: OrcaConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// The configured API origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Absolute URL for an endpoint path. All resources live under `/api`.
    fn url(&self, endpoint: &str) -> String {
        debug_assert!(endpoint.starts_with('/'));
        format!("{}/api{}", self.config.base_url(), endpoint)
    }

    /// Check that the configured credentials are accepted by the provider.
    ///
    /// Issues a single `HEAD` request against the group-listing endpoint and
    /// succeeds iff the server answers with a 2xx status.
    ///
    /// # Errors
    ///
    /// Any non-2xx response yields [`OrcaError::Authentication`] carrying the
    /// endpoint URL and observed status. Network-level failures propagate as
    /// [`OrcaError::Http`].
    #[instrument(skip(self))]
    pub async fn verify_authentication(&self) -> OrcaResult<()> {
        let url = self.url("/rbac/group");
        debug!(url = %url, "verifying credentials");

        let response = self
            .http_client
            .head(&url)
            .bearer_auth(self.config.api_token().expose_secret())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(OrcaError::Authentication {
            endpoint: url,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }

    /// Issue an authenticated GET and decode the JSON body as `T`.
    ///
    /// No schema validation beyond the typed decode: a malformed-but-valid
    /// body that happens to match `T` passes through unchecked.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> OrcaResult<T> {
        let url = self.url(endpoint);
        debug!(url = %url, "GET");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(self.config.api_token().expose_secret())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrcaError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| OrcaError::Parse {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Fetch the member user ids of a group.
    ///
    /// Returns the `id` fields of the membership response verbatim, in
    /// response order, without deduplication.
    #[instrument(skip(self))]
    pub async fn fetch_group_members(&self, group_id: &str) -> OrcaResult<Vec<String>> {
        let response: OrcaGroupResponse = self.get(&format!("/rbac/group/{group_id}")).await?;
        Ok(response.data.users.into_iter().map(|u| u.id).collect())
    }

    /// Iterate each user resource in the provider.
    ///
    /// Fetches the full collection in a single request (the endpoint is not
    /// paginated), then awaits `iteratee` once per user in response order;
    /// each callback completes before the next item is processed.
    ///
    /// # Errors
    ///
    /// Any fetch or callback error aborts the iteration immediately and
    /// propagates to the caller; no partial results are retried or resumed.
    #[instrument(skip(self, iteratee))]
    pub async fn iterate_users<F, Fut>(&self, mut iteratee: F) -> OrcaResult<()>
    where
        F: FnMut(OrcaUser) -> Fut,
        Fut: Future<Output = OrcaResult<()>>,
    {
        let response: OrcaUsersResponse = self.get("/organization/users").await?;
        debug!(count = response.data.users.len(), "iterating users");

        for user in response.data.users {
            iteratee(user).await?;
        }

        Ok(())
    }

    /// Iterate each group resource in the provider, membership resolved.
    ///
    /// Fetches the group summaries, then for each group in summary order
    /// fetches its membership, merges the enriched [`OrcaGroup`], and awaits
    /// `iteratee`, one group fully resolved before the next begins. Each
    /// group costs exactly one additional membership request.
    ///
    /// # Errors
    ///
    /// A failing membership fetch or callback aborts the whole iteration:
    /// groups already yielded are not revoked, later groups are never
    /// fetched.
    #[instrument(skip(self, iteratee))]
    pub async fn iterate_groups<F, Fut>(&self, mut iteratee: F) -> OrcaResult<()>
    where
        F: FnMut(OrcaGroup) -> Fut,
        Fut: Future<Output = OrcaResult<()>>,
    {
        let response: OrcaGroupsResponse = self.get("/rbac/group").await?;
        debug!(count = response.data.groups.len(), "iterating groups");

        for summary in response.data.groups {
            let members = self.fetch_group_members(&summary.id).await?;

            iteratee(OrcaGroup {
                id: summary.id,
                name: summary.name,
                description: summary.description,
                sso_group: summary.sso_group,
                users: members,
            })
            .await?;
        }

        Ok(())
    }
}

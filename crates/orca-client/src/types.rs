//! Wire types for the Orca Security REST API.
//!
//! Field names mirror the provider's JSON verbatim; records are passed
//! through to the ingestion callbacks without local mutation.

use serde::{Deserialize, Serialize};

/// A user record as returned by `/api/organization/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcaUser {
    /// Provider-assigned user identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Primary email address.
    pub email: String,
    /// Given (first) name.
    pub first: String,
    /// Surname (last name).
    pub last: String,
}

/// A group as listed by `/api/rbac/group`, before membership resolution.
///
/// Internal to the iteration: callers only ever see [`OrcaGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcaGroupSummary {
    /// Provider-assigned group identifier.
    pub id: String,
    /// Group name.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the group originates from an SSO provider.
    pub sso_group: bool,
}

/// A group with its membership resolved.
///
/// `users` holds exactly the member ids returned by the per-group membership
/// endpoint at fetch time, in response order, without deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcaGroup {
    /// Provider-assigned group identifier.
    pub id: String,
    /// Group name.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the group originates from an SSO provider.
    pub sso_group: bool,
    /// Member user ids.
    pub users: Vec<String>,
}

/// Response envelope for `GET /api/organization/users`.
#[derive(Debug, Deserialize)]
pub struct OrcaUsersResponse {
    pub status: String,
    pub data: OrcaUsersData,
}

/// Payload of a users listing.
#[derive(Debug, Deserialize)]
pub struct OrcaUsersData {
    /// Organization name.
    pub name: String,
    pub users: Vec<OrcaUser>,
}

/// Response envelope for `GET /api/rbac/group`.
#[derive(Debug, Deserialize)]
pub struct OrcaGroupsResponse {
    pub status: String,
    pub data: OrcaGroupsData,
}

/// Payload of a group listing.
#[derive(Debug, Deserialize)]
pub struct OrcaGroupsData {
    pub groups: Vec<OrcaGroupSummary>,
}

/// Response envelope for `GET /api/rbac/group/{id}`.
#[derive(Debug, Deserialize)]
pub struct OrcaGroupResponse {
    pub status: String,
    pub data: OrcaGroupData,
}

/// Payload of a group membership response.
#[derive(Debug, Deserialize)]
pub struct OrcaGroupData {
    /// Group name as echoed by the membership endpoint.
    pub group: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the group implicitly spans every organization user.
    pub all_users: bool,
    pub users: Vec<OrcaMemberRef>,
}

/// Member entry in a membership response; only the id is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct OrcaMemberRef {
    pub id: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A reaction role binding as returned by the admin API.
///
/// Snowflakes are serialized as strings to avoid precision loss in JavaScript clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRoleDto {
    pub id: i32,
    pub message_id: String,
    pub role_id: String,
    /// Canonical emoji: unicode as-is, custom as `<:name:id>` or `<a:name:id>`.
    pub reaction: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a reaction role binding.
///
/// Missing fields deserialize as empty strings so that validation can answer with a
/// 400 rather than a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReactionRoleDto {
    #[serde(default)]
    pub message_id: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub reaction: String,
}

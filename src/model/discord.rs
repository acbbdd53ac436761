use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiscordRoleDto {
    pub id: String,
    pub name: String,
    /// Hex colour, e.g. `#FF0000`.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiscordChannelDto {
    pub id: String,
    pub name: String,
}

/// A guild the bot is in, with the roles and channels usable for reaction roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiscordGuildResourcesDto {
    pub id: String,
    pub name: String,
    pub roles: Vec<DiscordRoleDto>,
    pub channels: Vec<DiscordChannelDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiscordEmojiDto {
    pub id: String,
    pub name: String,
    pub animated: bool,
    pub available: bool,
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        discord::{DiscordEmojiDto, DiscordGuildResourcesDto},
    },
    server::{error::AppError, service::discord::DiscordResourceService, state::AppState},
};

/// Tag for grouping Discord resource endpoints in OpenAPI documentation
pub static DISCORD_TAG: &str = "discord";

/// List guilds with their assignable roles and message channels.
///
/// Used by the admin UI to pick the role and channel of a new binding.
///
/// # Returns
/// - `200 OK` - One entry per guild the bot is in
/// - `500 Internal Server Error` - Discord API error
#[utoipa::path(
    get,
    path = "/api/discord/resources",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved guild resources", body = Vec<DiscordGuildResourcesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_discord_resources(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let resources = DiscordResourceService::new(&state.discord_http)
        .get_resources()
        .await?;

    Ok((StatusCode::OK, Json(resources)))
}

/// List the custom emojis of a guild.
///
/// # Returns
/// - `200 OK` - The guild's custom emojis
/// - `404 Not Found` - The bot is not in this guild
/// - `500 Internal Server Error` - Discord API error
#[utoipa::path(
    get,
    path = "/api/discord/guild/{guild_id}/emojis",
    tag = DISCORD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guild emojis", body = Vec<DiscordEmojiDto>),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_emojis(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let emojis = DiscordResourceService::new(&state.discord_http)
        .get_emojis(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(emojis)))
}

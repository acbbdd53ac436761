use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        discord::{DiscordChannelDto, DiscordEmojiDto, DiscordGuildResourcesDto, DiscordRoleDto},
        reaction_role::{CreateReactionRoleDto, ReactionRoleDto},
    },
    server::{
        controller::{
            discord::{self, get_discord_resources, get_guild_emojis},
            reaction_role::{self, create_reaction_role, delete_reaction_role, get_reaction_roles},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "AquaDX Bot Admin API"),
    paths(
        reaction_role::get_reaction_roles,
        reaction_role::create_reaction_role,
        reaction_role::delete_reaction_role,
        discord::get_discord_resources,
        discord::get_guild_emojis,
    ),
    components(schemas(
        ErrorDto,
        ReactionRoleDto,
        CreateReactionRoleDto,
        DiscordGuildResourcesDto,
        DiscordRoleDto,
        DiscordChannelDto,
        DiscordEmojiDto,
    )),
    tags(
        (name = "reaction-role", description = "Reaction role bindings"),
        (name = "discord", description = "Discord guild resources")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/reaction-roles",
            get(get_reaction_roles).post(create_reaction_role),
        )
        .route("/api/reaction-roles/{id}", delete(delete_reaction_role))
        .route("/api/discord/resources", get(get_discord_resources))
        .route("/api/discord/guild/{guild_id}/emojis", get(get_guild_emojis))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}

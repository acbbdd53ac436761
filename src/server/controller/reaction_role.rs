use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        reaction_role::{CreateReactionRoleDto, ReactionRoleDto},
    },
    server::{
        error::AppError, model::reaction_role::CreateReactionRoleParam,
        service::reaction_role::ReactionRoleService, state::AppState,
    },
};

/// Tag for grouping reaction role endpoints in OpenAPI documentation
pub static REACTION_ROLE_TAG: &str = "reaction-role";

/// List all reaction role bindings.
///
/// # Returns
/// - `200 OK` - Every configured binding
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reaction-roles",
    tag = REACTION_ROLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reaction roles", body = Vec<ReactionRoleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reaction_roles(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReactionRoleService::new(&state.db, &state.reconciler);

    let bindings: Vec<ReactionRoleDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|binding| binding.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(bindings)))
}

/// Create a reaction role binding.
///
/// Binds a role to an emoji on a message. The message is then located and the emoji
/// added to it by a background reconciliation pass.
///
/// # Arguments
/// - `state` - Application state containing the database connection and reconciler
/// - `payload` - Message ID, role ID and reaction
///
/// # Returns
/// - `201 Created` - Successfully created binding
/// - `400 Bad Request` - Missing fields, non-numeric IDs or an invalid reaction
/// - `409 Conflict` - The role is already bound to the message
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reaction-roles",
    tag = REACTION_ROLE_TAG,
    request_body = CreateReactionRoleDto,
    responses(
        (status = 201, description = "Successfully created reaction role", body = ReactionRoleDto),
        (status = 400, description = "Invalid reaction role data", body = ErrorDto),
        (status = 409, description = "Role already bound to this message", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reaction_role(
    State(state): State<AppState>,
    Json(payload): Json<CreateReactionRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateReactionRoleParam::from_dto(payload)?;

    let service = ReactionRoleService::new(&state.db, &state.reconciler);
    let binding = service.create(param).await?;

    Ok((StatusCode::CREATED, Json(binding.into_dto())))
}

/// Delete a reaction role binding.
///
/// Reactions already on the message stay in place, but the emoji stops granting the
/// role straight away.
///
/// # Returns
/// - `204 No Content` - Binding deleted
/// - `404 Not Found` - No binding with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/reaction-roles/{id}",
    tag = REACTION_ROLE_TAG,
    params(
        ("id" = i32, Path, description = "Reaction role ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted reaction role"),
        (status = 404, description = "Reaction role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reaction_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReactionRoleService::new(&state.db, &state.reconciler);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

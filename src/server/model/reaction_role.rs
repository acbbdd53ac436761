//! Domain models for reaction role bindings.
//!
//! Defines the binding domain model converted from the `reaction_role` entity at the
//! repository boundary, and the parameter type used to create new bindings.

use chrono::{DateTime, Utc};

use crate::{
    model::reaction_role::{CreateReactionRoleDto, ReactionRoleDto},
    server::{
        error::{internal::InternalError, AppError},
        model::reaction::CanonicalReaction,
        util::parse::{parse_snowflake, parse_u64_from_string},
    },
};

/// A persisted (message, emoji) → role binding.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionRoleBinding {
    /// Surrogate identifier assigned by the store.
    pub id: i32,
    /// Discord message the reaction must be placed on.
    pub message_id: u64,
    /// Discord role granted to members who react.
    pub role_id: u64,
    /// Emoji that triggers the grant.
    pub reaction: CanonicalReaction,
    /// Timestamp when the binding was created.
    pub created_at: DateTime<Utc>,
}

impl ReactionRoleBinding {
    /// Converts an entity model to a binding domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(ReactionRoleBinding)` - The converted binding
    /// - `Err(AppError::InternalErr)` - A stored snowflake or reaction is malformed
    pub fn from_entity(entity: entity::reaction_role::Model) -> Result<Self, AppError> {
        let reaction = CanonicalReaction::parse(&entity.reaction).ok_or_else(|| {
            InternalError::InvalidStoredReaction {
                value: entity.reaction.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            message_id: parse_u64_from_string(entity.message_id)?,
            role_id: parse_u64_from_string(entity.role_id)?,
            reaction,
            created_at: entity.created_at,
        })
    }

    /// Converts the binding into the API representation.
    pub fn into_dto(self) -> ReactionRoleDto {
        ReactionRoleDto {
            id: self.id,
            message_id: self.message_id.to_string(),
            role_id: self.role_id.to_string(),
            reaction: self.reaction.to_string(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a reaction role binding.
#[derive(Debug, Clone)]
pub struct CreateReactionRoleParam {
    pub message_id: u64,
    pub role_id: u64,
    pub reaction: CanonicalReaction,
}

impl CreateReactionRoleParam {
    /// Validates a create request body.
    ///
    /// # Returns
    /// - `Ok(CreateReactionRoleParam)` - Snowflakes parsed and reaction canonicalized
    /// - `Err(AppError::BadRequest)` - A field is blank, a snowflake is not numeric, or the
    ///   reaction is neither a unicode emoji nor a custom emoji reference
    pub fn from_dto(dto: CreateReactionRoleDto) -> Result<Self, AppError> {
        if dto.reaction.trim().is_empty() {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }

        let message_id = parse_snowflake("messageId", &dto.message_id)?;
        let role_id = parse_snowflake("roleId", &dto.role_id)?;
        let reaction = CanonicalReaction::parse(&dto.reaction).ok_or_else(|| {
            AppError::BadRequest(
                "reaction must be a unicode emoji or a custom emoji like <:name:id>".to_string(),
            )
        })?;

        Ok(Self {
            message_id,
            role_id,
            reaction,
        })
    }
}

//! Reaction role data repository for database operations.
//!
//! This module provides the `ReactionRoleRepository`, the binding store. Rows are unique on
//! `(message_id, role_id)`; a message may carry many (reaction, role) bindings and a role may
//! be bound to many messages. Snowflakes are stored as strings and converted to domain
//! models at this boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        reaction::CanonicalReaction,
        reaction_role::{CreateReactionRoleParam, ReactionRoleBinding},
    },
};

/// Repository providing database operations for reaction role bindings.
pub struct ReactionRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionRoleRepository<'a> {
    /// Creates a new ReactionRoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReactionRoleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every binding in the store.
    ///
    /// Rows are returned in id order for stable output, though callers must not rely on it.
    /// A row whose snowflakes or reaction cannot be parsed is logged and left out so the
    /// remaining bindings stay usable.
    ///
    /// # Returns
    /// - `Ok(Vec<ReactionRoleBinding>)` - All well-formed bindings
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_all(&self) -> Result<Vec<ReactionRoleBinding>, AppError> {
        let entities = entity::prelude::ReactionRole::find()
            .order_by_asc(entity::reaction_role::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().filter_map(parse_row).collect())
    }

    /// Finds the binding for a message and emoji.
    ///
    /// The message must match exactly. The reaction matches on any of its canonical
    /// spellings, so a custom emoji stored in its static form is found by an animated
    /// reaction of the same name and id, and vice versa.
    ///
    /// Candidate rows are checked again with `CanonicalReaction::matches` since a
    /// case-insensitive MySQL collation treats distinct emoji as equal.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID
    /// - `reaction` - Emoji of the reaction
    ///
    /// # Returns
    /// - `Ok(Some(ReactionRoleBinding))` - A matching binding
    /// - `Ok(None)` - The pairing is not configured
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_one(
        &self,
        message_id: u64,
        reaction: &CanonicalReaction,
    ) -> Result<Option<ReactionRoleBinding>, AppError> {
        let entities = entity::prelude::ReactionRole::find()
            .filter(entity::reaction_role::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::reaction_role::Column::Reaction.is_in(reaction.spellings()))
            .order_by_asc(entity::reaction_role::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter_map(parse_row)
            .find(|binding| binding.reaction.matches(reaction)))
    }

    /// Inserts a new binding.
    ///
    /// The reaction is stored in canonical form. Inserting a `(message_id, role_id)` pair
    /// that already exists fails with the database's unique constraint violation and leaves
    /// the existing row untouched; see `AppError::is_unique_violation`.
    ///
    /// # Arguments
    /// - `param` - Message, role and reaction of the binding
    ///
    /// # Returns
    /// - `Ok(ReactionRoleBinding)` - The created binding
    /// - `Err(AppError::DbErr)` - Constraint violation or other database error
    pub async fn create(
        &self,
        param: CreateReactionRoleParam,
    ) -> Result<ReactionRoleBinding, AppError> {
        let entity = entity::reaction_role::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(param.message_id.to_string()),
            role_id: ActiveValue::Set(param.role_id.to_string()),
            reaction: ActiveValue::Set(param.reaction.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        ReactionRoleBinding::from_entity(entity)
    }

    /// Deletes the binding of a role to a message.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 or 1)
    /// - `Err(AppError::DbErr)` - Database error during deletion
    pub async fn delete(&self, message_id: u64, role_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::ReactionRole::delete_many()
            .filter(entity::reaction_role::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::reaction_role::Column::RoleId.eq(role_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a binding by its surrogate id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 or 1)
    /// - `Err(AppError::DbErr)` - Database error during deletion
    pub async fn delete_by_id(&self, id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::ReactionRole::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Converts a stored row, logging and dropping it when malformed.
fn parse_row(entity: entity::reaction_role::Model) -> Option<ReactionRoleBinding> {
    let id = entity.id;
    match ReactionRoleBinding::from_entity(entity) {
        Ok(binding) => Some(binding),
        Err(e) => {
            tracing::warn!("Skipping malformed reaction role {}: {}", id, e);
            None
        }
    }
}

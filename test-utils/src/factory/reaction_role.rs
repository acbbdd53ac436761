//! Reaction role factory for creating test binding rows.
//!
//! Inserts rows directly through the entity, bypassing the repository, so tests can seed
//! the store with arbitrary (including deliberately odd) data.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reaction role rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reaction_role::ReactionRoleFactory;
///
/// let row = ReactionRoleFactory::new(&db)
///     .message_id("100")
///     .role_id("200")
///     .reaction("<:pog:300>")
///     .build()
///     .await?;
/// ```
pub struct ReactionRoleFactory<'a> {
    db: &'a DatabaseConnection,
    message_id: String,
    role_id: String,
    reaction: String,
    created_at: DateTime<Utc>,
}

impl<'a> ReactionRoleFactory<'a> {
    /// Creates a new ReactionRoleFactory with default values.
    ///
    /// Defaults:
    /// - message_id: unique numeric id
    /// - role_id: unique numeric id
    /// - reaction: `"🍕"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            message_id: next_id().to_string(),
            role_id: next_id().to_string(),
            reaction: "🍕".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    pub fn reaction(mut self, reaction: impl Into<String>) -> Self {
        self.reaction = reaction.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the reaction role row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reaction_role::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reaction_role::Model, DbErr> {
        entity::reaction_role::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(self.message_id),
            role_id: ActiveValue::Set(self.role_id),
            reaction: ActiveValue::Set(self.reaction),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reaction role row with default values.
///
/// Shorthand for `ReactionRoleFactory::new(db).build().await`.
pub async fn create_reaction_role(
    db: &DatabaseConnection,
) -> Result<entity::reaction_role::Model, DbErr> {
    ReactionRoleFactory::new(db).build().await
}

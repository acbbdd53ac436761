//! Reaction role services.
//!
//! - `ReactionRoleService` backs the admin API: list, create and delete bindings, each
//!   mutation followed by a background reconciliation pass.
//! - `MessageLocator` finds a bound message across all visible guilds and channels.
//! - `ReactionReconciler` makes sure bound messages carry their reactions.
//! - `ReactionEventBridge` grants and revokes roles as members react.

pub mod bridge;
pub mod locator;
pub mod reconciler;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::reaction_role::ReactionRoleRepository,
    error::AppError,
    model::reaction_role::{CreateReactionRoleParam, ReactionRoleBinding},
    service::discord::DiscordGateway,
};

pub use bridge::{ReactionEventBridge, ReactionOutcome};
pub use locator::MessageLocator;
pub use reconciler::{ReactionReconciler, ReconcileReport};

pub struct ReactionRoleService<'a, G: DiscordGateway + 'static> {
    db: &'a DatabaseConnection,
    reconciler: &'a ReactionReconciler<G>,
}

impl<'a, G: DiscordGateway + 'static> ReactionRoleService<'a, G> {
    pub fn new(db: &'a DatabaseConnection, reconciler: &'a ReactionReconciler<G>) -> Self {
        Self { db, reconciler }
    }

    pub async fn get_all(&self) -> Result<Vec<ReactionRoleBinding>, AppError> {
        ReactionRoleRepository::new(self.db).list_all().await
    }

    /// Creates a binding and schedules a reconciliation pass.
    ///
    /// # Returns
    /// - `Ok(ReactionRoleBinding)` - The created binding
    /// - `Err(AppError::Conflict)` - The role is already bound to this message
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateReactionRoleParam,
    ) -> Result<ReactionRoleBinding, AppError> {
        let (message_id, role_id) = (param.message_id, param.role_id);

        let binding = match ReactionRoleRepository::new(self.db).create(param).await {
            Ok(binding) => binding,
            Err(e) if e.is_unique_violation() => {
                return Err(AppError::Conflict(format!(
                    "Role {} is already bound to message {}",
                    role_id, message_id
                )));
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            "Created reaction role {}: {} on message {} grants role {}",
            binding.id,
            binding.reaction,
            binding.message_id,
            binding.role_id
        );
        self.reconciler.spawn();

        Ok(binding)
    }

    /// Deletes a binding by id and schedules a reconciliation pass.
    ///
    /// Reactions already on the message are left in place. The event bridge reads the
    /// store on every event, so the pairing stops granting roles immediately.
    ///
    /// # Returns
    /// - `Ok(())` - The binding was removed
    /// - `Err(AppError::NotFound)` - No binding with that id
    /// - `Err(AppError::DbErr)` - Database error during deletion
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let removed = ReactionRoleRepository::new(self.db).delete_by_id(id).await?;
        if removed == 0 {
            return Err(AppError::NotFound("Reaction role not found".to_string()));
        }

        tracing::info!("Deleted reaction role {}", id);
        self.reconciler.spawn();

        Ok(())
    }
}

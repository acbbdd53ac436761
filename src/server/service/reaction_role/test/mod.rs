use std::{sync::Arc, time::Duration};

use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory::reaction_role::ReactionRoleFactory};

use crate::server::{
    config::ReactionRoleSettings,
    error::AppError,
    model::reaction::{CanonicalReaction, ReactionAction, ReactionEvent},
    service::{
        discord::mock::MockGateway,
        reaction_role::{
            ReactionEventBridge, ReactionOutcome, ReactionReconciler, ReactionRoleService,
        },
    },
};


/// Settings with every delay disabled.
fn instant() -> ReactionRoleSettings {
    ReactionRoleSettings {
        reaction_pacing: Duration::ZERO,
        role_confirm_delay: Duration::ZERO,
    }
}

/// Stores a binding row.
async fn bind(
    db: &DatabaseConnection,
    message_id: u64,
    role_id: u64,
    reaction: &str,
) -> Result<(), DbErr> {
    ReactionRoleFactory::new(db)
        .message_id(message_id.to_string())
        .role_id(role_id.to_string())
        .reaction(reaction)
        .build()
        .await?;
    Ok(())
}

fn reconciler(
    db: &DatabaseConnection,
    gateway: &MockGateway,
    settings: ReactionRoleSettings,
) -> ReactionReconciler<MockGateway> {
    ReactionReconciler::new(db.clone(), Arc::new(gateway.clone()), settings)
}

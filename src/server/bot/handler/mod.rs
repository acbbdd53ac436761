use std::sync::atomic::AtomicBool;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Reaction, Ready};
use serenity::async_trait;

use crate::server::{config::ReactionRoleSettings, model::reaction::ReactionAction};

pub mod interaction;
pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub settings: ReactionRoleSettings,
    /// Re-register slash commands on ready.
    pub register_commands: bool,
    /// Register commands to this guild instead of globally.
    pub command_guild_id: Option<u64>,
    /// Set once the startup reconciliation pass has been started.
    pub reconciled: AtomicBool,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        settings: ReactionRoleSettings,
        register_commands: bool,
        command_guild_id: Option<u64>,
    ) -> Self {
        Self {
            db,
            settings,
            register_commands,
            command_guild_id,
            reconciled: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called when a user reacts to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction(self, ctx, ReactionAction::Add, add_reaction).await;
    }

    /// Called when a user removes their reaction from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction(self, ctx, ReactionAction::Remove, removed_reaction).await;
    }

    /// Called when a slash command is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(ctx, interaction).await;
    }
}

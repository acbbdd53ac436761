//! Ready event handler for bot initialization.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Re-register slash commands when configured to
//! - Start the startup reaction role reconciliation pass
//!
//! `ready` fires again after every gateway reconnect; the reconciliation pass only runs
//! on the first one.

use std::sync::{atomic::Ordering, Arc};

use serenity::all::{Context, Ready};

use crate::server::{
    bot::{command, handler::Handler},
    service::{discord::SerenityGateway, reaction_role::ReactionReconciler},
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `handler` - Event handler holding the database connection and settings
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(handler: &Handler, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );

    if handler.register_commands {
        if let Err(e) = command::register_commands(&ctx.http, handler.command_guild_id).await {
            tracing::error!("Failed to register application commands: {}", e);
        }
    }

    if handler.reconciled.swap(true, Ordering::SeqCst) {
        return;
    }

    let gateway = Arc::new(SerenityGateway::new(ctx.http.clone()));
    ReactionReconciler::new(handler.db.clone(), gateway, handler.settings).spawn();
}

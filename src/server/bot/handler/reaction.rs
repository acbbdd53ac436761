//! Reaction add/remove handler.
//!
//! Converts gateway reactions into `ReactionEvent`s and hands them to the reaction
//! role event bridge. Errors are logged; nothing here can stop the bot.

use serenity::all::{Context, Reaction};

use crate::server::{
    bot::handler::Handler,
    model::reaction::{ReactionAction, ReactionEvent},
    service::{discord::SerenityGateway, reaction_role::ReactionEventBridge},
};

/// Handles a reaction being added to or removed from a message.
///
/// # Arguments
/// - `handler` - Event handler holding the database connection and settings
/// - `ctx` - Discord context providing the HTTP client
/// - `action` - Whether the reaction was added or removed
/// - `reaction` - The reaction from the gateway
pub async fn handle_reaction(
    handler: &Handler,
    ctx: Context,
    action: ReactionAction,
    reaction: Reaction,
) {
    let event = ReactionEvent::from_reaction(action, &reaction);
    let gateway = SerenityGateway::new(ctx.http.clone());

    let bridge = ReactionEventBridge::new(&handler.db, &gateway, handler.settings);
    match bridge.handle(&event).await {
        Ok(outcome) => tracing::debug!(
            "Reaction {} on message {}: {:?}",
            event.reaction,
            event.message_id,
            outcome
        ),
        Err(e) => tracing::error!(
            "Failed to handle reaction {} on message {}: {}",
            event.reaction,
            event.message_id,
            e
        ),
    }
}

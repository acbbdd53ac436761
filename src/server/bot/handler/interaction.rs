use serenity::all::{Context, CreateInteractionResponse, Interaction};

use crate::server::bot::command;

/// Answers slash command interactions; other interaction kinds are ignored.
pub async fn handle_interaction(ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Command /{} invoked by {}",
        command.data.name,
        command.user.name
    );

    let response = CreateInteractionResponse::Message(command::respond(&command));
    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /{}: {}", command.data.name, e);
    }
}

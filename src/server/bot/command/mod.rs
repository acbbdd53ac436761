//! Slash commands.
//!
//! Each command module exposes its `NAME`, a `register()` builder used when commands are
//! (re)registered with Discord, and a `run()` function producing the reply.

pub mod games;
pub mod ping;
pub mod test_embed;

use serenity::{
    all::{Command, CommandInteraction, CreateCommand, CreateInteractionResponseMessage, GuildId},
    http::Http,
};

use crate::server::error::AppError;

/// Builders for every command the bot answers.
pub fn all() -> Vec<CreateCommand> {
    vec![ping::register(), games::register(), test_embed::register()]
}

/// Registers the commands to one guild when `guild_id` is set, otherwise globally.
///
/// Guild commands show up immediately which makes them handy while developing; global
/// commands can take a while to propagate.
pub async fn register_commands(http: &Http, guild_id: Option<u64>) -> Result<(), AppError> {
    tracing::info!("Started refreshing application (/) commands");

    let registered = match guild_id {
        Some(guild_id) => GuildId::new(guild_id).set_commands(http, all()).await?,
        None => Command::set_global_commands(http, all()).await?,
    };

    tracing::info!(
        "Successfully reloaded {} application (/) commands",
        registered.len()
    );

    Ok(())
}

/// Builds the reply for a command interaction.
pub fn respond(command: &CommandInteraction) -> CreateInteractionResponseMessage {
    let options = command.data.options();

    match command.data.name.as_str() {
        ping::NAME => ping::run(),
        games::NAME => games::run(&options),
        test_embed::NAME => test_embed::run(),
        _ => CreateInteractionResponseMessage::new()
            .content("Command not found.")
            .ephemeral(true),
    }
}

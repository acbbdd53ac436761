use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Initializes the Discord bot client and returns the HTTP client for sharing.
///
/// The returned `Arc<Http>` is shared with the admin API so it can list guild resources
/// and drive reconciliation passes without a second connection to Discord.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - The bot client and its HTTP client
/// - `Err(AppError)` - Client creation failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let handler = Handler::new(
        db,
        config.reaction_roles,
        config.register_commands,
        config.guild_id,
    );

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// It should be called from within a tokio::spawn task since it will block until the
/// bot shuts down.
///
/// # Returns
/// - `Ok(())` if the bot runs until shutdown
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

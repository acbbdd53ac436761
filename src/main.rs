mod model;
mod server;

use crate::server::{bot, config::Config, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), server::error::AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    tracing::debug!("Configuration loaded, connecting to database...");
    let db = startup::connect_to_database(&config).await?;

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, db.clone()).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let state = AppState::new(db, discord_http, config.reaction_roles);
    let router = router::router().with_state(state);

    startup::serve(&config, router).await
}

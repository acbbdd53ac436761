//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. All fields are cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `Arc<Http>` is a reference-counted pointer
//! - `ReactionReconciler` holds a pool handle and an `Arc` to the gateway

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::http::Http;

use crate::server::{
    config::ReactionRoleSettings,
    service::{discord::SerenityGateway, reaction_role::ReactionReconciler},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool holding the reaction role bindings.
    pub db: DatabaseConnection,

    /// Discord HTTP client shared with the bot.
    ///
    /// Used to list guild roles, channels and emojis for the admin UI.
    pub discord_http: Arc<Http>,

    /// Reconciler started in the background after every binding change.
    pub reconciler: ReactionReconciler<SerenityGateway>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `discord_http` - Discord HTTP client from the bot
    /// - `settings` - Reaction role timing settings for reconciliation passes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        discord_http: Arc<Http>,
        settings: ReactionRoleSettings,
    ) -> Self {
        let gateway = Arc::new(SerenityGateway::new(discord_http.clone()));
        let reconciler = ReactionReconciler::new(db.clone(), gateway, settings);

        Self {
            db,
            discord_http,
            reconciler,
        }
    }
}

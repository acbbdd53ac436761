//! Server-side API backend, Discord bot, and reaction role logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations, and
//! Serenity for Discord bot integration.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Gateway event handlers and slash commands
//! - **Controller Layer** (`controller/`) - Admin HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Reaction role reconciliation, event bridge, and Discord access
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, Discord HTTP client, reconciler)
//! - **Startup** (`startup`) - Tracing, database connection, and HTTP listener setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Reaction Role Flow
//!
//! 1. **Startup** - On the first gateway `ready`, the reconciler loads all bindings,
//!    locates each bound message, and adds any missing reactions
//! 2. **Events** - Reaction add/remove events go through the event bridge, which looks up
//!    the binding and grants or revokes the bound role
//! 3. **Admin** - Creating or deleting a binding through the API starts a new
//!    reconciliation pass in the background

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

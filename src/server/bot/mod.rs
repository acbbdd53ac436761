//! Discord bot integration for reaction roles and slash commands.
//!
//! The bot is initialized during startup and runs in a separate tokio task so it does
//! not block the admin HTTP server. Its HTTP client is shared with the admin API.
//!
//! On the first `ready` event the bot starts a reaction role reconciliation pass. Live
//! reaction add/remove events are handed to the event bridge, which grants and revokes
//! the bound roles.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel availability
//! - `GUILD_MESSAGES` - Message events in guilds
//! - `GUILD_MESSAGE_REACTIONS` - Reaction add/remove events
//!
//! Granting roles needs the `Manage Roles` permission, and the bot's highest role must sit
//! above every bound role.

pub mod command;
pub mod handler;
pub mod start;

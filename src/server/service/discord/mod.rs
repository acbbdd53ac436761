//! Discord access for the reaction role core and the admin API.
//!
//! The reaction role services reach Discord only through the `DiscordGateway` trait so
//! they can be driven by an in-memory gateway in tests. `SerenityGateway` is the live
//! implementation over Serenity's REST client. `DiscordResourceService` lists guild
//! resources for the admin UI.

pub mod gateway;
pub mod resource;

#[cfg(test)]
pub mod mock;

pub use gateway::{DiscordGateway, SerenityGateway};
pub use resource::DiscordResourceService;

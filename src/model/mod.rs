//! API data transfer objects shared by the HTTP controllers.

pub mod api;
pub mod discord;
pub mod reaction_role;

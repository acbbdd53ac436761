//! HTTP request handlers for the admin API.
//!
//! Controllers convert request DTOs into domain parameters, call the service layer, and
//! convert the results back into DTOs. Every handler is annotated with `utoipa::path` so
//! it appears in the OpenAPI document served at `/api/docs`.

pub mod discord;
pub mod reaction_role;

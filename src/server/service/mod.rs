//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) and bot layers and the data (repository) layer. Services are
//! responsible for:
//!
//! - **Business Logic**: Implementing the reaction role rules
//! - **Orchestration**: Coordinating repository calls with Discord API calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod discord;
pub mod reaction_role;

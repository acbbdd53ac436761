//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let binding = factory::create_reaction_role(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let binding = factory::reaction_role::ReactionRoleFactory::new(&db)
//!     .message_id("100")
//!     .role_id("200")
//!     .reaction("🍕")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod reaction_role;

pub use reaction_role::create_reaction_role;

//! Reaction Role Bot Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the bot.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, factories for seeding reaction role rows, and factories for Serenity models.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database row factories with sensible defaults
//! - **serenity**: Serenity model factories built from Discord-shaped JSON
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the migrated schema:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_binding_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_migrations().build().await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;

//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Message, Reaction) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's gateway and REST API
//! would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{
//!     message::{create_test_message, unicode_reaction},
//!     reaction::create_test_reaction,
//! };
//!
//! let message = create_test_message(10, 100, vec![unicode_reaction("🍕", 1)]);
//! let reaction = create_test_reaction(1, 10, 100, 42, "🍕", Some(false));
//! ```
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects with reactions
//! - `reaction::create_test_reaction` - Create Serenity Reaction gateway payloads

pub mod message;
pub mod reaction;

pub use message::create_test_message;
pub use reaction::create_test_reaction;

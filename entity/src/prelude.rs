pub use super::reaction_role::Entity as ReactionRole;

use crate::server::{
    data::reaction_role::ReactionRoleRepository,
    error::AppError,
    model::{reaction::CanonicalReaction, reaction_role::CreateReactionRoleParam},
};
use entity::prelude::ReactionRole;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::reaction_role::ReactionRoleFactory};

mod create;
mod delete;
mod find_one;
mod list_all;

fn unicode(emoji: &str) -> CanonicalReaction {
    CanonicalReaction::Unicode(emoji.to_string())
}

fn custom(name: &str, id: u64, animated: bool) -> CanonicalReaction {
    CanonicalReaction::Custom {
        animated,
        name: name.to_string(),
        id,
    }
}

//! Domain models for messages that carry reaction role reactions.

use serenity::all::Message;

use crate::server::model::reaction::CanonicalReaction;

/// A message fetched from a channel, reduced to its identity and current reactions.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedMessage {
    pub message_id: u64,
    pub channel_id: u64,
    /// Every distinct emoji currently on the message, in canonical form.
    pub reactions: Vec<CanonicalReaction>,
}

impl FetchedMessage {
    /// Converts a Serenity message at the gateway boundary.
    pub fn from_message(message: &Message) -> Self {
        Self {
            message_id: message.id.get(),
            channel_id: message.channel_id.get(),
            reactions: message
                .reactions
                .iter()
                .map(|reaction| CanonicalReaction::from(&reaction.reaction_type))
                .collect(),
        }
    }
}

/// A binding's target message together with the guild and channel it was found in.
///
/// Recomputed on every reconciliation pass and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedReactionTarget {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub reactions: Vec<CanonicalReaction>,
}

impl ResolvedReactionTarget {
    pub fn new(guild_id: u64, message: FetchedMessage) -> Self {
        Self {
            guild_id,
            channel_id: message.channel_id,
            message_id: message.message_id,
            reactions: message.reactions,
        }
    }
}

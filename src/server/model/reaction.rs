//! Canonical emoji representation and reaction events.
//!
//! Bindings store their emoji as a canonical string: unicode emoji as-is and custom
//! emoji as `<:name:id>` or `<a:name:id>`. `CanonicalReaction` is the parsed form used
//! for every comparison so that the static and animated spellings of one custom emoji
//! are treated as the same reaction.

use std::fmt;

use serenity::all::{EmojiId, Reaction, ReactionType};

/// Parsed emoji used for binding storage, presence checks and event lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalReaction {
    /// Plain unicode emoji (one or more code points).
    Unicode(String),
    /// Guild custom emoji.
    Custom { animated: bool, name: String, id: u64 },
}

impl CanonicalReaction {
    /// Parses an emoji spelling.
    ///
    /// Accepts `<a:name:id>`, `<:name:id>`, `<name:id>` and bare `name:id` as custom emoji;
    /// any other non-empty text is taken as a unicode emoji. Returns `None` for blank input
    /// and for bracketed text that is not a valid custom emoji.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        if let Some(custom) = Self::parse_custom(value) {
            return Some(custom);
        }

        if value.starts_with('<') && value.ends_with('>') {
            return None;
        }

        Some(Self::Unicode(value.to_string()))
    }

    fn parse_custom(value: &str) -> Option<Self> {
        let inner = value
            .strip_prefix('<')
            .and_then(|v| v.strip_suffix('>'))
            .unwrap_or(value);

        let (animated, rest) = match inner.strip_prefix("a:") {
            Some(rest) if rest.contains(':') => (true, rest),
            _ => (false, inner.strip_prefix(':').unwrap_or(inner)),
        };

        let (name, id) = rest.split_once(':')?;
        let id = id.parse::<u64>().ok().filter(|id| *id != 0)?;
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }

        Some(Self::Custom {
            animated,
            name: name.to_string(),
            id,
        })
    }

    /// Whether two reactions refer to the same emoji.
    ///
    /// Unicode emoji compare exactly. Custom emoji compare on name and id; the animated
    /// flag is ignored in both directions.
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unicode(a), Self::Unicode(b)) => a == b,
            (
                Self::Custom { name, id, .. },
                Self::Custom {
                    name: other_name,
                    id: other_id,
                    ..
                },
            ) => name == other_name && id == other_id,
            _ => false,
        }
    }

    /// Every stored string that `matches` this reaction, including the legacy bare
    /// `<name:id>` form of a static custom emoji.
    pub fn spellings(&self) -> Vec<String> {
        match self {
            Self::Unicode(emoji) => vec![emoji.clone()],
            Self::Custom { name, id, .. } => vec![
                format!("<:{}:{}>", name, id),
                format!("<a:{}:{}>", name, id),
                format!("<{}:{}>", name, id),
            ],
        }
    }

    /// Converts into the Serenity type used by the reaction endpoints.
    pub fn to_reaction_type(&self) -> ReactionType {
        match self {
            Self::Unicode(emoji) => ReactionType::Unicode(emoji.clone()),
            Self::Custom { animated, name, id } => ReactionType::Custom {
                animated: *animated,
                id: EmojiId::new(*id),
                name: Some(name.clone()),
            },
        }
    }
}

impl fmt::Display for CanonicalReaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode(emoji) => f.write_str(emoji),
            Self::Custom {
                animated: true,
                name,
                id,
            } => write!(f, "<a:{}:{}>", name, id),
            Self::Custom { name, id, .. } => write!(f, "<:{}:{}>", name, id),
        }
    }
}

impl From<&ReactionType> for CanonicalReaction {
    fn from(reaction: &ReactionType) -> Self {
        match reaction {
            ReactionType::Unicode(emoji) => Self::Unicode(emoji.clone()),
            ReactionType::Custom { animated, id, name } => Self::Custom {
                animated: *animated,
                name: name.clone().unwrap_or_default(),
                id: id.get(),
            },
            other => Self::Unicode(other.as_data()),
        }
    }
}

/// Direction of a reaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionAction {
    Add,
    Remove,
}

/// A reaction add/remove notification, reduced to what the event bridge needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionEvent {
    pub action: ReactionAction,
    /// `None` for reactions in direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub message_id: u64,
    pub user_id: Option<u64>,
    /// Bot flag of the reacting user when the gateway sent the member along.
    pub user_is_bot: Option<bool>,
    pub reaction: CanonicalReaction,
}

impl ReactionEvent {
    /// Converts a Serenity gateway reaction at the bot boundary.
    pub fn from_reaction(action: ReactionAction, reaction: &Reaction) -> Self {
        Self {
            action,
            guild_id: reaction.guild_id.map(|id| id.get()),
            channel_id: reaction.channel_id.get(),
            message_id: reaction.message_id.get(),
            user_id: reaction.user_id.map(|id| id.get()),
            user_is_bot: reaction.member.as_ref().map(|member| member.user.bot),
            reaction: CanonicalReaction::from(&reaction.emoji),
        }
    }
}

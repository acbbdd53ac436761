//! Test factory for creating Serenity Reaction gateway payloads.

use serde_json::{json, Value};
use serenity::all::Reaction;

/// Creates a test Serenity Reaction as delivered by a reaction add/remove event.
///
/// The `emoji` argument accepts a unicode emoji or a custom emoji written as
/// `<:name:id>` / `<a:name:id>`.
///
/// # Arguments
/// - `guild_id` - Guild the reaction happened in
/// - `channel_id` - Channel of the reacted message
/// - `message_id` - Reacted message
/// - `user_id` - Reacting user
/// - `emoji` - Emoji spelling
/// - `member_is_bot` - `Some(flag)` to attach a member payload whose user has the given bot
///   flag (reaction-add events), `None` to omit it (reaction-remove events)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Reaction (indicates invalid test data)
pub fn create_test_reaction(
    guild_id: u64,
    channel_id: u64,
    message_id: u64,
    user_id: u64,
    emoji: &str,
    member_is_bot: Option<bool>,
) -> Reaction {
    let member = member_is_bot.map(|bot| {
        json!({
            "guild_id": guild_id.to_string(),
            "user": {
                "id": user_id.to_string(),
                "username": "reactor",
                "global_name": null,
                "avatar": null,
                "bot": bot,
            },
            "nick": null,
            "avatar": null,
            "roles": [],
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "premium_since": null,
            "deaf": false,
            "mute": false,
            "flags": 0,
            "pending": false,
            "permissions": null,
            "communication_disabled_until": null,
        })
    });

    serde_json::from_value(json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.to_string(),
        "message_id": message_id.to_string(),
        "user_id": user_id.to_string(),
        "member": member,
        "emoji": emoji_json(emoji),
        "burst": false,
        "burst_colors": [],
        "type": 0,
    }))
    .expect("Failed to create test reaction - invalid JSON structure")
}

fn emoji_json(emoji: &str) -> Value {
    let custom = emoji
        .strip_prefix("<a:")
        .map(|rest| (true, rest))
        .or_else(|| emoji.strip_prefix("<:").map(|rest| (false, rest)))
        .and_then(|(animated, rest)| {
            let (name, id) = rest.strip_suffix('>')?.split_once(':')?;
            Some(json!({ "id": id, "name": name, "animated": animated }))
        });

    custom.unwrap_or_else(|| json!({ "id": null, "name": emoji }))
}

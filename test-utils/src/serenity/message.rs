//! Test factory for creating Serenity Message objects.

use serde_json::{json, Value};
use serenity::all::Message;

/// Builds the JSON for a unicode emoji reaction summary on a message.
///
/// # Arguments
/// - `emoji` - The unicode emoji
/// - `count` - How many users reacted
pub fn unicode_reaction(emoji: &str, count: u64) -> Value {
    reaction_summary(json!({ "id": null, "name": emoji }), count)
}

/// Builds the JSON for a custom emoji reaction summary on a message.
///
/// # Arguments
/// - `name` - Custom emoji name
/// - `emoji_id` - Custom emoji snowflake
/// - `animated` - Whether the emoji is animated
/// - `count` - How many users reacted
pub fn custom_reaction(name: &str, emoji_id: u64, animated: bool, count: u64) -> Value {
    reaction_summary(
        json!({ "id": emoji_id.to_string(), "name": name, "animated": animated }),
        count,
    )
}

fn reaction_summary(emoji: Value, count: u64) -> Value {
    json!({
        "count": count,
        "count_details": { "burst": 0, "normal": count },
        "me": false,
        "me_burst": false,
        "burst_colors": [],
        "emoji": emoji,
    })
}

/// Creates a test Serenity Message carrying the given reaction summaries.
///
/// # Arguments
/// - `channel_id` - Channel the message lives in
/// - `message_id` - Message snowflake
/// - `reactions` - Reaction summaries built with `unicode_reaction` / `custom_reaction`
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(channel_id: u64, message_id: u64, reactions: Vec<Value>) -> Message {
    serde_json::from_value(json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": "100000000000000000",
            "username": "author",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "content": "Pick your roles",
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "reactions": reactions,
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}

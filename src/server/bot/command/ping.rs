use serenity::all::{CreateCommand, CreateInteractionResponseMessage};

pub const NAME: &str = "ping";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Replies with Pong!")
}

pub fn run() -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new().content("Pong!")
}

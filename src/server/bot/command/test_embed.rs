use serenity::all::{
    CreateCommand, CreateEmbed, CreateEmbedFooter, CreateInteractionResponseMessage, Timestamp,
};

pub const NAME: &str = "test";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Test embeds")
}

pub fn embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("Test")
        .description("This is a test embed")
        .colour(0xFF0000)
        .timestamp(Timestamp::now())
        .footer(CreateEmbedFooter::new("Test footer"))
}

pub fn run() -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new().embed(embed())
}

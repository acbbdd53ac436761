//! `/games` FAQ for Sega's arcade games.
//!
//! One subcommand per game (`chuni`, `mai2`, `mu3`), each taking a required `option`
//! choice of `oldest`, `newest` or `faq`.

use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, CreateInteractionResponseMessage,
    ResolvedOption, ResolvedValue,
};

pub const NAME: &str = "games";

const GAMES: [(&str, &str); 3] = [
    ("chuni", "Chunithm details"),
    ("mai2", "maimai details"),
    ("mu3", "Ongeki details"),
];

const CHOICES: [&str; 3] = ["oldest", "newest", "faq"];

pub fn register() -> CreateCommand {
    GAMES.iter().fold(
        CreateCommand::new(NAME).description("FAQ for Sega's arcade games"),
        |command, (game, description)| {
            let option = CHOICES.iter().fold(
                CreateCommandOption::new(CommandOptionType::String, "option", "Choose an option")
                    .required(true),
                |option, choice| option.add_string_choice(*choice, *choice),
            );

            command.add_option(
                CreateCommandOption::new(CommandOptionType::SubCommand, *game, *description)
                    .add_sub_option(option),
            )
        },
    )
}

/// Canned answer for a game subcommand.
pub fn reply(game: Option<&str>) -> &'static str {
    match game {
        Some("chuni") => "You selected Chunithm! Chunithm is a rhythm game developed by Sega. Latest Supported Version: Luminous Plus (2.27)",
        Some("mai2") => "You selected maimai! maimai is a rhythm game developed by Sega. Latest Supported Version: maimai DX Prism (1.50)",
        Some("mu3") => "You selected Ongeki! Ongeki is a rhythm game developed by Sega. Latest Supported Version: Ongeki Bright Memories (1.45)",
        Some(_) => "Unknown game selected.",
        None => "No game selected.",
    }
}

pub fn run(options: &[ResolvedOption]) -> CreateInteractionResponseMessage {
    let game = options
        .iter()
        .find(|option| matches!(option.value, ResolvedValue::SubCommand(_)))
        .map(|option| option.name);

    CreateInteractionResponseMessage::new().content(reply(game))
}

use std::sync::Arc;

use serenity::{all::GuildId, http::Http};

use crate::{
    model::discord::{DiscordChannelDto, DiscordEmojiDto, DiscordGuildResourcesDto, DiscordRoleDto},
    server::{
        error::AppError,
        service::discord::gateway::{is_message_channel, list_all_guilds},
    },
};

/// Lists the guilds, roles, channels and emojis an administrator can bind.
pub struct DiscordResourceService<'a> {
    http: &'a Arc<Http>,
}

impl<'a> DiscordResourceService<'a> {
    pub fn new(http: &'a Arc<Http>) -> Self {
        Self { http }
    }

    /// Gets every guild the bot is in with its assignable roles and message channels.
    ///
    /// Managed roles (bot and integration roles) and `@everyone` are left out since the
    /// bot cannot hand them out.
    ///
    /// # Returns
    /// - `Ok(Vec<DiscordGuildResourcesDto>)` - One entry per guild
    /// - `Err(AppError::DiscordErr)` - Discord API request failed
    pub async fn get_resources(&self) -> Result<Vec<DiscordGuildResourcesDto>, AppError> {
        let guilds = list_all_guilds(self.http).await?;

        let mut resources = Vec::with_capacity(guilds.len());
        for guild in guilds {
            let roles = self
                .http
                .get_guild_roles(guild.id)
                .await?
                .into_iter()
                .filter(|role| !role.managed && role.id.get() != guild.id.get())
                .map(|role| DiscordRoleDto {
                    id: role.id.to_string(),
                    name: role.name,
                    color: format!("#{:06X}", role.colour.0),
                })
                .collect();

            let channels = self
                .http
                .get_channels(guild.id)
                .await?
                .into_iter()
                .filter(is_message_channel)
                .map(|channel| DiscordChannelDto {
                    id: channel.id.to_string(),
                    name: channel.name,
                })
                .collect();

            resources.push(DiscordGuildResourcesDto {
                id: guild.id.to_string(),
                name: guild.name,
                roles,
                channels,
            });
        }

        Ok(resources)
    }

    /// Gets the custom emojis of a guild the bot is in.
    ///
    /// # Returns
    /// - `Ok(Vec<DiscordEmojiDto>)` - The guild's custom emojis
    /// - `Err(AppError::NotFound)` - The bot is not a member of the guild
    /// - `Err(AppError::DiscordErr)` - Discord API request failed
    pub async fn get_emojis(&self, guild_id: u64) -> Result<Vec<DiscordEmojiDto>, AppError> {
        let guilds = list_all_guilds(self.http).await?;
        if !guilds.iter().any(|guild| guild.id.get() == guild_id) {
            return Err(AppError::NotFound("Guild not found".to_string()));
        }

        let emojis = self
            .http
            .get_emojis(GuildId::new(guild_id))
            .await?
            .into_iter()
            .map(|emoji| DiscordEmojiDto {
                id: emoji.id.to_string(),
                name: emoji.name,
                animated: emoji.animated,
                available: emoji.available,
            })
            .collect();

        Ok(emojis)
    }
}

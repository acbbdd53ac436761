use std::{future::Future, sync::Arc};

use serenity::{
    all::{ChannelId, ChannelType, GuildChannel, GuildId, GuildInfo, MessageId, RoleId, UserId},
    http::{GuildPagination, Http},
};

use crate::server::{
    error::AppError,
    model::{message::FetchedMessage, reaction::CanonicalReaction},
};

/// Discord operations used by the message locator, reconciler and event bridge.
///
/// All identifiers are raw snowflakes.
#[serenity::async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Ids of every guild the bot is a member of.
    async fn guild_ids(&self) -> Result<Vec<u64>, AppError>;

    /// Ids of the text-capable, non-thread channels of a guild.
    async fn message_channel_ids(&self, guild_id: u64) -> Result<Vec<u64>, AppError>;

    /// Fetches a message by id from a specific channel.
    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<FetchedMessage, AppError>;

    /// Adds the bot's own reaction to a message.
    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        reaction: &CanonicalReaction,
    ) -> Result<(), AppError>;

    /// Whether the user is a bot account.
    async fn user_is_bot(&self, user_id: u64) -> Result<bool, AppError>;

    /// Current role ids of a guild member.
    async fn member_role_ids(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>, AppError>;

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError>;

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError>;
}

/// Returns true for channels that hold messages and are not threads.
pub fn is_message_channel(channel: &GuildChannel) -> bool {
    channel.thread_metadata.is_none()
        && matches!(
            channel.kind,
            ChannelType::Text | ChannelType::News | ChannelType::Voice | ChannelType::Stage
        )
}

/// Largest page Discord returns from the current-user guilds endpoint.
const GUILD_PAGE_SIZE: u64 = 200;

/// Lists every guild the bot is a member of, following pagination past the first page.
///
/// # Returns
/// - `Ok(Vec<GuildInfo>)` - All guilds in ascending id order
/// - `Err(AppError::DiscordErr)` - A page request failed
pub async fn list_all_guilds(http: &Http) -> Result<Vec<GuildInfo>, AppError> {
    collect_guild_pages(
        |after| async move {
            let target = after.map(|id| GuildPagination::After(GuildId::new(id)));
            http.get_guilds(target, Some(GUILD_PAGE_SIZE))
                .await
                .map_err(AppError::from)
        },
        |guild: &GuildInfo| guild.id.get(),
    )
    .await
}

/// Requests pages after the last id seen until a short page comes back.
async fn collect_guild_pages<T, F, Fut>(
    mut fetch_page: F,
    id_of: impl Fn(&T) -> u64,
) -> Result<Vec<T>, AppError>
where
    F: FnMut(Option<u64>) -> Fut,
    Fut: Future<Output = Result<Vec<T>, AppError>>,
{
    let mut guilds = Vec::new();
    let mut after = None;

    loop {
        let page = fetch_page(after).await?;
        let full_page = page.len() as u64 >= GUILD_PAGE_SIZE;
        after = page.last().map(&id_of);
        guilds.extend(page);

        if !full_page || after.is_none() {
            return Ok(guilds);
        }
    }
}

/// `DiscordGateway` backed by Serenity's HTTP client.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

const ROLE_AUDIT_REASON: &str = "Reaction role";

#[serenity::async_trait]
impl DiscordGateway for SerenityGateway {
    async fn guild_ids(&self) -> Result<Vec<u64>, AppError> {
        let guilds = list_all_guilds(&self.http).await?;

        Ok(guilds.into_iter().map(|guild| guild.id.get()).collect())
    }

    async fn message_channel_ids(&self, guild_id: u64) -> Result<Vec<u64>, AppError> {
        let channels = self.http.get_channels(GuildId::new(guild_id)).await?;

        Ok(channels
            .iter()
            .filter(|channel| is_message_channel(channel))
            .map(|channel| channel.id.get())
            .collect())
    }

    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<FetchedMessage, AppError> {
        let message = self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await?;

        Ok(FetchedMessage::from_message(&message))
    }

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        reaction: &CanonicalReaction,
    ) -> Result<(), AppError> {
        self.http
            .create_reaction(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &reaction.to_reaction_type(),
            )
            .await?;

        Ok(())
    }

    async fn user_is_bot(&self, user_id: u64) -> Result<bool, AppError> {
        let user = self.http.get_user(UserId::new(user_id)).await?;

        Ok(user.bot)
    }

    async fn member_role_ids(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>, AppError> {
        let member = self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await?;

        Ok(member.roles.iter().map(|role| role.get()).collect())
    }

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(ROLE_AUDIT_REASON),
            )
            .await?;

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(ROLE_AUDIT_REASON),
            )
            .await?;

        Ok(())
    }
}

use crate::server::{
    error::AppError, model::message::ResolvedReactionTarget,
    service::discord::DiscordGateway,
};

/// Finds a message by id across every guild and channel the bot can see.
///
/// Discord cannot resolve a message from its id alone, so this is a linear probe over
/// guild × channel pairs, repeated on every pass with no location cache.
pub struct MessageLocator<'a, G: DiscordGateway> {
    gateway: &'a G,
}

impl<'a, G: DiscordGateway> MessageLocator<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Locates a message, stopping at the first channel that returns it.
    ///
    /// Channel-list and message-fetch failures (missing access, wrong channel, deleted
    /// message) count as "not here" and the search moves on.
    ///
    /// # Returns
    /// - `Ok(Some(ResolvedReactionTarget))` - The message and where it lives
    /// - `Ok(None)` - No visible channel holds the message
    /// - `Err(AppError)` - The guild list itself could not be read
    pub async fn locate(
        &self,
        message_id: u64,
    ) -> Result<Option<ResolvedReactionTarget>, AppError> {
        for guild_id in self.gateway.guild_ids().await? {
            let channel_ids = match self.gateway.message_channel_ids(guild_id).await {
                Ok(channel_ids) => channel_ids,
                Err(e) => {
                    tracing::debug!("Skipping guild {} while locating messages: {}", guild_id, e);
                    continue;
                }
            };

            for channel_id in channel_ids {
                match self.gateway.fetch_message(channel_id, message_id).await {
                    Ok(message) => {
                        tracing::debug!(
                            "Located message {} in channel {} of guild {}",
                            message_id,
                            channel_id,
                            guild_id
                        );
                        return Ok(Some(ResolvedReactionTarget::new(guild_id, message)));
                    }
                    Err(_) => continue,
                }
            }
        }

        Ok(None)
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    config::ReactionRoleSettings,
    data::reaction_role::ReactionRoleRepository,
    error::AppError,
    model::reaction::{ReactionAction, ReactionEvent},
    service::discord::DiscordGateway,
};

/// What the bridge did with a reaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// The reacting user is a bot.
    IgnoredBot,
    /// The reaction was not made in a guild.
    NotInGuild,
    /// No binding exists for this message and emoji.
    Unconfigured,
    /// The reacting member could not be resolved.
    MemberUnavailable,
    /// The bound role was granted or revoked. `confirmed` tells whether the member's roles
    /// reflected the change after the confirmation delay.
    Applied { role_id: u64, confirmed: bool },
}

/// Turns live reaction add/remove events into role grants and revokes.
pub struct ReactionEventBridge<'a, G: DiscordGateway> {
    db: &'a DatabaseConnection,
    gateway: &'a G,
    settings: ReactionRoleSettings,
}

impl<'a, G: DiscordGateway> ReactionEventBridge<'a, G> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a G, settings: ReactionRoleSettings) -> Self {
        Self {
            db,
            gateway,
            settings,
        }
    }

    /// Handles one reaction event.
    ///
    /// Bots are filtered out before the store is consulted. For a configured pairing the
    /// bound role is granted on add when the member lacks it and revoked on remove when the
    /// member has it. After `role_confirm_delay` the member's roles are read again and the
    /// post-condition (role present on add, absent on remove) is logged.
    ///
    /// # Returns
    /// - `Ok(ReactionOutcome)` - How the event was resolved
    /// - `Err(AppError)` - The bot check or the binding lookup failed
    pub async fn handle(&self, event: &ReactionEvent) -> Result<ReactionOutcome, AppError> {
        let Some(user_id) = event.user_id else {
            return Ok(ReactionOutcome::MemberUnavailable);
        };

        let is_bot = match event.user_is_bot {
            Some(is_bot) => is_bot,
            None => self.gateway.user_is_bot(user_id).await?,
        };
        if is_bot {
            return Ok(ReactionOutcome::IgnoredBot);
        }

        let Some(guild_id) = event.guild_id else {
            return Ok(ReactionOutcome::NotInGuild);
        };

        let Some(binding) = ReactionRoleRepository::new(self.db)
            .find_one(event.message_id, &event.reaction)
            .await?
        else {
            return Ok(ReactionOutcome::Unconfigured);
        };
        let role_id = binding.role_id;

        let roles = match self.gateway.member_role_ids(guild_id, user_id).await {
            Ok(roles) => roles,
            Err(e) => {
                tracing::debug!(
                    "Could not resolve member {} in guild {}: {}",
                    user_id,
                    guild_id,
                    e
                );
                return Ok(ReactionOutcome::MemberUnavailable);
            }
        };
        let has_role = roles.contains(&role_id);

        let change = match event.action {
            ReactionAction::Add if !has_role => {
                Some(self.gateway.add_member_role(guild_id, user_id, role_id).await)
            }
            ReactionAction::Remove if has_role => Some(
                self.gateway
                    .remove_member_role(guild_id, user_id, role_id)
                    .await,
            ),
            _ => None,
        };
        if let Some(Err(e)) = change {
            tracing::error!(
                "Failed to update role {} for member {} in guild {}: {}",
                role_id,
                user_id,
                guild_id,
                e
            );
        }

        tokio::time::sleep(self.settings.role_confirm_delay).await;

        let confirmed = match self.gateway.member_role_ids(guild_id, user_id).await {
            Ok(roles) => match event.action {
                ReactionAction::Add => roles.contains(&role_id),
                ReactionAction::Remove => !roles.contains(&role_id),
            },
            Err(e) => {
                tracing::debug!("Could not re-read roles of member {}: {}", user_id, e);
                false
            }
        };

        let verb = match event.action {
            ReactionAction::Add => "granted",
            ReactionAction::Remove => "removed",
        };
        if confirmed {
            tracing::info!(
                "Role {} {} for member {} via reaction {} on message {}",
                role_id,
                verb,
                user_id,
                event.reaction,
                event.message_id
            );
        } else {
            tracing::warn!(
                "Role {} was not {} for member {} after reaction {} on message {}",
                role_id,
                verb,
                user_id,
                event.reaction,
                event.message_id
            );
        }

        Ok(ReactionOutcome::Applied { role_id, confirmed })
    }
}

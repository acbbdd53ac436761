//! In-memory `DiscordGateway` for unit tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use crate::server::{
    error::AppError,
    model::{message::FetchedMessage, reaction::CanonicalReaction},
};

use super::DiscordGateway;

/// Recorded `add_reaction` call: (channel id, message id, reaction).
pub type AddedReaction = (u64, u64, String);

#[derive(Default)]
struct MockState {
    guilds: Vec<(u64, Vec<u64>)>,
    messages: HashMap<(u64, u64), Vec<CanonicalReaction>>,
    broken_guilds: HashSet<u64>,
    broken_channels: HashSet<u64>,
    rejected_reactions: HashSet<String>,
    bots: HashSet<u64>,
    members: HashMap<(u64, u64), Vec<u64>>,
    freeze_roles: bool,
    added_reactions: Vec<AddedReaction>,
    fetch_attempts: Vec<(u64, u64)>,
    bot_lookups: usize,
    member_lookups: usize,
    role_grants: Vec<(u64, u64, u64)>,
    role_revokes: Vec<(u64, u64, u64)>,
}

/// Gateway that serves guilds, channels, messages and members from memory and
/// records every mutating call.
///
/// # Example
/// ```rust,ignore
/// let gateway = MockGateway::new()
///     .with_guild(1, &[10, 11])
///     .with_message(11, 100, &[]);
/// reconciler.reconcile().await?;
/// assert_eq!(gateway.added_reactions().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockGateway {
    state: Arc<Mutex<MockState>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guild(self, guild_id: u64, channel_ids: &[u64]) -> Self {
        self.state
            .lock()
            .unwrap()
            .guilds
            .push((guild_id, channel_ids.to_vec()));
        self
    }

    pub fn with_message(self, channel_id: u64, message_id: u64, reactions: &[&str]) -> Self {
        let reactions = reactions
            .iter()
            .filter_map(|value| CanonicalReaction::parse(value))
            .collect();
        self.state
            .lock()
            .unwrap()
            .messages
            .insert((channel_id, message_id), reactions);
        self
    }

    /// Makes listing the guild's channels fail.
    pub fn with_broken_guild(self, guild_id: u64) -> Self {
        self.state.lock().unwrap().broken_guilds.insert(guild_id);
        self
    }

    /// Makes every message fetch in the channel fail.
    pub fn with_broken_channel(self, channel_id: u64) -> Self {
        self.state.lock().unwrap().broken_channels.insert(channel_id);
        self
    }

    /// Makes adding this reaction fail everywhere.
    pub fn with_rejected_reaction(self, reaction: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .rejected_reactions
            .insert(reaction.to_string());
        self
    }

    pub fn with_bot(self, user_id: u64) -> Self {
        self.state.lock().unwrap().bots.insert(user_id);
        self
    }

    pub fn with_member(self, guild_id: u64, user_id: u64, role_ids: &[u64]) -> Self {
        self.state
            .lock()
            .unwrap()
            .members
            .insert((guild_id, user_id), role_ids.to_vec());
        self
    }

    /// Role grants and revokes are recorded but not applied to the member.
    pub fn with_frozen_roles(self) -> Self {
        self.state.lock().unwrap().freeze_roles = true;
        self
    }

    pub fn added_reactions(&self) -> Vec<AddedReaction> {
        self.state.lock().unwrap().added_reactions.clone()
    }

    pub fn fetch_attempts(&self) -> Vec<(u64, u64)> {
        self.state.lock().unwrap().fetch_attempts.clone()
    }

    pub fn bot_lookups(&self) -> usize {
        self.state.lock().unwrap().bot_lookups
    }

    pub fn member_lookups(&self) -> usize {
        self.state.lock().unwrap().member_lookups
    }

    pub fn role_grants(&self) -> Vec<(u64, u64, u64)> {
        self.state.lock().unwrap().role_grants.clone()
    }

    pub fn role_revokes(&self) -> Vec<(u64, u64, u64)> {
        self.state.lock().unwrap().role_revokes.clone()
    }

    pub fn member_roles(&self, guild_id: u64, user_id: u64) -> Option<Vec<u64>> {
        self.state
            .lock()
            .unwrap()
            .members
            .get(&(guild_id, user_id))
            .cloned()
    }
}

fn missing(what: &str) -> AppError {
    AppError::NotFound(format!("Unknown {}", what))
}

fn rejected(reason: &'static str) -> AppError {
    AppError::from(serenity::Error::Other(reason))
}

#[serenity::async_trait]
impl DiscordGateway for MockGateway {
    async fn guild_ids(&self) -> Result<Vec<u64>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.guilds.iter().map(|(guild_id, _)| *guild_id).collect())
    }

    async fn message_channel_ids(&self, guild_id: u64) -> Result<Vec<u64>, AppError> {
        let state = self.state.lock().unwrap();
        if state.broken_guilds.contains(&guild_id) {
            return Err(rejected("Missing Access"));
        }

        state
            .guilds
            .iter()
            .find(|(id, _)| *id == guild_id)
            .map(|(_, channels)| channels.clone())
            .ok_or_else(|| missing("Guild"))
    }

    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<FetchedMessage, AppError> {
        let mut state = self.state.lock().unwrap();
        state.fetch_attempts.push((channel_id, message_id));
        if state.broken_channels.contains(&channel_id) {
            return Err(rejected("Missing Permissions"));
        }

        state
            .messages
            .get(&(channel_id, message_id))
            .map(|reactions| FetchedMessage {
                message_id,
                channel_id,
                reactions: reactions.clone(),
            })
            .ok_or_else(|| missing("Message"))
    }

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        reaction: &CanonicalReaction,
    ) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        let value = reaction.to_string();
        state
            .added_reactions
            .push((channel_id, message_id, value.clone()));
        if state.rejected_reactions.contains(&value) {
            return Err(rejected("Unknown Emoji"));
        }

        let reactions = state
            .messages
            .get_mut(&(channel_id, message_id))
            .ok_or_else(|| missing("Message"))?;
        if !reactions.iter().any(|existing| existing.matches(reaction)) {
            reactions.push(reaction.clone());
        }

        Ok(())
    }

    async fn user_is_bot(&self, user_id: u64) -> Result<bool, AppError> {
        let mut state = self.state.lock().unwrap();
        state.bot_lookups += 1;
        Ok(state.bots.contains(&user_id))
    }

    async fn member_role_ids(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>, AppError> {
        let mut state = self.state.lock().unwrap();
        state.member_lookups += 1;
        state
            .members
            .get(&(guild_id, user_id))
            .cloned()
            .ok_or_else(|| missing("Member"))
    }

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.role_grants.push((guild_id, user_id, role_id));
        if state.freeze_roles {
            return Ok(());
        }

        let roles = state
            .members
            .get_mut(&(guild_id, user_id))
            .ok_or_else(|| missing("Member"))?;
        if !roles.contains(&role_id) {
            roles.push(role_id);
        }

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.role_revokes.push((guild_id, user_id, role_id));
        if state.freeze_roles {
            return Ok(());
        }

        let roles = state
            .members
            .get_mut(&(guild_id, user_id))
            .ok_or_else(|| missing("Member"))?;
        roles.retain(|id| *id != role_id);

        Ok(())
    }
}

use std::{collections::BTreeMap, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::{
    config::ReactionRoleSettings,
    data::reaction_role::ReactionRoleRepository,
    error::AppError,
    model::{reaction::CanonicalReaction, reaction_role::ReactionRoleBinding},
    service::{discord::DiscordGateway, reaction_role::locator::MessageLocator},
};

/// Counters describing one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Bindings loaded from the store.
    pub bindings: usize,
    /// Distinct messages found in some channel.
    pub messages_located: usize,
    /// Distinct messages that could not be found; their bindings were skipped.
    pub messages_missing: usize,
    /// Bindings whose reaction was already on the message.
    pub reactions_present: usize,
    pub reactions_added: usize,
    pub reactions_failed: usize,
}

/// Makes sure every bound message carries its configured reactions.
///
/// Holds owned handles so a pass can be spawned onto the runtime after an admin mutation.
pub struct ReactionReconciler<G: DiscordGateway> {
    db: DatabaseConnection,
    gateway: Arc<G>,
    settings: ReactionRoleSettings,
}

impl<G: DiscordGateway> Clone for ReactionReconciler<G> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            gateway: self.gateway.clone(),
            settings: self.settings,
        }
    }
}

impl<G: DiscordGateway> ReactionReconciler<G> {
    pub fn new(db: DatabaseConnection, gateway: Arc<G>, settings: ReactionRoleSettings) -> Self {
        Self {
            db,
            gateway,
            settings,
        }
    }

    /// Runs one reconciliation pass.
    ///
    /// Bindings are grouped by message. Each message is located once; when it cannot be
    /// found, every binding in its group is skipped for this pass. Missing reactions are
    /// added one at a time with `reaction_pacing` between successive adds across the
    /// whole pass. A custom emoji already present in its static or animated form counts
    /// as present. Failed adds are logged and do not stop the pass.
    ///
    /// # Returns
    /// - `Ok(None)` - The store holds no bindings; nothing to do
    /// - `Ok(Some(ReconcileReport))` - The pass ran to completion
    /// - `Err(AppError)` - Bindings could not be read from the store
    pub async fn reconcile(&self) -> Result<Option<ReconcileReport>, AppError> {
        let bindings = ReactionRoleRepository::new(&self.db).list_all().await?;
        if bindings.is_empty() {
            tracing::info!("No reaction roles configured, skipping reconciliation");
            return Ok(None);
        }

        let mut report = ReconcileReport {
            bindings: bindings.len(),
            ..Default::default()
        };

        let mut groups: BTreeMap<u64, Vec<ReactionRoleBinding>> = BTreeMap::new();
        for binding in bindings {
            groups.entry(binding.message_id).or_default().push(binding);
        }

        let locator = MessageLocator::new(self.gateway.as_ref());
        let mut paced = false;

        for (message_id, group) in groups {
            let target = match locator.locate(message_id).await {
                Ok(Some(target)) => target,
                Ok(None) => {
                    tracing::warn!(
                        "Message {} not found in any channel, skipping {} reaction role(s)",
                        message_id,
                        group.len()
                    );
                    report.messages_missing += 1;
                    continue;
                }
                Err(e) => {
                    tracing::error!("Failed to search for message {}: {}", message_id, e);
                    report.messages_missing += 1;
                    continue;
                }
            };
            report.messages_located += 1;

            let mut present: Vec<CanonicalReaction> = target.reactions;
            for binding in group {
                if present.iter().any(|r| r.matches(&binding.reaction)) {
                    report.reactions_present += 1;
                    continue;
                }

                if paced {
                    tokio::time::sleep(self.settings.reaction_pacing).await;
                }
                paced = true;

                match self
                    .gateway
                    .add_reaction(target.channel_id, message_id, &binding.reaction)
                    .await
                {
                    Ok(()) => {
                        tracing::info!(
                            "Added reaction {} to message {} in guild {} for role {}",
                            binding.reaction,
                            message_id,
                            target.guild_id,
                            binding.role_id
                        );
                        report.reactions_added += 1;
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to add reaction {} to message {} in guild {}: {}",
                            binding.reaction,
                            message_id,
                            target.guild_id,
                            e
                        );
                        report.reactions_failed += 1;
                    }
                }

                // Same emoji bound to another role on this message needs no second add
                present.push(binding.reaction);
            }
        }

        tracing::info!(
            "Reconciled {} reaction role(s): {} message(s) located, {} missing, {} reaction(s) added, {} failed",
            report.bindings,
            report.messages_located,
            report.messages_missing,
            report.reactions_added,
            report.reactions_failed
        );

        Ok(Some(report))
    }
}

impl<G: DiscordGateway + 'static> ReactionReconciler<G> {
    /// Starts a pass in the background; errors are logged.
    pub fn spawn(&self) -> tokio::task::JoinHandle<()> {
        let reconciler = self.clone();
        tokio::spawn(async move {
            if let Err(e) = reconciler.reconcile().await {
                tracing::error!("Reaction role reconciliation failed: {}", e);
            }
        })
    }
}

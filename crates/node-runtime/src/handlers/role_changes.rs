//! # Role-Change Intake
//!
//! Drains `RoleChanged` messages from a bounded channel into the ledger.
//!
//! ## Flow
//!
//! 1. Event source sends `RoleChanged` on the intake channel
//! 2. Handler calls `on_role_changed` and waits for the result
//! 3. Failures are logged with the message; the handler keeps running
//!
//! The call in flight is never raced against shutdown. A stop request
//! closes the channel to new sends and drains what is already buffered.

use std::sync::Arc;

use gl_02_role_ledger::{LedgerError, RoleLedgerApi};
use serde::{Deserialize, Serialize};
use shared_types::{CommunityId, RoleId, UserId};
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

/// A role change as delivered by the event source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleChanged {
    /// Owning community.
    pub community_id: CommunityId,
    /// Role that changed.
    pub role_id: RoleId,
    /// Affected member.
    pub user_id: UserId,
    /// Member display label.
    pub user_tag: String,
    /// Untyped action string; validated by the ledger.
    pub action: String,
    /// Delivery id, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

/// Outcome counts of one handler run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntakeStats {
    /// Messages recorded (redeliveries included).
    pub recorded: u64,
    /// Messages rejected as invalid; retrying will not help.
    pub rejected: u64,
    /// Messages that hit a store failure; the source may retry.
    pub failed: u64,
}

/// Handler for the role-change intake channel.
pub struct RoleChangeHandler<L: RoleLedgerApi> {
    receiver: mpsc::Receiver<RoleChanged>,
    ledger: Arc<L>,
    stats: IntakeStats,
}

impl<L: RoleLedgerApi> RoleChangeHandler<L> {
    /// Create a new handler over `ledger`.
    pub fn new(receiver: mpsc::Receiver<RoleChanged>, ledger: Arc<L>) -> Self {
        Self {
            receiver,
            ledger,
            stats: IntakeStats::default(),
        }
    }

    /// Run until every sender is dropped or `shutdown` flips to `true`.
    ///
    /// Messages buffered when the signal arrives are still recorded.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> IntakeStats {
        info!("[gl-02] Role-change intake started");

        let mut watching = true;
        loop {
            if *shutdown.borrow() {
                info!("[gl-02] Shutdown signal received, draining buffered changes");
                self.receiver.close();
                while let Some(message) = self.receiver.recv().await {
                    self.handle(message).await;
                }
                break;
            }
            let message = tokio::select! {
                message = self.receiver.recv() => message,
                changed = shutdown.changed(), if watching => {
                    if changed.is_err() {
                        debug!("[gl-02] Shutdown sender dropped, draining until close");
                        watching = false;
                    }
                    continue;
                }
            };
            match message {
                Some(message) => self.handle(message).await,
                None => {
                    info!("[gl-02] Intake channel closed");
                    break;
                }
            }
        }

        info!(
            recorded = self.stats.recorded,
            rejected = self.stats.rejected,
            failed = self.stats.failed,
            "[gl-02] Role-change intake stopped"
        );
        self.stats
    }

    async fn handle(&mut self, message: RoleChanged) {
        let result = self
            .ledger
            .on_role_changed(
                &message.community_id,
                &message.role_id,
                &message.user_id,
                &message.user_tag,
                &message.action,
                message.idempotency_key.as_deref(),
            )
            .await;

        match result {
            Ok(record) => {
                self.stats.recorded += 1;
                debug!(
                    "[gl-02] {} {} for {} ({}/{}): total={} restored={} removed={}",
                    message.action,
                    message.user_tag,
                    message.user_id,
                    message.community_id,
                    message.role_id,
                    record.total,
                    record.restored,
                    record.removed
                );
            }
            Err(err) if err.is_retryable() => {
                self.stats.failed += 1;
                error!("[gl-02] Role change not recorded, retryable: {} ({:?})", err, message);
            }
            Err(err @ (LedgerError::InvalidAction(_) | LedgerError::MissingIdempotencyKey)) => {
                self.stats.rejected += 1;
                warn!("[gl-02] Role change rejected: {} ({:?})", err, message);
            }
            Err(err) => {
                self.stats.failed += 1;
                error!("[gl-02] Role change failed: {} ({:?})", err, message);
            }
        }
    }
}

//! # Role-Event Ledger Service
//!
//! Implements `RoleLedgerApi`. The service holds no record state of its own:
//! every write is a single `upsert_and_append` against the injected store,
//! bounded by the configured timeout and never retried here.

mod checker;

pub use checker::ConsistencyChecker;

use crate::domain::{
    LedgerConfig, LedgerError, RecordEventRequest, RecordKey, RoleEvent, RoleStatsRecord,
};
use crate::ports::inbound::RoleLedgerApi;
use crate::ports::outbound::LedgerStore;
use async_trait::async_trait;
use shared_types::{
    with_store_timeout, CommunityId, RoleId, SystemTimeSource, TimeSource, UserId,
};
use std::sync::Arc;
use tracing::{debug, info};

/// The Role-Event Ledger.
pub struct RoleEventLedger<S: LedgerStore> {
    /// Record persistence (driven port).
    store: Arc<S>,
    /// Source of server-assigned event timestamps.
    time_source: Arc<dyn TimeSource>,
    /// Service configuration.
    config: LedgerConfig,
}

impl<S: LedgerStore> RoleEventLedger<S> {
    /// Create a ledger with the system clock and default configuration.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, Arc::new(SystemTimeSource), LedgerConfig::default())
    }

    /// Create with an explicit clock and configuration.
    pub fn with_config(store: Arc<S>, time_source: Arc<dyn TimeSource>, config: LedgerConfig) -> Self {
        Self {
            store,
            time_source,
            config,
        }
    }

    /// The injected store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }
}

#[async_trait]
impl<S: LedgerStore> RoleLedgerApi for RoleEventLedger<S> {
    async fn record_event(
        &self,
        request: RecordEventRequest,
    ) -> Result<RoleStatsRecord, LedgerError> {
        if self.config.require_idempotency_key && request.idempotency_key.is_none() {
            return Err(LedgerError::MissingIdempotencyKey);
        }

        let key = request.key();
        let counter = request.action.counter();
        let event = RoleEvent {
            user_id: request.user_id,
            user_tag: request.user_tag,
            action: request.action,
            timestamp: self.time_source.now(),
            idempotency_key: request.idempotency_key,
        };

        let record = with_store_timeout(
            self.config.store_timeout,
            self.store.upsert_and_append(&key, event, counter),
        )
        .await?;

        info!(
            key = %key,
            action = %request.action,
            total = record.total,
            restored = record.restored,
            removed = record.removed,
            "[gl-02] Role event recorded"
        );
        Ok(record)
    }

    async fn on_role_changed(
        &self,
        community_id: &CommunityId,
        role_id: &RoleId,
        user_id: &UserId,
        user_tag: &str,
        action: &str,
        idempotency_key: Option<&str>,
    ) -> Result<RoleStatsRecord, LedgerError> {
        let mut request = RecordEventRequest::parse(
            community_id.clone(),
            role_id.clone(),
            user_id.clone(),
            user_tag,
            action,
        )
        .inspect_err(|err| {
            debug!("[gl-02] Rejected role change for {}/{}: {}", community_id, role_id, err);
        })?;
        request.idempotency_key = idempotency_key.map(str::to_string);
        self.record_event(request).await
    }

    async fn get_stats(
        &self,
        community_id: &CommunityId,
        role_id: &RoleId,
    ) -> Result<Option<RoleStatsRecord>, LedgerError> {
        let key = RecordKey::new(community_id.clone(), role_id.clone());
        Ok(with_store_timeout(self.config.store_timeout, self.store.get(&key)).await?)
    }

    async fn list_events(
        &self,
        community_id: &CommunityId,
        role_id: &RoleId,
    ) -> Result<Vec<RoleEvent>, LedgerError> {
        let key = RecordKey::new(community_id.clone(), role_id.clone());
        Ok(with_store_timeout(self.config.store_timeout, self.store.list_events(&key)).await?)
    }
}

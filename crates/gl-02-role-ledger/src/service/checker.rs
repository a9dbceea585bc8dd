//! # Consistency Checker
//!
//! Diagnostic audit of stored counters against the event history. Used by
//! tests and operators; never called on the write path.

use crate::domain::{check_record, Divergence, LedgerError, RecordKey};
use crate::ports::outbound::LedgerStore;
use shared_types::{with_store_timeout, CommunityId, RoleId};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Recomputes counters from stored events and reports divergence.
pub struct ConsistencyChecker<S: LedgerStore> {
    store: Arc<S>,
    store_timeout: Duration,
}

impl<S: LedgerStore> ConsistencyChecker<S> {
    /// Create a checker over `store`.
    pub fn new(store: Arc<S>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    /// Verify one record. `Ok(None)` when consistent or absent.
    ///
    /// Counters and events come from the same snapshot, so a concurrent
    /// writer cannot produce a false report.
    pub async fn verify(
        &self,
        community_id: &CommunityId,
        role_id: &RoleId,
    ) -> Result<Option<Divergence>, LedgerError> {
        let key = RecordKey::new(community_id.clone(), role_id.clone());
        self.verify_key(&key).await
    }

    /// Verify every stored record and return all divergences.
    pub async fn audit(&self) -> Result<Vec<Divergence>, LedgerError> {
        let keys = with_store_timeout(self.store_timeout, self.store.list_keys()).await?;
        let mut divergences = Vec::new();
        for key in &keys {
            if let Some(divergence) = self.verify_key(key).await? {
                divergences.push(divergence);
            }
        }
        info!(
            records = keys.len(),
            divergent = divergences.len(),
            "[gl-02] Ledger audit complete"
        );
        Ok(divergences)
    }

    async fn verify_key(&self, key: &RecordKey) -> Result<Option<Divergence>, LedgerError> {
        let record = with_store_timeout(self.store_timeout, self.store.get(key)).await?;
        let divergence = record.as_ref().and_then(check_record);
        if let Some(divergence) = &divergence {
            warn!("[gl-02] Counter divergence: {}", divergence);
        }
        Ok(divergence)
    }
}

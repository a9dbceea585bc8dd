//! # Outbound Ports (Driven Ports)
//!
//! Persistence required by the Role-Event Ledger.
//!
//! Production: a document store with a unique index on
//! `(communityId, roleId)` and an atomic increment-and-push update.
//! Testing: `InMemoryLedgerStore` (adapters/memory.rs)

use crate::domain::{CounterField, RecordKey, RoleEvent, RoleStatsRecord};
use async_trait::async_trait;
use shared_types::StoreError;

/// Ledger store - outbound port.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Create the record if absent, append `event`, advance `counter`.
    ///
    /// ## Atomicity
    ///
    /// Implementations must make the append and the increment visible
    /// together and must serialize concurrent calls for the same key. If
    /// `event` carries an idempotency key already present in the record, the
    /// record is returned unchanged.
    async fn upsert_and_append(
        &self,
        key: &RecordKey,
        event: RoleEvent,
        counter: CounterField,
    ) -> Result<RoleStatsRecord, StoreError>;

    /// Consistent snapshot of one record. `Ok(None)` when absent.
    async fn get(&self, key: &RecordKey) -> Result<Option<RoleStatsRecord>, StoreError>;

    /// Events of one record in stored order. Empty when absent.
    async fn list_events(&self, key: &RecordKey) -> Result<Vec<RoleEvent>, StoreError>;

    /// Every stored key, for audits.
    async fn list_keys(&self) -> Result<Vec<RecordKey>, StoreError>;
}

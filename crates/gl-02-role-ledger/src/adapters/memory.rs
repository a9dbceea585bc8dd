//! In-Memory Ledger Store
//!
//! Implements `LedgerStore` with one mutex per record document. The key map
//! is only write-locked to create a record, so writers of different keys
//! never wait on each other.

use crate::domain::{CounterField, RecordKey, RoleEvent, RoleStatsRecord};
use crate::ports::outbound::LedgerStore;
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use shared_types::StoreError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

type Document = Arc<Mutex<RoleStatsRecord>>;

/// In-memory ledger store.
///
/// `set_unavailable` and `set_latency` simulate an unreachable or slow backend.
/// Simulated latency is spent before any record is touched, so a call
/// dropped during the delay has no effect.
#[derive(Default)]
pub struct InMemoryLedgerStore {
    documents: RwLock<HashMap<RecordKey, Document>>,
    unavailable: AtomicBool,
    latency: RwLock<Duration>,
    appends: AtomicU64,
}

impl InMemoryLedgerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Delay every subsequent call by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.write() = latency;
    }

    /// Number of events appended (duplicates excluded).
    pub fn append_count(&self) -> u64 {
        self.appends.load(Ordering::SeqCst)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// True when no record is stored.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    async fn simulate_backend(&self) -> Result<(), StoreError> {
        let latency = *self.latency.read();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory ledger store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }

    fn document(&self, key: &RecordKey) -> Option<Document> {
        self.documents.read().get(key).cloned()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn upsert_and_append(
        &self,
        key: &RecordKey,
        event: RoleEvent,
        counter: CounterField,
    ) -> Result<RoleStatsRecord, StoreError> {
        self.simulate_backend().await?;

        // No await point below this line.
        let document = match self.document(key) {
            Some(document) => document,
            None => match self.documents.write().entry(key.clone()) {
                Entry::Occupied(entry) => Arc::clone(entry.get()),
                Entry::Vacant(entry) => {
                    let mut record = RoleStatsRecord::new(key.clone());
                    record.apply(event, counter);
                    entry.insert(Arc::new(Mutex::new(record.clone())));
                    self.appends.fetch_add(1, Ordering::SeqCst);
                    debug!("[gl-02] Created stats record {}", key);
                    return Ok(record);
                }
            },
        };

        let mut record = document.lock();
        if let Some(idempotency_key) = event.idempotency_key.as_deref() {
            if record.contains_idempotency_key(idempotency_key) {
                debug!(
                    "[gl-02] Duplicate delivery {} for {}, not appended",
                    idempotency_key, key
                );
                return Ok(record.clone());
            }
        }
        record.apply(event, counter);
        self.appends.fetch_add(1, Ordering::SeqCst);
        Ok(record.clone())
    }

    async fn get(&self, key: &RecordKey) -> Result<Option<RoleStatsRecord>, StoreError> {
        self.simulate_backend().await?;
        Ok(self.document(key).map(|document| document.lock().clone()))
    }

    async fn list_events(&self, key: &RecordKey) -> Result<Vec<RoleEvent>, StoreError> {
        self.simulate_backend().await?;
        Ok(self
            .document(key)
            .map(|document| document.lock().events.clone())
            .unwrap_or_default())
    }

    async fn list_keys(&self) -> Result<Vec<RecordKey>, StoreError> {
        self.simulate_backend().await?;
        let mut keys: Vec<_> = self.documents.read().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

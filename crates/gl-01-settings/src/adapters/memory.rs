//! In-Memory Settings Store
//!
//! Implements `SettingsStore` over a process-local map. Also used by the
//! runtime when no external document store is configured.

use crate::domain::CommunitySettings;
use crate::ports::outbound::SettingsStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{CommunityId, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// In-memory settings store.
///
/// `set_unavailable` and `set_latency` simulate an unreachable or slow backend.
/// Simulated latency is spent before the map is touched, so a call dropped
/// during the delay has no effect.
#[derive(Default)]
pub struct InMemorySettingsStore {
    documents: RwLock<HashMap<CommunityId, CommunitySettings>>,
    unavailable: AtomicBool,
    latency: RwLock<Duration>,
    saves: AtomicU64,
}

impl InMemorySettingsStore {
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

    /// Number of acknowledged `save` calls.
    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::SeqCst)
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// True when no document is stored.
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
                "in-memory settings store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(
        &self,
        community_id: &CommunityId,
    ) -> Result<Option<CommunitySettings>, StoreError> {
        self.simulate_backend().await?;
        Ok(self.documents.read().get(community_id).cloned())
    }

    async fn save(&self, settings: &CommunitySettings) -> Result<(), StoreError> {
        self.simulate_backend().await?;
        debug!(
            "[gl-01] Saving settings for community {}",
            settings.community_id
        );
        self.documents
            .write()
            .insert(settings.community_id.clone(), settings.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn exists(&self, community_id: &CommunityId) -> Result<bool, StoreError> {
        self.simulate_backend().await?;
        Ok(self.documents.read().contains_key(community_id))
    }
}

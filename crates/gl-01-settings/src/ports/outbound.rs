//! # Outbound Ports (Driven Ports)
//!
//! Persistence required by the Settings Normalizer.
//!
//! Production: a document store keyed by `communityId`.
//! Testing: `InMemorySettingsStore` (adapters/memory.rs)

use crate::domain::CommunitySettings;
use async_trait::async_trait;
use shared_types::{CommunityId, StoreError};

/// Settings store - outbound port.
///
/// The store owns the persisted documents. `save` replaces the whole document
/// for its community; serializing concurrent read-merge-save cycles is the
/// caller's job.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load a community's document. `Ok(None)` when absent.
    async fn load(&self, community_id: &CommunityId)
        -> Result<Option<CommunitySettings>, StoreError>;

    /// Persist a document under its `community_id`.
    async fn save(&self, settings: &CommunitySettings) -> Result<(), StoreError>;

    /// Whether a document exists for the community.
    async fn exists(&self, community_id: &CommunityId) -> Result<bool, StoreError>;
}

//! # Settings Normalizer Service
//!
//! Implements `SettingsApi`:
//!
//! 1. validate and coerce the whole patch (no store access on failure);
//! 2. take the community's lock;
//! 3. load the current document, or start from defaults;
//! 4. merge the patch and save once.
//!
//! The lock covers the load-merge-save cycle only, so concurrent edits to
//! different fields of one community are both kept, and different
//! communities never wait on each other.

mod locks;

pub use locks::{KeyedGuard, KeyedLocks};

use crate::domain::{normalize_patch, CommunitySettings, SettingsConfig, SettingsError};
use crate::ports::inbound::SettingsApi;
use crate::ports::outbound::SettingsStore;
use async_trait::async_trait;
use serde_json::{Map, Value};
use shared_types::{with_store_timeout, CommunityId};
use std::sync::Arc;
use tracing::{debug, info};

/// The Settings Normalizer.
pub struct SettingsNormalizer<S: SettingsStore> {
    /// Settings persistence (driven port).
    store: Arc<S>,
    /// Service configuration.
    config: SettingsConfig,
    /// Serializes read-merge-save per community.
    community_locks: KeyedLocks<CommunityId>,
}

impl<S: SettingsStore> SettingsNormalizer<S> {
    /// Create a normalizer with default configuration.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, SettingsConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(store: Arc<S>, config: SettingsConfig) -> Self {
        Self {
            store,
            config,
            community_locks: KeyedLocks::new(),
        }
    }

    /// The injected store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Whether the community has a stored document.
    pub async fn exists(&self, community_id: &CommunityId) -> Result<bool, SettingsError> {
        Ok(with_store_timeout(self.config.store_timeout, self.store.exists(community_id)).await?)
    }
}

#[async_trait]
impl<S: SettingsStore> SettingsApi for SettingsNormalizer<S> {
    async fn apply_update(
        &self,
        community_id: &CommunityId,
        field_path: &str,
        raw_value: Value,
    ) -> Result<CommunitySettings, SettingsError> {
        let mut patch = Map::new();
        patch.insert(field_path.to_string(), raw_value);
        self.update_settings(community_id, &patch).await
    }

    async fn update_settings(
        &self,
        community_id: &CommunityId,
        patch: &Map<String, Value>,
    ) -> Result<CommunitySettings, SettingsError> {
        let normalized = normalize_patch(patch).inspect_err(|err| {
            debug!("[gl-01] Rejected patch for community {}: {}", community_id, err);
        })?;

        let _guard = self.community_locks.lock(community_id).await;

        let timeout = self.config.store_timeout;
        let mut settings = with_store_timeout(timeout, self.store.load(community_id))
            .await?
            .unwrap_or_else(|| CommunitySettings::with_defaults(community_id.clone()));

        settings.apply(&normalized);
        with_store_timeout(timeout, self.store.save(&settings)).await?;

        info!(
            community = %community_id,
            fields = normalized.len(),
            "[gl-01] Settings updated"
        );
        Ok(settings)
    }

    async fn get_settings(
        &self,
        community_id: &CommunityId,
    ) -> Result<Option<CommunitySettings>, SettingsError> {
        Ok(with_store_timeout(self.config.store_timeout, self.store.load(community_id)).await?)
    }
}

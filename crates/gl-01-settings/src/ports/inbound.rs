//! # Inbound Ports (Driving Ports)
//!
//! API exposed to the dashboard and command layer. Callers are already
//! authorized; this port only validates and persists.

use crate::domain::{CommunitySettings, SettingsError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use shared_types::CommunityId;

/// Settings Normalizer API - inbound port.
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Coerce and persist a single field.
    ///
    /// ## Errors
    ///
    /// - `InvalidFieldType`: value is neither boolean nor string
    /// - `InvalidFieldPath`: path names no module or flag
    /// - `StoreUnavailable` / `StoreTimeout`: retryable store failure
    async fn apply_update(
        &self,
        community_id: &CommunityId,
        field_path: &str,
        raw_value: Value,
    ) -> Result<CommunitySettings, SettingsError>;

    /// Coerce and persist a multi-field patch.
    ///
    /// All fields are validated before anything is written; a single bad
    /// field rejects the patch and leaves the stored document untouched.
    async fn update_settings(
        &self,
        community_id: &CommunityId,
        patch: &Map<String, Value>,
    ) -> Result<CommunitySettings, SettingsError>;

    /// Read the stored document. `None` when the community has never been
    /// configured.
    async fn get_settings(
        &self,
        community_id: &CommunityId,
    ) -> Result<Option<CommunitySettings>, SettingsError>;
}

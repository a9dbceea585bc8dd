//! # Domain Value Objects
//!
//! Requests and configuration for the ledger.

use super::entities::{RecordKey, RoleAction};
use super::errors::LedgerError;
use shared_types::{CommunityId, RoleId, UserId};
use std::time::Duration;

/// A role change to record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordEventRequest {
    /// Owning community.
    pub community_id: CommunityId,
    /// Role that changed.
    pub role_id: RoleId,
    /// Affected member.
    pub user_id: UserId,
    /// Member display label.
    pub user_tag: String,
    /// What happened.
    pub action: RoleAction,
    /// Dedup key for redelivered events.
    pub idempotency_key: Option<String>,
}

impl RecordEventRequest {
    /// Build a request without an idempotency key.
    pub fn new(
        community_id: CommunityId,
        role_id: RoleId,
        user_id: UserId,
        user_tag: impl Into<String>,
        action: RoleAction,
    ) -> Self {
        Self {
            community_id,
            role_id,
            user_id,
            user_tag: user_tag.into(),
            action,
            idempotency_key: None,
        }
    }

    /// Build a request from an untyped action string.
    ///
    /// ## Errors
    ///
    /// - `InvalidAction`: `action` is not `add`, `remove` or `restore`
    pub fn parse(
        community_id: CommunityId,
        role_id: RoleId,
        user_id: UserId,
        user_tag: impl Into<String>,
        action: &str,
    ) -> Result<Self, LedgerError> {
        Ok(Self::new(
            community_id,
            role_id,
            user_id,
            user_tag,
            action.parse()?,
        ))
    }

    /// Attach an idempotency key.
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Key of the record this request targets.
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.community_id.clone(), self.role_id.clone())
    }
}

/// Role-Event Ledger configuration.
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Upper bound for every ledger store call.
    pub store_timeout: Duration,
    /// Reject requests that carry no idempotency key.
    pub require_idempotency_key: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
            require_idempotency_key: false,
        }
    }
}

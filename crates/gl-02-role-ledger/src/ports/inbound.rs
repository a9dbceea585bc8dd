//! # Inbound Ports (Driving Ports)
//!
//! API exposed to the role-change event source and to read-only callers.

use crate::domain::{LedgerError, RecordEventRequest, RoleEvent, RoleStatsRecord};
use async_trait::async_trait;
use shared_types::{CommunityId, RoleId, UserId};

/// Role-Event Ledger API - inbound port.
#[async_trait]
pub trait RoleLedgerApi: Send + Sync {
    /// Record one role change and return the post-update record.
    ///
    /// ## Atomicity
    ///
    /// The event append and its counter increment are one store step.
    /// Concurrent calls for the same key are serialized; a call cancelled
    /// before the store acknowledges has no effect.
    ///
    /// ## Errors
    ///
    /// - `MissingIdempotencyKey`: key required by configuration
    /// - `StoreUnavailable` / `StoreTimeout`: retryable, nothing was written
    async fn record_event(
        &self,
        request: RecordEventRequest,
    ) -> Result<RoleStatsRecord, LedgerError>;

    /// Entry point for the event source, with the action as received.
    ///
    /// Delivery is at-least-once; pass `idempotency_key` to have redeliveries
    /// recorded only once.
    ///
    /// ## Errors
    ///
    /// - `InvalidAction`: action outside `add | remove | restore`
    /// - everything `record_event` returns
    async fn on_role_changed(
        &self,
        community_id: &CommunityId,
        role_id: &RoleId,
        user_id: &UserId,
        user_tag: &str,
        action: &str,
        idempotency_key: Option<&str>,
    ) -> Result<RoleStatsRecord, LedgerError>;

    /// Read a record. `None` until the first event for the key.
    async fn get_stats(
        &self,
        community_id: &CommunityId,
        role_id: &RoleId,
    ) -> Result<Option<RoleStatsRecord>, LedgerError>;

    /// Events of a record in acceptance order. Empty when the key is unknown.
    async fn list_events(
        &self,
        community_id: &CommunityId,
        role_id: &RoleId,
    ) -> Result<Vec<RoleEvent>, LedgerError>;
}

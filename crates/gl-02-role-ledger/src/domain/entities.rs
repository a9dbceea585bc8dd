//! # Domain Entities
//!
//! Role actions, events and the per-key stats record.

use super::errors::LedgerError;
use serde::{Deserialize, Serialize};
use shared_types::{CommunityId, RoleId, Timestamp, UserId};
use std::fmt;
use std::str::FromStr;

/// What happened to a member's role. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleAction {
    /// Role granted.
    Add,
    /// Role taken away.
    Remove,
    /// Role given back after a removal.
    Restore,
}

impl RoleAction {
    /// Every action, in counter order.
    pub const ALL: [RoleAction; 3] = [RoleAction::Add, RoleAction::Remove, RoleAction::Restore];

    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleAction::Add => "add",
            RoleAction::Remove => "remove",
            RoleAction::Restore => "restore",
        }
    }

    /// The aggregate counter this action advances.
    pub fn counter(&self) -> CounterField {
        match self {
            RoleAction::Add => CounterField::Total,
            RoleAction::Remove => CounterField::Removed,
            RoleAction::Restore => CounterField::Restored,
        }
    }
}

impl FromStr for RoleAction {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(RoleAction::Add),
            "remove" => Ok(RoleAction::Remove),
            "restore" => Ok(RoleAction::Restore),
            other => Err(LedgerError::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for RoleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate counters of a stats record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterField {
    /// Advanced by `add`.
    Total,
    /// Advanced by `restore`.
    Restored,
    /// Advanced by `remove`.
    Removed,
}

impl CounterField {
    /// Field name in the stored document.
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterField::Total => "total",
            CounterField::Restored => "restored",
            CounterField::Removed => "removed",
        }
    }
}

impl fmt::Display for CounterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite key of a stats record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordKey {
    /// Owning community.
    pub community_id: CommunityId,
    /// Role within the community.
    pub role_id: RoleId,
}

impl RecordKey {
    /// Build a key.
    pub fn new(community_id: CommunityId, role_id: RoleId) -> Self {
        Self {
            community_id,
            role_id,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.community_id, self.role_id)
    }
}

/// One recorded role change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleEvent {
    /// Affected member.
    pub user_id: UserId,
    /// Display label at the time of the event. May go stale.
    pub user_tag: String,
    /// What happened.
    pub action: RoleAction,
    /// Server-assigned time of acceptance (ms since epoch).
    pub timestamp: Timestamp,
    /// Caller-supplied dedup key for at-least-once sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

/// Counter values, either stored or recomputed from events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Count of `add`.
    pub total: u64,
    /// Count of `restore`.
    pub restored: u64,
    /// Count of `remove`.
    pub removed: u64,
}

impl Counters {
    /// Count actions in an event sequence.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a RoleEvent>) -> Self {
        let mut counters = Self::default();
        for event in events {
            counters.increment(event.action.counter());
        }
        counters
    }

    /// Value of one counter.
    pub fn get(&self, field: CounterField) -> u64 {
        match field {
            CounterField::Total => self.total,
            CounterField::Restored => self.restored,
            CounterField::Removed => self.removed,
        }
    }

    /// Advance one counter by one.
    pub fn increment(&mut self, field: CounterField) {
        let slot = match field {
            CounterField::Total => &mut self.total,
            CounterField::Restored => &mut self.restored,
            CounterField::Removed => &mut self.removed,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Aggregate counters plus the full event history for one (community, role).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleStatsRecord {
    /// Owning community.
    pub community_id: CommunityId,
    /// Role within the community.
    pub role_id: RoleId,
    /// Count of `add` events.
    pub total: u64,
    /// Count of `restore` events.
    pub restored: u64,
    /// Count of `remove` events.
    pub removed: u64,
    /// Events in acceptance order.
    pub events: Vec<RoleEvent>,
}

impl RoleStatsRecord {
    /// Empty record for a key.
    pub fn new(key: RecordKey) -> Self {
        Self {
            community_id: key.community_id,
            role_id: key.role_id,
            total: 0,
            restored: 0,
            removed: 0,
            events: Vec::new(),
        }
    }

    /// Composite key of this record.
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.community_id.clone(), self.role_id.clone())
    }

    /// Stored counter values.
    pub fn counters(&self) -> Counters {
        Counters {
            total: self.total,
            restored: self.restored,
            removed: self.removed,
        }
    }

    /// Append an event and advance `counter` in one step.
    ///
    /// Store adapters call this while holding the record's lock; it is the
    /// only mutation a record ever sees.
    pub fn apply(&mut self, event: RoleEvent, counter: CounterField) {
        debug_assert_eq!(event.action.counter(), counter);
        let mut counters = self.counters();
        counters.increment(counter);
        self.total = counters.total;
        self.restored = counters.restored;
        self.removed = counters.removed;
        self.events.push(event);
    }

    /// Whether an event with this idempotency key was already recorded.
    pub fn contains_idempotency_key(&self, key: &str) -> bool {
        self.events
            .iter()
            .any(|event| event.idempotency_key.as_deref() == Some(key))
    }
}

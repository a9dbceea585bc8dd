//! # Counter Consistency
//!
//! Compares stored counters with counters recomputed from the event history.

use super::entities::{CounterField, Counters, RecordKey, RoleStatsRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One counter that disagrees with the event history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterMismatch {
    /// Which counter.
    pub counter: CounterField,
    /// Value held by the record.
    pub stored: u64,
    /// Value derived from the events.
    pub recomputed: u64,
}

impl CounterMismatch {
    /// `stored - recomputed`; positive when the counter ran ahead of the log.
    pub fn delta(&self) -> i128 {
        i128::from(self.stored) - i128::from(self.recomputed)
    }
}

/// Divergence report for one record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divergence {
    /// Affected record.
    pub key: RecordKey,
    /// Disagreeing counters, in `total`, `restored`, `removed` order.
    pub mismatches: Vec<CounterMismatch>,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.key)?;
        for m in &self.mismatches {
            write!(
                f,
                " {} stored={} recomputed={} delta={:+}",
                m.counter,
                m.stored,
                m.recomputed,
                m.delta()
            )?;
        }
        Ok(())
    }
}

/// Check a record snapshot against its own events.
///
/// Returns `None` when every counter matches.
pub fn check_record(record: &RoleStatsRecord) -> Option<Divergence> {
    let stored = record.counters();
    let recomputed = Counters::from_events(&record.events);

    let mismatches: Vec<_> = [
        CounterField::Total,
        CounterField::Restored,
        CounterField::Removed,
    ]
    .into_iter()
    .filter(|field| stored.get(*field) != recomputed.get(*field))
    .map(|field| CounterMismatch {
        counter: field,
        stored: stored.get(field),
        recomputed: recomputed.get(field),
    })
    .collect();

    if mismatches.is_empty() {
        None
    } else {
        Some(Divergence {
            key: record.key(),
            mismatches,
        })
    }
}

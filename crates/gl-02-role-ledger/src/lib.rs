//! # GL-02 Role-Event Ledger
//!
//! Append-only history of role changes per (community, role), with aggregate
//! counters that never drift from that history.
//!
//! **Subsystem ID:** 2  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Counter Consistency | `total`/`restored`/`removed` equal the add/restore/remove event counts |
//! | 2 | Append Only | Recorded events are never mutated or removed |
//! | 3 | Acceptance Order | Stored order equals the order the ledger accepted calls |
//! | 4 | Per-Key Linearizability | Concurrent writes to one key never lose an update |
//! | 5 | Key Independence | Writes to different keys never wait on each other |
//!
//! ## Data Flow
//!
//! ```text
//! Event source ──on_role_changed──→ RoleEventLedger ──upsert_and_append──→ LedgerStore
//!                                                                 [append + increment, atomic]
//!
//! ConsistencyChecker ──get / list_keys──→ LedgerStore   (audit only, never on the write path)
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! gl-02-role-ledger/
//! ├── domain/          # RoleAction, RoleEvent, RoleStatsRecord, divergence checks
//! ├── ports/           # RoleLedgerApi (inbound), LedgerStore (outbound)
//! ├── adapters/        # In-memory LedgerStore with per-document locking
//! └── service/         # RoleEventLedger, ConsistencyChecker
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::InMemoryLedgerStore;
pub use domain::{
    check_record, CounterField, CounterMismatch, Counters, Divergence, LedgerConfig, LedgerError,
    RecordEventRequest, RecordKey, RoleAction, RoleEvent, RoleStatsRecord,
};
pub use ports::{LedgerStore, RoleLedgerApi};
pub use service::{ConsistencyChecker, RoleEventLedger};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

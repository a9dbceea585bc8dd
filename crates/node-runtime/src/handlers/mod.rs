//! # Event Handlers
//!
//! Tasks that feed external events into the subsystems.

pub mod role_changes;

pub use role_changes::{IntakeStats, RoleChangeHandler, RoleChanged};

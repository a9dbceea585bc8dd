//! # Shared Types Crate
//!
//! Types used by more than one Guild-Ledger subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identifiers and store errors are defined once.
//! - **Opaque Identity**: community, role and user ids are never parsed; they
//!   are compared and hashed only.
//! - **Bounded Store Calls**: every call across a store boundary goes through
//!   [`with_store_timeout`].

pub mod entities;
pub mod errors;
pub mod store;
pub mod time;

pub use entities::*;
pub use errors::*;
pub use store::with_store_timeout;
pub use time::{FixedTimeSource, SystemTimeSource, TimeSource};

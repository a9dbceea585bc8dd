//! # Ports Layer
//!
//! - `inbound.rs` - Driving port (API for the event source and readers)
//! - `outbound.rs` - Driven port (record persistence)

pub mod inbound;
pub mod outbound;

pub use inbound::RoleLedgerApi;
pub use outbound::LedgerStore;

//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound `LedgerStore` port.

mod memory;

pub use memory::InMemoryLedgerStore;

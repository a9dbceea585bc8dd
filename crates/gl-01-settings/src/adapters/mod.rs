//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound `SettingsStore` port.

mod memory;

pub use memory::InMemorySettingsStore;

//! # Ports Layer
//!
//! - `inbound.rs` - Driving port (API for the dashboard/command layer)
//! - `outbound.rs` - Driven port (settings persistence)

pub mod inbound;
pub mod outbound;

pub use inbound::SettingsApi;
pub use outbound::SettingsStore;

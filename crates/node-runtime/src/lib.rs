//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! ## Architectural Patterns
//!
//! - **DDD (Domain-Driven Design)**: Each subsystem owns its domain logic
//! - **Hexagonal Architecture**: Ports define contracts, Adapters implement them
//! - **Bounded Intake**: External role changes enter through one mpsc channel

#![warn(missing_docs)]

pub mod container;
pub mod handlers;
pub mod runtime;

pub use container::{ConfigError, RuntimeConfig, ServiceContainer};
pub use handlers::{IntakeStats, RoleChangeHandler, RoleChanged};
pub use runtime::{NodeRuntime, ShutdownReport};

//! # Service Container
//!
//! Central container holding both subsystem services with proper
//! lifetime management and dependency injection.

pub mod config;
pub mod services;

pub use config::{ConfigError, IntakeConfig, RuntimeConfig};
pub use services::{ConcreteLedgerService, ConcreteSettingsService, ServiceContainer};

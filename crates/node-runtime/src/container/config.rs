//! # Runtime Configuration
//!
//! Unified configuration for both subsystems and the intake loop.
//!
//! Every value has a default and can be overridden through `GL_*`
//! environment variables.

use gl_01_settings::SettingsConfig;
use gl_02_role_ledger::LedgerConfig;
use std::time::Duration;
use thiserror::Error;

/// Store call timeout in milliseconds, applied to both subsystems.
pub const ENV_STORE_TIMEOUT_MS: &str = "GL_STORE_TIMEOUT_MS";
/// Capacity of the role-change intake channel.
pub const ENV_INTAKE_CAPACITY: &str = "GL_INTAKE_CAPACITY";
/// `true` to reject role changes without an idempotency key.
pub const ENV_REQUIRE_IDEMPOTENCY_KEY: &str = "GL_REQUIRE_IDEMPOTENCY_KEY";

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Settings Normalizer configuration.
    pub settings: SettingsConfig,
    /// Role-Event Ledger configuration.
    pub ledger: LedgerConfig,
    /// Role-change intake configuration.
    pub intake: IntakeConfig,
}

/// Role-change intake configuration.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Bounded channel capacity; senders wait when it is full.
    pub capacity: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self { capacity: 1024 }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A store timeout of zero would fail every call.
    #[error("{subsystem} store timeout must be greater than zero")]
    ZeroStoreTimeout {
        /// Subsystem tag.
        subsystem: &'static str,
    },

    /// `tokio::sync::mpsc::channel` rejects a zero capacity.
    #[error("intake capacity must be greater than zero")]
    ZeroIntakeCapacity,

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {name}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },
}

impl RuntimeConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `GL_*` name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_STORE_TIMEOUT_MS) {
            let millis: u64 = parse_env(ENV_STORE_TIMEOUT_MS, &raw)?;
            config.settings.store_timeout = Duration::from_millis(millis);
            config.ledger.store_timeout = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup(ENV_INTAKE_CAPACITY) {
            config.intake.capacity = parse_env(ENV_INTAKE_CAPACITY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_REQUIRE_IDEMPOTENCY_KEY) {
            config.ledger.require_idempotency_key = parse_env(ENV_REQUIRE_IDEMPOTENCY_KEY, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values no component can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.settings.store_timeout.is_zero() {
            return Err(ConfigError::ZeroStoreTimeout { subsystem: "gl-01" });
        }
        if self.ledger.store_timeout.is_zero() {
            return Err(ConfigError::ZeroStoreTimeout { subsystem: "gl-02" });
        }
        if self.intake.capacity == 0 {
            return Err(ConfigError::ZeroIntakeCapacity);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        name,
        value: raw.to_string(),
    })
}

//! # Domain Errors
//!
//! Error types for the Settings Normalizer subsystem.

use shared_types::StoreError;
use thiserror::Error;

/// Raised by the boolean coercion policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    /// Value is neither a boolean nor a string.
    #[error("Type mismatch: expected boolean or string, found {found}")]
    TypeMismatch {
        /// JSON type of the rejected value.
        found: &'static str,
    },
}

/// Settings Normalizer error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A field value could not be coerced; the whole patch was rejected.
    #[error("Invalid type for field '{field}': expected boolean or string, found {found}")]
    InvalidFieldType {
        /// Field path as supplied by the caller.
        field: String,
        /// JSON type of the rejected value.
        found: &'static str,
    },

    /// A field path does not name a module or flag.
    #[error("Invalid field path: '{0}'")]
    InvalidFieldPath(String),

    /// The patch carried no fields.
    #[error("Settings patch is empty")]
    EmptyPatch,

    /// Settings store unreachable.
    #[error("Settings store unavailable: {0}")]
    StoreUnavailable(String),

    /// Settings store did not answer in time.
    #[error("Settings store timed out after {timeout_ms}ms")]
    StoreTimeout {
        /// Bound that was exceeded.
        timeout_ms: u64,
    },
}

impl SettingsError {
    /// Whether the caller may retry the same request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SettingsError::StoreUnavailable(_) | SettingsError::StoreTimeout { .. }
        )
    }
}

impl From<StoreError> for SettingsError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(message) => SettingsError::StoreUnavailable(message),
            StoreError::Timeout { timeout_ms } => SettingsError::StoreTimeout { timeout_ms },
        }
    }
}

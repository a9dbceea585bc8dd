//! # Domain Errors
//!
//! Error types for the Role-Event Ledger subsystem.

use shared_types::StoreError;
use thiserror::Error;

/// Role-Event Ledger error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Action outside `add | remove | restore`. Nothing was written.
    #[error("Invalid action: '{0}' (expected add, remove or restore)")]
    InvalidAction(String),

    /// The ledger is configured to require idempotency keys.
    #[error("Idempotency key required but not supplied")]
    MissingIdempotencyKey,

    /// Ledger store unreachable.
    #[error("Ledger store unavailable: {0}")]
    StoreUnavailable(String),

    /// Ledger store did not acknowledge in time.
    #[error("Ledger store timed out after {timeout_ms}ms")]
    StoreTimeout {
        /// Bound that was exceeded.
        timeout_ms: u64,
    },
}

impl LedgerError {
    /// Whether the caller may retry the same request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LedgerError::StoreUnavailable(_) | LedgerError::StoreTimeout { .. }
        )
    }
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(message) => LedgerError::StoreUnavailable(message),
            StoreError::Timeout { timeout_ms } => LedgerError::StoreTimeout { timeout_ms },
        }
    }
}

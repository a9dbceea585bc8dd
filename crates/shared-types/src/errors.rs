//! # Error Types
//!
//! Errors raised at the store boundary. Subsystems map these onto their own
//! error enums; both variants are retryable by the external caller.

use thiserror::Error;

/// Failure of an outbound store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Persistence unreachable or refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store did not acknowledge within the configured bound.
    #[error("Store timed out after {timeout_ms}ms")]
    Timeout {
        /// Bound that was exceeded.
        timeout_ms: u64,
    },
}

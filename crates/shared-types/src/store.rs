//! Timeout bound for store calls.

use crate::errors::StoreError;
use std::future::Future;
use std::time::Duration;

/// Await a store future for at most `limit`.
///
/// On expiry the future is dropped before completion, so a store adapter that
/// performs its write without an intermediate await point leaves no partial
/// effect behind.
pub async fn with_store_timeout<T, F>(limit: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout {
            timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}

//! Exponential backoff for rate-limited requests.
//!
//! Only [`SyncError::RateLimited`] is retried; every other failure is
//! propagated immediately. The budget counts retries, not calls: with
//! `max_retries = 5` an operation is attempted at most 6 times.

use std::future::Future;
use std::time::Duration;

use shopsync_types::RetryConfig;

use crate::error::SyncError;

/// Executes `operation` with exponential backoff on 429 responses.
///
/// The delay starts at `retry.initial_delay_ms` and doubles after every
/// retry. When the budget is exhausted, the last 429 surfaces as
/// [`SyncError::RequestFailed`] with status 429 so the caller sees a
/// terminal failure carrying the response payload.
pub(crate) async fn retry_on_rate_limit<T, F, Fut>(
    retry: &RetryConfig,
    mut operation: F,
) -> Result<T, SyncError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SyncError>>,
{
    let mut retries_left = retry.max_retries;
    let mut delay = Duration::from_millis(retry.initial_delay_ms);

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(SyncError::RateLimited { body }) => {
                if retries_left == 0 {
                    return Err(SyncError::RequestFailed { status: 429, body });
                }
                tracing::warn!(
                    delay_ms = delay.as_millis() as u64,
                    retries_left,
                    "received 429 Too Many Requests, backing off before retry"
                );
                tokio::time::sleep(delay).await;
                delay = delay.saturating_mul(2);
                retries_left -= 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_retry(max_retries: u32) -> RetryConfig {
        RetryConfig { max_retries, initial_delay_ms: 1 }
    }

    fn rate_limited() -> SyncError {
        SyncError::RateLimited { body: "throttled".to_string() }
    }

    #[tokio::test]
    async fn succeeds_immediately_without_retrying() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_on_rate_limit(&fast_retry(5), || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, SyncError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_until_success() {
        // 429 exactly twice, then success: three calls total.
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_on_rate_limit(&fast_retry(5), || {
            let c = Arc::clone(&c);
            async move {
                if c.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(rate_limited())
                } else {
                    Ok::<u32, SyncError>(7)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn backoff_delay_doubles_between_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let retry = RetryConfig { max_retries: 3, initial_delay_ms: 20 };
        let start = tokio::time::Instant::now();
        let result = retry_on_rate_limit(&retry, || {
            let c = Arc::clone(&c);
            async move {
                if c.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(rate_limited())
                } else {
                    Ok::<u32, SyncError>(1)
                }
            }
        })
        .await;
        assert!(result.is_ok());
        // Two retries: 20ms then 40ms of backoff.
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn exhaustion_surfaces_terminal_request_failure() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_on_rate_limit(&fast_retry(5), || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, SyncError>(rate_limited())
            }
        })
        .await;
        // max_retries = 5: six calls total.
        assert_eq!(calls.load(Ordering::SeqCst), 6);
        match result {
            Err(SyncError::RequestFailed { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "throttled");
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn other_failures_are_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_on_rate_limit(&fast_retry(5), || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, SyncError>(SyncError::RequestFailed {
                    status: 404,
                    body: "Not Found".to_string(),
                })
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(SyncError::RequestFailed { status: 404, .. })));
    }
}

use std::future::Future;
use std::time::Duration;

/// Retry-with-backoff policy for upstream calls.
///
/// Delays grow exponentially from `base_delay`, capped at `max_delay`. Only
/// transient errors (see [`TmdbError::is_transient`](crate::TmdbError::is_transient))
/// are retried; the final attempt's error is surfaced unmodified.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A policy that performs a single attempt.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Backoff delay before retry number `retry` (0-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        (self.base_delay * 2u32.saturating_pow(retry)).min(self.max_delay)
    }

    /// Run `op` until it succeeds, fails permanently, or attempts run out.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> crate::Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = crate::Result<T>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt >= self.max_attempts || !err.is_transient() {
                        return Err(err);
                    }
                    let delay = self.delay_for(attempt - 1);
                    tracing::warn!(
                        "Retry {}/{} after error: {}",
                        attempt,
                        self.max_attempts,
                        err
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

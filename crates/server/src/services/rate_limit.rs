use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub max_requests: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(15 * 60),
        }
    }
}

/// Sliding-window request limiter keyed by client identity.
///
/// Each key tracks the timestamps of its requests within the window; a request
/// is admitted only while fewer than `max_requests` timestamps remain. The map
/// is updated atomically under a single mutex.
pub struct RateLimiter {
    config: RateLimitConfig,
    hits: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            hits: Mutex::new(HashMap::new()),
        }
    }

    /// Record a request for `key` and report whether it is admitted.
    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut hits = self.hits.lock();

        // Prune every window and drop idle clients, otherwise the map grows
        // by one entry per distinct client for the lifetime of the process.
        hits.retain(|_, window| {
            while window
                .front()
                .is_some_and(|t| now.duration_since(*t) >= self.config.window)
            {
                window.pop_front();
            }
            !window.is_empty()
        });

        let window = hits.entry(key.to_string()).or_default();
        if window.len() >= self.config.max_requests {
            false
        } else {
            window.push_back(now);
            true
        }
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.hits.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: usize, window_secs: u64) -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            max_requests,
            window: Duration::from_secs(window_secs),
        })
    }

    #[tokio::test]
    async fn test_admits_up_to_max_then_rejects() {
        let limiter = limiter(3, 60);
        assert!(limiter.allow("1.2.3.4"));
        assert!(limiter.allow("1.2.3.4"));
        assert!(limiter.allow("1.2.3.4"));
        assert!(!limiter.allow("1.2.3.4"));
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let limiter = limiter(1, 60);
        assert!(limiter.allow("1.2.3.4"));
        assert!(!limiter.allow("1.2.3.4"));
        assert!(limiter.allow("5.6.7.8"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_keys_are_evicted_once_their_windows_expire() {
        let limiter = limiter(10, 60);
        for i in 0..50 {
            assert!(limiter.allow(&format!("10.0.0.{}", i)));
        }
        assert_eq!(limiter.tracked_keys(), 50);

        tokio::time::advance(Duration::from_secs(3600)).await;
        assert!(limiter.allow("192.168.0.1"));
        assert_eq!(limiter.tracked_keys(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_readmits_after_window_slides() {
        let limiter = limiter(2, 60);
        assert!(limiter.allow("1.2.3.4"));
        assert!(limiter.allow("1.2.3.4"));
        assert!(!limiter.allow("1.2.3.4"));

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(limiter.allow("1.2.3.4"));
    }
}

//! Per-client request quota.
//!
//! Sliding window: at most `max_requests` per `window` per client key.
//! Non-blocking; callers answer 429 when a slot is unavailable.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

#[derive(Clone)]
pub struct ClientRateLimiter {
    clients: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    max_requests: usize,
    window: Duration,
}

impl ClientRateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window,
        }
    }

    /// Take a slot for `client` if one is available within the window.
    pub async fn try_acquire(&self, client: &str) -> bool {
        let mut clients = self.clients.lock().await;
        let now = Instant::now();
        let timestamps = clients.entry(client.to_string()).or_default();

        // Drop timestamps that have aged out of the window
        while let Some(&front) = timestamps.front() {
            if now.duration_since(front) >= self.window {
                timestamps.pop_front();
            } else {
                break;
            }
        }

        if timestamps.len() < self.max_requests {
            timestamps.push_back(now);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn quota_is_enforced_within_the_window() {
        let limiter = ClientRateLimiter::new(2, Duration::from_secs(60));
        assert!(limiter.try_acquire("1.2.3.4").await);
        assert!(limiter.try_acquire("1.2.3.4").await);
        assert!(!limiter.try_acquire("1.2.3.4").await);
    }

    #[tokio::test(start_paused = true)]
    async fn slots_free_up_after_the_window_passes() {
        let limiter = ClientRateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.try_acquire("1.2.3.4").await);
        assert!(!limiter.try_acquire("1.2.3.4").await);

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(limiter.try_acquire("1.2.3.4").await);
    }

    #[tokio::test(start_paused = true)]
    async fn clients_are_limited_independently() {
        let limiter = ClientRateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.try_acquire("1.2.3.4").await);
        assert!(limiter.try_acquire("5.6.7.8").await);
        assert!(!limiter.try_acquire("1.2.3.4").await);
    }
}

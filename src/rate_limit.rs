//! In-memory rate limiting for contact submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`,
//! keyed by client address. Each key may record at most `limit` requests
//! within `window`. Keys whose window has fully drained are swept once the
//! map grows past `SWEEP_THRESHOLD`, so idle clients do not accumulate.

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const SWEEP_THRESHOLD: usize = 1024;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("too many submissions (max {limit} per {window_secs}s)")]
    Exceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    #[must_use]
    pub fn new(limit: usize, window: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), limit, window }
    }

    /// Check the limit for `key`, then record the request if allowed.
    pub fn check_and_record(&self, key: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(key, Instant::now())
    }

    /// Check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, key: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if inner.len() > SWEEP_THRESHOLD {
            inner.retain(|_, deque| {
                prune_window(deque, now, self.window);
                !deque.is_empty()
            });
        }

        let deque = inner.entry(key.to_owned()).or_default();
        prune_window(deque, now, self.window);
        if deque.len() >= self.limit {
            return Err(RateLimitError::Exceeded { limit: self.limit, window_secs: self.window.as_secs() });
        }
        deque.push_back(now);
        Ok(())
    }

    /// Number of keys currently tracked.
    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

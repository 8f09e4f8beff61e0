//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the process configuration and the contact rate limiter; there
//! is no persistence, so nothing else outlives a request.

use crate::config::Config;
use crate::rate_limit::RateLimiter;

/// Clone is required by Axum; the limiter is `Arc`-backed.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub contact_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { contact_limiter: RateLimiter::new(config.contact_rate_limit, config.contact_rate_window), config }
    }
}

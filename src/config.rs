//! Process configuration read from the environment.
//!
//! Values come from real environment variables, with a `.env` file loaded
//! first by `main`. Unset or unparsable values fall back to the defaults
//! below rather than aborting startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
/// Simulated processing time before an inquiry is acknowledged.
pub const DEFAULT_CONTACT_LATENCY_MS: u64 = 2000;
pub const DEFAULT_CONTACT_RATE_LIMIT: usize = 5;
pub const DEFAULT_CONTACT_RATE_WINDOW_SECS: u64 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub contact_latency: Duration,
    pub contact_rate_limit: usize,
    pub contact_rate_window: Duration,
    /// Key rate limits on `X-Forwarded-For`. Only safe behind a proxy that
    /// overwrites the header.
    pub trust_forwarded_for: bool,
}

impl Config {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            contact_latency: Duration::from_millis(parse_or(
                &lookup,
                "CONTACT_LATENCY_MS",
                DEFAULT_CONTACT_LATENCY_MS,
            )),
            contact_rate_limit: parse_or(&lookup, "CONTACT_RATE_LIMIT", DEFAULT_CONTACT_RATE_LIMIT),
            contact_rate_window: Duration::from_secs(parse_or(
                &lookup,
                "CONTACT_RATE_WINDOW_SECS",
                DEFAULT_CONTACT_RATE_WINDOW_SECS,
            )),
            trust_forwarded_for: parse_flag(&lookup, "TRUST_FORWARDED_FOR"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// `true` for `1`, `true` or `yes` (any case); everything else is `false`.
fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    lookup(key).is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

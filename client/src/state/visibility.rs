//! One-shot scroll visibility tracking.
//!
//! A tracker starts `Pending`, flips to `Revealed` the first time its region
//! is intersecting the viewport at or above the threshold, and stays there.
//! `TornDown` is terminal: the owning section unmounted and later
//! observations must not change anything.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Threshold used by most sections.
pub const SECTION_THRESHOLD: f64 = 0.2;
/// The about section waits for a larger share of itself to be on screen.
pub const ABOUT_THRESHOLD: f64 = 0.3;

/// Lifecycle of a single tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisibilityPhase {
    #[default]
    Pending,
    Revealed,
    TornDown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTracker {
    threshold: f64,
    phase: VisibilityPhase,
    revealed: bool,
}

impl VisibilityTracker {
    /// Create a pending tracker. The threshold is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold: clamp_threshold(threshold), phase: VisibilityPhase::Pending, revealed: false }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn phase(&self) -> VisibilityPhase {
        self.phase
    }

    /// Whether the region has been revealed. Stays `true` after teardown if
    /// the reveal already happened.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection sample.
    ///
    /// Returns `true` only for the sample that caused the reveal.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.phase != VisibilityPhase::Pending {
            return false;
        }
        if !intersecting || ratio.is_nan() || ratio < self.threshold {
            return false;
        }
        self.phase = VisibilityPhase::Revealed;
        self.revealed = true;
        true
    }

    /// Stop tracking. Idempotent.
    pub fn teardown(&mut self) {
        self.phase = VisibilityPhase::TornDown;
    }

    /// Whether the browser watcher can be released: either the reveal
    /// happened or the tracker was torn down.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase != VisibilityPhase::Pending
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(SECTION_THRESHOLD)
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) }
}

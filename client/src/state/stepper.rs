//! Cyclic "active step" index for the automation showcase.
//!
//! The stepper only advances while running. `stop` is terminal so a tick
//! that was already queued when the section unmounted cannot move it.

#[cfg(test)]
#[path = "stepper_test.rs"]
mod stepper_test;

/// Number of workflow stages highlighted in sequence.
pub const WORKFLOW_STEP_COUNT: usize = 4;
/// Time between advances.
pub const STEP_INTERVAL_MS: u32 = 2000;

/// Render status of one step relative to the active index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Active,
    /// Before the active step; its outgoing connector is drawn.
    Reached,
    Upcoming,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CyclicStepper {
    len: usize,
    active: usize,
    running: bool,
    stopped: bool,
}

impl CyclicStepper {
    /// A stepper over `len` steps starting at index 0. `len` is at least 1.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1), active: 0, running: false, stopped: false }
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Begin advancing. Ignored once stopped.
    pub fn start(&mut self) {
        if !self.stopped {
            self.running = true;
        }
    }

    /// Stop for good.
    pub fn stop(&mut self) {
        self.running = false;
        self.stopped = true;
    }

    /// Advance by one position. Returns the new index, or `None` when the
    /// stepper is not running.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.running {
            return None;
        }
        self.active = (self.active + 1) % self.len;
        Some(self.active)
    }

    #[must_use]
    pub fn step_status(&self, index: usize) -> StepStatus {
        match index.cmp(&self.active) {
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Less => StepStatus::Reached,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Whether the connector leaving step `index` is drawn.
    #[must_use]
    pub fn connector_lit(&self, index: usize) -> bool {
        self.active >= index
    }
}

impl Default for CyclicStepper {
    fn default() -> Self {
        Self::new(WORKFLOW_STEP_COUNT)
    }
}

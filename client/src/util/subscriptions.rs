//! Scoped ownership of browser subscriptions.
//!
//! Observers, listeners, and intervals are registered here with a release
//! callback. Releasing runs each callback exactly once, newest first, and
//! dropping a `Subscriptions` releases whatever it still holds. Bound to a
//! reactive owner with `scope_to_owner`, that makes unmounting a section
//! release everything the section acquired.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

type Release = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct Subscriptions {
    held: Vec<(&'static str, Release)>,
}

impl Subscriptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold a resource until release. `label` is only used for logging.
    pub fn hold(&mut self, label: &'static str, release: impl FnOnce() + 'static) {
        self.held.push((label, Box::new(release)));
    }

    /// Number of resources not yet released.
    #[must_use]
    pub fn live(&self) -> usize {
        self.held.len()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.held.iter().map(|(label, _)| *label).collect()
    }

    /// Release everything, newest first.
    pub fn release_all(&mut self) {
        while let Some((_label, release)) = self.held.pop() {
            #[cfg(feature = "hydrate")]
            log::debug!("releasing {_label}");
            release();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl std::fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriptions").field("held", &self.labels()).finish()
    }
}

/// Release `subs` when the current reactive owner is cleaned up.
///
/// An empty scope is dropped at once. Without a current owner the scope is
/// released immediately.
pub fn scope_to_owner(subs: Subscriptions) {
    if subs.live() == 0 {
        return;
    }
    let subs = send_wrapper::SendWrapper::new(subs);
    leptos::prelude::on_cleanup(move || drop(subs));
}

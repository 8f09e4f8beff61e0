//! Timer binding for `CyclicStepper`.

#[cfg(test)]
#[path = "stepper_test.rs"]
mod stepper_test;

use leptos::prelude::*;

use crate::state::stepper::CyclicStepper;
#[cfg(feature = "hydrate")]
use crate::util::subscriptions::{Subscriptions, scope_to_owner};

/// Advance a fresh stepper every `period_ms` once `trigger` is `true`.
///
/// Nothing runs before the trigger. The interval is cleared and the stepper
/// stopped when the owning component is cleaned up.
pub fn use_cyclic_stepper(trigger: Signal<bool>, step_count: usize, period_ms: u32) -> Signal<CyclicStepper> {
    let stepper = RwSignal::new(CyclicStepper::new(step_count));
    drive_stepper(stepper, trigger, period_ms);
    stepper.into()
}

/// Start `stepper` on the first `true` from `trigger` and stop it for good
/// when the current owner is cleaned up.
fn drive_stepper(stepper: RwSignal<CyclicStepper>, trigger: Signal<bool>, period_ms: u32) {
    Effect::new(move || {
        if !trigger.get() {
            return;
        }
        if stepper.with_untracked(|s| s.is_running() || s.is_stopped()) {
            return;
        }
        stepper.update(CyclicStepper::start);

        #[cfg(feature = "hydrate")]
        {
            let interval = gloo_timers::callback::Interval::new(period_ms, move || {
                let _ = stepper.try_update(|s| s.tick());
            });
            let mut subs = Subscriptions::new();
            subs.hold("step-interval", move || drop(interval));
            scope_to_owner(subs);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = period_ms;
    });

    on_cleanup(move || {
        let _ = stepper.try_update(CyclicStepper::stop);
    });
}

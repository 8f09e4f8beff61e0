//! Window-level pointer tracking shared through context.
//!
//! `provide_pointer` is called once by the page shell. It owns the only
//! pointer listeners and publishes a read-only `Signal<PointerState>`;
//! decorative components read it with `use_pointer`.

use leptos::prelude::*;

use crate::state::pointer::PointerState;
#[cfg(feature = "hydrate")]
use crate::util::subscriptions::{Subscriptions, scope_to_owner};

/// Elements that grow the custom cursor while hovered.
pub const INTERACTIVE_SELECTOR: &str = "a, button, .hover-glow";

/// Install pointer listeners for the current owner and provide the state.
pub fn provide_pointer() -> Signal<PointerState> {
    let state = RwSignal::new(PointerState::default());

    #[cfg(feature = "hydrate")]
    {
        let mut subs = Subscriptions::new();
        let measure = move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            state.update(|s| s.set_viewport(width, height));
        };
        Effect::new(move || measure());

        let moved = window_event_listener(leptos::ev::mousemove, move |ev| {
            state.update(|s| s.record(f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
        subs.hold("mousemove", move || moved.remove());

        let over = window_event_listener(leptos::ev::mouseover, move |ev| {
            let hovering = is_interactive_target(ev.target());
            if state.with_untracked(|s| s.hovering) != hovering {
                state.update(|s| s.set_hovering(hovering));
            }
        });
        subs.hold("mouseover", move || over.remove());

        let resized = window_event_listener(leptos::ev::resize, move |_| measure());
        subs.hold("resize", move || resized.remove());

        scope_to_owner(subs);
    }

    let signal = Signal::from(state.read_only());
    provide_context(signal);
    signal
}

/// Read the pointer state provided by the page shell.
pub fn use_pointer() -> Signal<PointerState> {
    expect_context::<Signal<PointerState>>()
}

#[cfg(feature = "hydrate")]
fn is_interactive_target(target: Option<web_sys::EventTarget>) -> bool {
    use wasm_bindgen::JsCast;

    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

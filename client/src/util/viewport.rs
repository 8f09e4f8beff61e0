//! Viewport bindings: scroll-triggered reveals and scroll position.
//!
//! `use_reveal` feeds `IntersectionObserver` samples into a
//! `VisibilityTracker` and exposes the one-shot flag as a signal. The
//! observer is disconnected on the first reveal and again, unconditionally,
//! when the owning component is cleaned up. Requires a browser environment;
//! during SSR every signal stays at its initial value.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::html::Section;
use leptos::prelude::*;

use crate::state::visibility::{ABOUT_THRESHOLD, SECTION_THRESHOLD, VisibilityTracker};
#[cfg(feature = "hydrate")]
use crate::util::subscriptions::{Subscriptions, scope_to_owner};

/// Observer configuration for one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    pub const SECTION: RevealOptions = RevealOptions { threshold: SECTION_THRESHOLD, root_margin: "0px" };
    pub const ABOUT: RevealOptions = RevealOptions { threshold: ABOUT_THRESHOLD, root_margin: "0px" };
    /// Page-wide fade applied to every section through `use_page_fade`.
    pub const PAGE: RevealOptions = RevealOptions { threshold: 0.1, root_margin: "0px 0px -50px 0px" };
}

/// Track whether `target` has scrolled into view.
///
/// The returned signal flips to `true` at most once and never back.
pub fn use_reveal(target: NodeRef<Section>, options: RevealOptions) -> Signal<bool> {
    let tracker = RwSignal::new(VisibilityTracker::new(options.threshold));
    track_reveal(target, options, tracker);
    Signal::derive(move || tracker.with(VisibilityTracker::is_visible))
}

/// Bind `tracker` to `target` for the lifetime of the current owner.
///
/// On cleanup the tracker is torn down so late observer callbacks are
/// ignored.
fn track_reveal(target: NodeRef<Section>, options: RevealOptions, tracker: RwSignal<VisibilityTracker>) {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(element) = target.get() else {
            return;
        };
        if tracker.with_untracked(VisibilityTracker::is_settled) {
            return;
        }
        match observe_until_revealed(&element, options, tracker) {
            Ok(subs) => scope_to_owner(subs),
            Err(err) => log::warn!("intersection observer unavailable: {err:?}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (target, options);

    on_cleanup(move || {
        let _ = tracker.try_update(VisibilityTracker::teardown);
    });
}

/// Page-wide fade for a section: `true` once it is a little way into view.
pub fn use_page_fade(target: NodeRef<Section>) -> Signal<bool> {
    use_reveal(target, RevealOptions::PAGE)
}

/// Class list for a faded section: `fade-in`, plus `visible` once revealed.
#[must_use]
pub fn fade_in_class(base: &str, visible: bool) -> String {
    if visible { format!("{base} fade-in visible") } else { format!("{base} fade-in") }
}

#[cfg(feature = "hydrate")]
fn observe_until_revealed(
    element: &web_sys::HtmlElement,
    options: RevealOptions,
    tracker: RwSignal<VisibilityTracker>,
) -> Result<Subscriptions, wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                let revealed = tracker
                    .try_update(|t| t.observe(entry.is_intersecting(), entry.intersection_ratio()))
                    .unwrap_or(false);
                if revealed {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    let mut subs = Subscriptions::new();
    subs.hold("intersection-observer", move || {
        observer.disconnect();
        drop(callback);
    });
    Ok(subs)
}

/// `true` once the component has mounted in the browser.
///
/// Used to play on-load animations after hydration instead of on scroll.
pub fn use_mounted() -> Signal<bool> {
    let mounted = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    Effect::new(move || mounted.set(true));
    mounted.into()
}

/// `true` while the page is scrolled past `offset_px`.
pub fn use_scrolled_past(offset_px: f64) -> Signal<bool> {
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let read_scroll = move || web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        Effect::new(move || scrolled.set(read_scroll() > offset_px));

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let past = read_scroll() > offset_px;
            if scrolled.get_untracked() != past {
                scrolled.set(past);
            }
        });
        let mut subs = Subscriptions::new();
        subs.hold("scroll", move || handle.remove());
        scope_to_owner(subs);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = offset_px;

    scrolled.into()
}

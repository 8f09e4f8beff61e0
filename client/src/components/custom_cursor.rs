//! Glowing cursor dot and a lagging ring that follow the pointer.

use leptos::prelude::*;

use crate::util::pointer::use_pointer;

/// Half-size of the dot and the ring, used to center them on the pointer.
const DOT_OFFSET_PX: f64 = 10.0;
const RING_OFFSET_PX: f64 = 20.0;
const DOT_HOVER_SCALE: f64 = 1.5;
const RING_HOVER_SCALE: f64 = 1.2;

#[component]
pub fn CustomCursor() -> impl IntoView {
    let pointer = use_pointer();

    let transform = move |offset: f64, hover_scale: f64| {
        move || {
            let state = pointer.get();
            let scale = if state.hovering { hover_scale } else { 1.0 };
            format!(
                "transform:translate3d({}px,{}px,0) scale({scale})",
                state.position.x - offset,
                state.position.y - offset,
            )
        }
    };

    view! {
        <div class="cursor" aria-hidden="true">
            <div class="cursor__dot" style=transform(DOT_OFFSET_PX, DOT_HOVER_SCALE)></div>
            <div class="cursor__ring" style=transform(RING_OFFSET_PX, RING_HOVER_SCALE)></div>
        </div>
    }
}

//! Full-screen particle field behind every section.
//!
//! DESIGN
//! ======
//! The field is generated once per mount from a fixed seed and redrawn on a
//! 33ms interval through a 2D canvas context. The interval is held in a
//! `Subscriptions` scoped to this component, so unmounting stops drawing.

use leptos::html::Canvas;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::particles::{
    FIELD_SPREAD, FLOATING_SHAPES, FloatingShape, PARTICLE_COUNT, ParticleField, ShapeKind, hue_css, project,
    rotate_y, rotation_at,
};

/// Redraw period, roughly 30 frames per second.
pub const FRAME_INTERVAL_MS: u32 = 33;
#[cfg(feature = "hydrate")]
const FIELD_SEED: u64 = 0x0E22_D161;
#[cfg(feature = "hydrate")]
const PARTICLE_ALPHA: f64 = 0.6;
#[cfg(feature = "hydrate")]
const SHAPE_WORLD_SIZE: f64 = 0.5;

#[component]
pub fn ParticleBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::util::subscriptions::{Subscriptions, scope_to_owner};

        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let field = ParticleField::generate(PARTICLE_COUNT, FIELD_SPREAD, FIELD_SEED);
        let started_ms = js_sys::Date::now();
        let interval = gloo_timers::callback::Interval::new(FRAME_INTERVAL_MS, move || {
            let elapsed_s = (js_sys::Date::now() - started_ms) / 1000.0;
            draw_frame(&canvas, &field, elapsed_s);
        });
        let mut subs = Subscriptions::new();
        subs.hold("particle-interval", move || drop(interval));
        scope_to_owner(subs);
    });

    view! { <canvas class="particle-background" node_ref=canvas_ref aria-hidden="true"></canvas> }
}

#[cfg(feature = "hydrate")]
fn draw_frame(canvas: &web_sys::HtmlCanvasElement, field: &ParticleField, elapsed_s: f64) {
    use wasm_bindgen::JsCast;

    let width = f64::from(canvas.client_width().max(1));
    let height = f64::from(canvas.client_height().max(1));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        let (w, h) = (width.round() as u32, height.round() as u32);
        if canvas.width() != w || canvas.height() != h {
            canvas.set_width(w);
            canvas.set_height(h);
        }
    }

    let Some(ctx_value) = canvas.get_context("2d").ok().flatten() else {
        return;
    };
    let Ok(ctx) = ctx_value.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };

    ctx.clear_rect(0.0, 0.0, width, height);

    for point in field.project(rotation_at(elapsed_s), width, height) {
        let size = (point.scale * 0.02).clamp(0.5, 3.0);
        ctx.set_fill_style_str(&hue_css(point.hue, PARTICLE_ALPHA));
        ctx.fill_rect(point.x - size / 2.0, point.y - size / 2.0, size, size);
    }

    for shape in &FLOATING_SHAPES {
        draw_shape(&ctx, shape, elapsed_s, width, height);
    }
}

#[cfg(feature = "hydrate")]
fn draw_shape(ctx: &web_sys::CanvasRenderingContext2d, shape: &FloatingShape, elapsed_s: f64, width: f64, height: f64) {
    let (x, y, z) = shape.position_at(elapsed_s);
    let (tilt_x, tilt_y) = FloatingShape::tilt_at(elapsed_s);
    let Some((cx, cy, scale)) = project(rotate_y(x, y, z, tilt_y), width, height) else {
        return;
    };
    let radius = SHAPE_WORLD_SIZE * scale;

    let _ = ctx.save();
    ctx.set_global_alpha(0.3);
    ctx.set_stroke_style_str(shape.color);
    ctx.set_line_width(1.0);
    let _ = ctx.translate(cx, cy);
    let _ = ctx.rotate(tilt_x);
    ctx.begin_path();
    match shape.kind {
        ShapeKind::Sphere => {
            let _ = ctx.arc(0.0, 0.0, radius, 0.0, std::f64::consts::TAU);
        }
        ShapeKind::Cube => ctx.rect(-radius, -radius, radius * 2.0, radius * 2.0),
        ShapeKind::Torus => {
            let _ = ctx.ellipse(0.0, 0.0, radius * 1.2, radius * 0.6, 0.0, 0.0, std::f64::consts::TAU);
            let _ = ctx.ellipse(0.0, 0.0, radius * 0.5, radius * 0.25, 0.0, 0.0, std::f64::consts::TAU);
        }
    }
    ctx.stroke();
    let _ = ctx.restore();
}

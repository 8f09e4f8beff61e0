//! Latest pointer position and hover state.
//!
//! One writer (the window listener installed by `util::pointer`), many
//! readers through a context-provided signal. No history is kept.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// Raw client coordinates in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl PointerPosition {
    /// Position as a percentage of the viewport, each axis in `[0, 100]`.
    #[must_use]
    pub fn normalized(self, viewport: Viewport) -> PointerPosition {
        PointerPosition { x: percent(self.x, viewport.width), y: percent(self.y, viewport.height) }
    }

    /// Offset for a decorative element moving `factor` times the pointer.
    #[must_use]
    pub fn parallax(self, factor_x: f64, factor_y: f64) -> (f64, f64) {
        (self.x * factor_x, self.y * factor_y)
    }
}

fn percent(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !extent.is_finite() || !value.is_finite() {
        return 0.0;
    }
    (value / extent * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: PointerPosition,
    pub viewport: Viewport,
    /// Pointer is over a link, button, or `.hover-glow` element.
    pub hovering: bool,
}

impl PointerState {
    pub fn record(&mut self, x: f64, y: f64) {
        self.position = PointerPosition { x, y };
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport { width, height };
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    #[must_use]
    pub fn normalized(&self) -> PointerPosition {
        self.position.normalized(self.viewport)
    }

    /// Parallax offset in pixels, scaled from the viewport percentage
    /// rather than raw pixels so travel is the same on every screen size.
    #[must_use]
    pub fn parallax(&self, factor_x: f64, factor_y: f64) -> (f64, f64) {
        self.normalized().parallax(factor_x, factor_y)
    }

    /// `(rotate_x, rotate_y)` in degrees for a card tilted toward the pointer.
    #[must_use]
    pub fn tilt(&self, factor: f64) -> (f64, f64) {
        let at = self.normalized();
        (at.y * -factor, at.x * factor)
    }
}

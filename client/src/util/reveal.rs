//! Staggered reveal timing.
//!
//! A `StaggerConfig` describes one animated group: children start
//! `base_delay_ms + i * child_interval_ms` after the trigger and travel from
//! the hidden pose (offset, transparent) to rest over `duration_ms`. The
//! browser runs the actual transition from the CSS that `style` produces;
//! `pose` evaluates the same timing in Rust.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Timing curve shared by the CSS transition and `pose`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Control points of the equivalent CSS cubic-bezier.
    #[must_use]
    pub fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    #[must_use]
    pub fn css(self) -> String {
        let (x1, y1, x2, y2) = self.control_points();
        format!("cubic-bezier({x1},{y1},{x2},{y2})")
    }

    /// Eased progress for linear progress `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if self == Easing::Linear || t <= 0.0 || t >= 1.0 {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();
        // x(s) is monotonic for these curves, so bisection converges.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut s = t;
        for _ in 0..32 {
            let x = bezier(s, x1, x2);
            if (x - t).abs() < 1e-7 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        bezier(s, y1, y2)
    }
}

fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Opacity and offset of one child at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPose {
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerConfig {
    pub base_delay_ms: u32,
    pub child_interval_ms: u32,
    pub duration_ms: u32,
    pub easing: Easing,
    pub offset_x_px: f64,
    pub offset_y_px: f64,
}

impl StaggerConfig {
    /// Section headers, grids and cards.
    pub const SECTION: StaggerConfig = StaggerConfig {
        base_delay_ms: 100,
        child_interval_ms: 200,
        duration_ms: 800,
        easing: Easing::EaseOut,
        offset_x_px: 0.0,
        offset_y_px: 50.0,
    };

    /// Hero content, played on mount.
    pub const HERO: StaggerConfig = StaggerConfig { base_delay_ms: 200, child_interval_ms: 300, ..Self::SECTION };

    /// Service cards cascade faster.
    pub const SERVICES: StaggerConfig =
        StaggerConfig { base_delay_ms: 200, child_interval_ms: 100, duration_ms: 600, ..Self::SECTION };

    /// Bullet lists sliding in from the left.
    pub const LIST: StaggerConfig = StaggerConfig {
        base_delay_ms: 0,
        child_interval_ms: 100,
        duration_ms: 500,
        easing: Easing::EaseOut,
        offset_x_px: -20.0,
        offset_y_px: 0.0,
    };

    /// Short upward fade used by metric tiles and tags.
    pub const CHIP: StaggerConfig = StaggerConfig { offset_x_px: 0.0, offset_y_px: 20.0, ..Self::LIST };

    /// Start of child `index`'s transition, relative to the trigger.
    #[must_use]
    pub fn child_delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay_ms.saturating_add(index.saturating_mul(self.child_interval_ms))
    }

    /// Time until the last of `children` comes to rest.
    #[must_use]
    pub fn total_ms(&self, children: usize) -> u32 {
        if children == 0 {
            return 0;
        }
        self.child_delay_ms(children - 1).saturating_add(self.duration_ms)
    }

    #[must_use]
    pub fn hidden_pose(&self) -> RevealPose {
        RevealPose { opacity: 0.0, offset_x: self.offset_x_px, offset_y: self.offset_y_px }
    }

    /// Pose of child `index` `elapsed_ms` after the trigger flipped.
    #[must_use]
    pub fn pose(&self, visible: bool, index: usize, elapsed_ms: f64) -> RevealPose {
        if !visible {
            return self.hidden_pose();
        }
        let local = elapsed_ms - f64::from(self.child_delay_ms(index));
        if local <= 0.0 {
            return self.hidden_pose();
        }
        let linear = if self.duration_ms == 0 { 1.0 } else { local / f64::from(self.duration_ms) };
        let progress = self.easing.apply(linear);
        RevealPose {
            opacity: progress,
            offset_x: self.offset_x_px * (1.0 - progress),
            offset_y: self.offset_y_px * (1.0 - progress),
        }
    }

    /// Inline CSS for child `index`; the transition carries the stagger delay.
    #[must_use]
    pub fn style(&self, visible: bool, index: usize) -> String {
        if !visible {
            let hidden = self.hidden_pose();
            return format!(
                "opacity:0;transform:translate3d({}px,{}px,0)",
                hidden.offset_x, hidden.offset_y
            );
        }
        let ease = self.easing.css();
        let duration = self.duration_ms;
        let delay = self.child_delay_ms(index);
        format!(
            "opacity:1;transform:translate3d(0px,0px,0);\
             transition:opacity {duration}ms {ease} {delay}ms,transform {duration}ms {ease} {delay}ms"
        )
    }
}

/// Inline CSS for a group container that fades in as a whole.
#[must_use]
pub fn container_style(visible: bool) -> &'static str {
    if visible { "opacity:1;transition:opacity 300ms ease-out" } else { "opacity:0" }
}

//! Decorative particle field for the page background.
//!
//! Particles live in a cube around the origin and the whole field spins
//! slowly about the vertical axis. A pinhole camera at `z = CAMERA_Z`
//! projects them onto the canvas. Generation is seeded so a given seed
//! always yields the same field.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const PARTICLE_COUNT: usize = 1000;
pub const FIELD_SPREAD: f64 = 100.0;
pub const CAMERA_Z: f64 = 10.0;
pub const FOV_DEG: f64 = 75.0;
/// Field rotation speed in radians per second.
pub const SPIN_RATE: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Hue as a fraction of the color wheel.
    pub hue: f64,
}

/// A particle mapped onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Perspective scale factor; larger is closer.
    pub scale: f64,
    pub hue: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn generate(count: usize, spread: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let half = spread.abs() / 2.0;
        let particles = (0..count)
            .map(|_| Particle {
                x: coordinate(&mut rng, half),
                y: coordinate(&mut rng, half),
                z: coordinate(&mut rng, half),
                hue: rng.random_range(0.5..0.6),
            })
            .collect();
        Self { particles }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Project every visible particle with the field spun by `rotation_y`.
    pub fn project(&self, rotation_y: f64, width: f64, height: f64) -> impl Iterator<Item = ProjectedPoint> + '_ {
        self.particles
            .iter()
            .filter_map(move |p| project(rotate_y(p.x, p.y, p.z, rotation_y), width, height).map(|(x, y, scale)| {
                ProjectedPoint { x, y, scale, hue: p.hue }
            }))
    }
}

fn coordinate(rng: &mut SmallRng, half: f64) -> f64 {
    if half <= 0.0 { 0.0 } else { rng.random_range(-half..half) }
}

/// Field rotation after `elapsed_s` seconds.
#[must_use]
pub fn rotation_at(elapsed_s: f64) -> f64 {
    elapsed_s * SPIN_RATE
}

#[must_use]
pub fn rotate_y(x: f64, y: f64, z: f64, angle: f64) -> (f64, f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (x * cos + z * sin, y, -x * sin + z * cos)
}

/// Perspective-project a world point. `None` when the point is at or behind
/// the camera.
#[must_use]
pub fn project((x, y, z): (f64, f64, f64), width: f64, height: f64) -> Option<(f64, f64, f64)> {
    let depth = CAMERA_Z - z;
    if depth <= 0.01 || height <= 0.0 || width <= 0.0 {
        return None;
    }
    let focal = (height / 2.0) / (FOV_DEG.to_radians() / 2.0).tan();
    let scale = focal / depth;
    Some((width / 2.0 + x * scale, height / 2.0 - y * scale, scale))
}

/// CSS color for a hue fraction, saturated at half lightness.
#[must_use]
pub fn hue_css(hue: f64, alpha: f64) -> String {
    let degrees = (hue.rem_euclid(1.0) * 360.0).round();
    format!("hsla({degrees}, 100%, 50%, {alpha})")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Cube,
    Torus,
}

/// Slowly bobbing wireframe outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub position: (f64, f64, f64),
    pub kind: ShapeKind,
    pub color: &'static str,
}

impl FloatingShape {
    /// World position after `elapsed_s` seconds of bobbing.
    #[must_use]
    pub fn position_at(&self, elapsed_s: f64) -> (f64, f64, f64) {
        let (x, y, z) = self.position;
        (x, y + (elapsed_s * 0.4).sin() * 0.5, z)
    }

    /// Wobble angles around x and y.
    #[must_use]
    pub fn tilt_at(elapsed_s: f64) -> (f64, f64) {
        ((elapsed_s * 0.5).sin() * 0.1, (elapsed_s * 0.3).sin() * 0.1)
    }
}

pub const FLOATING_SHAPES: [FloatingShape; 6] = [
    FloatingShape { position: (-8.0, 2.0, -5.0), kind: ShapeKind::Sphere, color: "#00f5ff" },
    FloatingShape { position: (8.0, -2.0, -3.0), kind: ShapeKind::Cube, color: "#bf00ff" },
    FloatingShape { position: (-5.0, -4.0, -7.0), kind: ShapeKind::Torus, color: "#00ff88" },
    FloatingShape { position: (6.0, 4.0, -4.0), kind: ShapeKind::Sphere, color: "#00f5ff" },
    FloatingShape { position: (-10.0, 0.0, -6.0), kind: ShapeKind::Cube, color: "#bf00ff" },
    FloatingShape { position: (4.0, -6.0, -8.0), kind: ShapeKind::Torus, color: "#00ff88" },
];

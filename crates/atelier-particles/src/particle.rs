//! Particle state and generation.

use atelier_core::{ParticleVariant, Rgba, Viewport};
use rand::Rng;

/// Smallest particle radius in virtual pixels.
pub const MIN_RADIUS: f32 = 1.0;
/// Span added on top of [`MIN_RADIUS`].
pub const RADIUS_SPAN: f32 = 2.5;
/// Largest per-axis speed magnitude, in virtual pixels per frame.
pub const MAX_AXIS_SPEED: f32 = 0.15;
/// Lowest particle opacity.
pub const MIN_OPACITY: f32 = 0.1;
/// Span added on top of [`MIN_OPACITY`].
pub const OPACITY_SPAN: f32 = 0.3;

/// A single drifting point of the backdrop.
///
/// Only the position changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position, within `[0, width)`.
    pub x: f32,
    /// Vertical position, within `[0, height)`.
    pub y: f32,
    /// Circle radius.
    pub radius: f32,
    /// Horizontal velocity per frame.
    pub dx: f32,
    /// Vertical velocity per frame.
    pub dy: f32,
    /// Opacity in `[0.1, 0.4)`.
    pub opacity: f32,
    /// Colour class.
    pub variant: ParticleVariant,
}

impl Particle {
    /// Create a particle at a random position inside `viewport`.
    pub fn random<R: Rng>(rng: &mut R, viewport: Viewport, accent_probability: f64) -> Self {
        let width = viewport.width as f32;
        let height = viewport.height as f32;
        Self {
            x: wrap_coord(sample_axis(rng, width), width),
            y: wrap_coord(sample_axis(rng, height), height),
            radius: MIN_RADIUS + rng.random::<f32>() * RADIUS_SPAN,
            dx: rng.random_range(-MAX_AXIS_SPEED..MAX_AXIS_SPEED),
            dy: rng.random_range(-MAX_AXIS_SPEED..MAX_AXIS_SPEED),
            opacity: MIN_OPACITY + rng.random::<f32>() * OPACITY_SPAN,
            variant: if rng.random_bool(accent_probability) {
                ParticleVariant::Accent
            } else {
                ParticleVariant::Neutral
            },
        }
    }

    /// Advance by one frame of velocity, wrapping toroidally so the particle
    /// stays inside a `width` x `height` surface.
    pub fn step(&mut self, width: f32, height: f32) {
        self.x = wrap_coord(self.x + self.dx, width);
        self.y = wrap_coord(self.y + self.dy, height);
    }

    /// Fill colour: the variant's base colour at the particle's opacity.
    pub fn color(&self) -> Rgba {
        let (r, g, b) = self.variant.rgb();
        Rgba::new(r, g, b, self.opacity)
    }
}

/// Generate a fresh set of `count` particles for `viewport`.
pub fn generate_particles<R: Rng>(
    rng: &mut R,
    viewport: Viewport,
    count: usize,
    accent_probability: f64,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle::random(rng, viewport, accent_probability))
        .collect()
}

/// Wrap `value` into `[0, extent)`. A zero or negative extent pins to 0.
///
/// Overshoot carries over to the opposite edge instead of snapping to it:
/// `100.5` over an extent of `100.0` lands at `0.5`, and `-0.5` at `99.5`.
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

fn sample_axis<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

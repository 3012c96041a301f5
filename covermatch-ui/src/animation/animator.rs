//! Background Animator
//!
//! Owns the particle field and renders one frame at a time onto a
//! [`Surface`].

use super::particle::{Particle, RandomSource};
use super::surface::{ColorStop, Surface};

/// Fewest particles on any viewport
pub const MIN_PARTICLES: usize = 14;
/// Viewport width in CSS pixels per particle
pub const PIXELS_PER_PARTICLE: f64 = 80.0;
/// Period divisor of the background gradient's breathing, in milliseconds
const PULSE_DIVISOR: f64 = 6000.0;

/// Number of particles for a viewport `width` CSS pixels wide
pub fn particle_count(width: f64) -> usize {
    let by_width = (width / PIXELS_PER_PARTICLE).floor();
    if by_width.is_finite() && by_width > MIN_PARTICLES as f64 {
        by_width as usize
    } else {
        MIN_PARTICLES
    }
}

/// Browser viewport dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Read the current viewport from `window`
    pub fn from_window(window: &web_sys::Window) -> Self {
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };

        Self {
            width: dimension(window.inner_width()),
            height: dimension(window.inner_height()),
            device_pixel_ratio: window.device_pixel_ratio(),
        }
    }

    /// Device pixel ratio, with non-positive values treated as 1
    pub fn scale(&self) -> f64 {
        if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }
}

/// Stops of the full-viewport gradient at `timestamp` milliseconds
pub fn background_stops(timestamp: f64) -> [ColorStop; 3] {
    let a = (timestamp / PULSE_DIVISOR).sin() * 0.5 + 0.5;

    [
        ColorStop::new(0.0, format!("rgba(14,165,164,{})", 0.12 + 0.08 * a)),
        ColorStop::new(0.5, format!("rgba(37,99,235,{})", 0.08 + 0.06 * a)),
        ColorStop::new(1.0, format!("rgba(99,102,241,{})", 0.08 + 0.06 * a)),
    ]
}

/// Glow stops for a single particle
pub fn particle_stops(particle: &Particle) -> [ColorStop; 2] {
    [
        ColorStop::new(
            0.0,
            format!("hsla({},90%,55%,{})", particle.hue, particle.alpha),
        ),
        ColorStop::new(1.0, format!("hsla({},90%,45%,0)", particle.hue)),
    ]
}

/// Particle field state
#[derive(Debug)]
pub struct Animator {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    scale: f64,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            scale: 1.0,
        }
    }

    /// Adopt a new viewport and resize the surface's backing store to match
    pub fn resize(&mut self, viewport: Viewport, surface: &mut impl Surface) {
        self.scale = viewport.scale();
        self.width = viewport.width;
        self.height = viewport.height;

        surface.resize(self.width, self.height, self.scale);
    }

    /// Replace every particle with `count` fresh ones inside the current size
    pub fn reinit_particles(&mut self, count: usize, rng: &mut impl RandomSource) {
        self.particles = (0..count)
            .map(|_| Particle::random(rng, self.width, self.height))
            .collect();
    }

    /// Resize and repopulate in one go, as after a viewport change
    pub fn reset(
        &mut self,
        viewport: Viewport,
        surface: &mut impl Surface,
        rng: &mut impl RandomSource,
    ) {
        self.resize(viewport, surface);
        self.reinit_particles(particle_count(self.width), rng);
    }

    /// Move every particle one step
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Render the frame for `timestamp` (milliseconds since page load)
    pub fn draw_frame(&mut self, timestamp: f64, surface: &mut impl Surface) {
        surface.clear(self.width, self.height);
        surface.fill_diagonal_gradient(self.width, self.height, &background_stops(timestamp));

        self.step();

        for particle in &self.particles {
            surface.fill_radial_circle(
                particle.x,
                particle.y,
                particle.radius,
                &particle_stops(particle),
            );
        }
    }
}

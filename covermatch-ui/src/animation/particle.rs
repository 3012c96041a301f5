//! Background Particles
//!
//! Large, faint, slowly drifting blobs of blue light.

/// Radius range in CSS pixels
pub const RADIUS_RANGE: (f64, f64) = (20.0, 80.0);
/// Horizontal drift per frame
pub const VX_RANGE: (f64, f64) = (-0.15, 0.15);
/// Vertical drift per frame
pub const VY_RANGE: (f64, f64) = (-0.05, 0.05);
/// Hue range in degrees (blue band)
pub const HUE_RANGE: (f64, f64) = (200.0, 230.0);
/// Center opacity range
pub const ALPHA_RANGE: (f64, f64) = (0.06, 0.18);

/// How far past an edge a particle may travel before it wraps around
pub const WRAP_MARGIN: f64 = 100.0;

/// Source of uniform random numbers in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[min, max)`
    fn range(&mut self, (min, max): (f64, f64)) -> f64 {
        self.next_f64() * (max - min) + min
    }
}

/// Browser `Math.random`
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// A single background particle
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub hue: f64,
    pub alpha: f64,
}

impl Particle {
    /// Random particle somewhere inside a `width` x `height` area
    pub fn random(rng: &mut impl RandomSource, width: f64, height: f64) -> Self {
        Self {
            x: rng.range((0.0, width)),
            y: rng.range((0.0, height)),
            radius: rng.range(RADIUS_RANGE),
            vx: rng.range(VX_RANGE),
            vy: rng.range(VY_RANGE),
            hue: rng.range(HUE_RANGE),
            alpha: rng.range(ALPHA_RANGE),
        }
    }

    /// Move by one frame of velocity, wrapping to the opposite side once
    /// the particle is more than `WRAP_MARGIN` past an edge
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < -WRAP_MARGIN {
            self.x = width + WRAP_MARGIN;
        }
        if self.x > width + WRAP_MARGIN {
            self.x = -WRAP_MARGIN;
        }
        if self.y < -WRAP_MARGIN {
            self.y = height + WRAP_MARGIN;
        }
        if self.y > height + WRAP_MARGIN {
            self.y = -WRAP_MARGIN;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Cycles through a fixed list of values
    pub(crate) struct SequenceRandom {
        values: Vec<f64>,
        next: usize,
    }

    impl SequenceRandom {
        pub(crate) fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for SequenceRandom {
        fn next_f64(&mut self) -> f64 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }
    }

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            radius: 40.0,
            vx,
            vy,
            hue: 210.0,
            alpha: 0.1,
        }
    }

    #[test]
    fn test_random_respects_ranges() {
        let mut rng = SequenceRandom::new(&[0.0, 0.5, 0.999]);
        for _ in 0..30 {
            let p = Particle::random(&mut rng, 1200.0, 800.0);
            assert!(p.x >= 0.0 && p.x < 1200.0);
            assert!(p.y >= 0.0 && p.y < 800.0);
            assert!(p.radius >= 20.0 && p.radius < 80.0);
            assert!(p.vx >= -0.15 && p.vx < 0.15);
            assert!(p.vy >= -0.05 && p.vy < 0.05);
            assert!(p.hue >= 200.0 && p.hue < 230.0);
            assert!(p.alpha >= 0.06 && p.alpha < 0.18);
        }
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let mut p = particle(10.0, 20.0, 0.1, -0.05);
        p.advance(800.0, 600.0);
        assert!((p.x - 10.1).abs() < 1e-12);
        assert!((p.y - 19.95).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_left_to_right() {
        let mut p = particle(-100.0, 300.0, -0.1, 0.0);
        p.advance(800.0, 600.0);
        assert_eq!(p.x, 900.0);
    }

    #[test]
    fn test_wrap_right_to_left() {
        let mut p = particle(900.0, 300.0, 0.1, 0.0);
        p.advance(800.0, 600.0);
        assert_eq!(p.x, -100.0);
    }

    #[test]
    fn test_wrap_top_and_bottom() {
        let mut up = particle(400.0, -100.0, 0.0, -0.05);
        up.advance(800.0, 600.0);
        assert_eq!(up.y, 700.0);

        let mut down = particle(400.0, 700.0, 0.0, 0.05);
        down.advance(800.0, 600.0);
        assert_eq!(down.y, -100.0);
    }

    #[test]
    fn test_no_wrap_inside_margin() {
        let mut p = particle(-99.0, 650.0, -0.5, 0.0);
        p.advance(800.0, 600.0);
        assert_eq!(p.x, -99.5);
        assert_eq!(p.y, 650.0);
    }
}

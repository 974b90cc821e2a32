//! Background particles drifting behind the kaleidoscope.

use std::collections::VecDeque;

use rand::Rng;

use crate::surface::Point;

/// Longest trail a particle keeps.
pub const MAX_TRAIL: usize = 30;

/// Surface area (px²) per particle when sizing the field.
const AREA_PER_PARTICLE: f64 = 9_000.0;
const MIN_PARTICLES: usize = 40;
const MAX_PARTICLES: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Resting velocity the particle relaxes back to after being pushed.
    pub base_vx: f64,
    pub base_vy: f64,
    /// Recent positions, oldest first.
    pub trail: VecDeque<Point>,
    pub opacity: f64,
    pub radius: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let vx = rng.gen_range(-0.25..0.25);
        let vy = rng.gen_range(-0.25..0.25);
        Self {
            x: rng.gen::<f64>() * width.max(0.0),
            y: rng.gen::<f64>() * height.max(0.0),
            vx,
            vy,
            base_vx: vx,
            base_vy: vy,
            trail: VecDeque::with_capacity(MAX_TRAIL + 1),
            opacity: rng.gen_range(0.1..0.5),
            radius: rng.gen_range(0.5..2.0),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Append a trail point, dropping the oldest beyond [`MAX_TRAIL`].
    pub fn record_trail(&mut self, point: Point) {
        self.trail.push_back(point);
        while self.trail.len() > MAX_TRAIL {
            self.trail.pop_front();
        }
    }
}

/// How many particles a surface of this size gets.
pub fn particle_count(width: f64, height: f64) -> usize {
    let area = (width.max(0.0) * height.max(0.0)) / AREA_PER_PARTICLE;
    (area as usize).clamp(MIN_PARTICLES, MAX_PARTICLES)
}

/// Build a fresh field covering `width` × `height`.
pub fn spawn_field<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Vec<Particle> {
    (0..particle_count(width, height))
        .map(|_| Particle::random(rng, width, height))
        .collect()
}

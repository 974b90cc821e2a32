//! Per-frame state advance for shapes and particles.

use crate::color::hue_color;
use crate::particle::Particle;
use crate::shape::{ColorState, Shape};
use crate::surface::Point;

/// Shapes bounce once they stray past this fraction of the smaller surface side.
pub const BOUNCE_FRACTION: f64 = 0.3;
/// Degrees added to a hue-mode shape each frame.
pub const HUE_STEP: f64 = 0.5;
/// Pointer influence radius, in surface units.
pub const POINTER_RADIUS: f64 = 150.0;
pub const POINTER_STRENGTH: f64 = 0.5;
/// Fraction of the gap to base velocity closed each frame.
pub const VELOCITY_EASING: f64 = 0.05;

/// Host timestamps arrive in milliseconds; the animation runs in seconds.
#[inline]
pub fn seconds(elapsed_ms: f64) -> f64 {
    elapsed_ms * 0.001
}

/// Display opacity for the shape at `index`; purely a function of time.
#[inline]
pub fn shape_opacity(time: f64, index: usize) -> f64 {
    0.5 + 0.3 * (time * 2.0 + index as f64).sin()
}

/// Parameters shared by every shape during one step.
#[derive(Debug, Clone, Copy)]
pub struct ShapeStep<'a> {
    /// Animation time in seconds.
    pub time: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_multiplier: f64,
    pub palette: Option<&'a [&'a str]>,
}

pub fn step_shapes(shapes: &mut [Shape], step: &ShapeStep<'_>) {
    for (index, shape) in shapes.iter_mut().enumerate() {
        step_shape(shape, index, step);
    }
}

pub fn step_shape(shape: &mut Shape, index: usize, step: &ShapeStep<'_>) {
    let phase = step.time + shape.radius;
    shape.x += shape.speed_x * phase.cos();
    shape.y += shape.speed_y * phase.sin();

    let limit = BOUNCE_FRACTION * step.width.min(step.height);
    if shape.x.abs() > limit {
        shape.speed_x = -shape.speed_x;
    }
    if shape.y.abs() > limit {
        shape.speed_y = -shape.speed_y;
    }

    shape.angle += shape.rotation_speed * step.rotation_multiplier;
    shape.opacity = shape_opacity(step.time, index);

    advance_color(shape, step.palette);
}

fn advance_color(shape: &mut Shape, palette: Option<&[&str]>) {
    match &mut shape.color_state {
        ColorState::Palette {
            index,
            progress,
            speed,
        } => {
            let Some(colors) = palette.filter(|p| !p.is_empty()) else {
                return;
            };
            *progress += *speed;
            if *progress >= 1.0 {
                *progress = 0.0;
                *index = (*index + 1) % colors.len();
            }
        }
        ColorState::Hue { hue } => {
            *hue = (*hue + HUE_STEP) % 360.0;
            shape.color = hue_color(*hue);
            return;
        }
    }
    if let Some(color) = shape.color_state.resolve(palette) {
        shape.color = color;
    }
}

pub fn step_particles(particles: &mut [Particle], width: f64, height: f64, pointer: Option<Point>) {
    for particle in particles {
        step_particle(particle, width, height, pointer);
    }
}

/// Advance one particle by a frame.
///
/// The trail gets the pre-move position; a wrap clears it so no stroke is
/// drawn across the surface.
pub fn step_particle(p: &mut Particle, width: f64, height: f64, pointer: Option<Point>) {
    if let Some(pointer) = pointer {
        let dx = p.x - pointer.x;
        let dy = p.y - pointer.y;
        let dist = dx.hypot(dy);
        if dist > 0.0 && dist < POINTER_RADIUS {
            let force = (POINTER_RADIUS - dist) / POINTER_RADIUS * POINTER_STRENGTH;
            p.vx += dx / dist * force;
            p.vy += dy / dist * force;
        }
    }

    p.vx += (p.base_vx - p.vx) * VELOCITY_EASING;
    p.vy += (p.base_vy - p.vy) * VELOCITY_EASING;

    p.record_trail(p.position());
    p.x += p.vx;
    p.y += p.vy;

    let mut wrapped = false;
    if p.x < 0.0 {
        p.x = width;
        wrapped = true;
    } else if p.x > width {
        p.x = 0.0;
        wrapped = true;
    }
    if p.y < 0.0 {
        p.y = height;
        wrapped = true;
    } else if p.y > height {
        p.y = 0.0;
        wrapped = true;
    }
    if wrapped {
        p.trail.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::MAX_TRAIL;
    use crate::shape::ShapeKind;
    use std::collections::VecDeque;

    const PALETTE: &[&str] = &["#ff0000", "#00ff00", "#0000ff"];

    fn shape(color_state: ColorState) -> Shape {
        Shape {
            id: 0,
            kind: ShapeKind::Circle,
            x: 0.0,
            y: 0.0,
            radius: 10.0,
            speed_x: 1.0,
            speed_y: 1.0,
            angle: 0.0,
            rotation_speed: 0.01,
            opacity: 1.0,
            color_state,
            color: String::new(),
        }
    }

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            base_vx: vx,
            base_vy: vy,
            trail: VecDeque::new(),
            opacity: 0.3,
            radius: 1.0,
        }
    }

    fn step(palette: Option<&'static [&'static str]>) -> ShapeStep<'static> {
        ShapeStep {
            time: 0.0,
            width: 800.0,
            height: 600.0,
            rotation_multiplier: 2.0,
            palette,
        }
    }

    #[test]
    fn drift_follows_phase() {
        let mut s = shape(ColorState::Hue { hue: 0.0 });
        let st = ShapeStep {
            time: 1.5,
            ..step(None)
        };
        step_shape(&mut s, 0, &st);
        let phase: f64 = 1.5 + 10.0;
        assert!((s.x - phase.cos()).abs() < 1e-12);
        assert!((s.y - phase.sin()).abs() < 1e-12);
    }

    #[test]
    fn bounce_flips_velocity_past_limit() {
        let mut s = shape(ColorState::Hue { hue: 0.0 });
        // limit = 0.3 * 600 = 180
        s.x = 500.0;
        s.y = -500.0;
        step_shape(&mut s, 0, &step(None));
        assert_eq!(s.speed_x, -1.0);
        assert_eq!(s.speed_y, -1.0);

        let mut inside = shape(ColorState::Hue { hue: 0.0 });
        step_shape(&mut inside, 0, &step(None));
        assert_eq!(inside.speed_x, 1.0);
    }

    #[test]
    fn rotation_uses_multiplier_and_opacity_is_time_driven() {
        let mut s = shape(ColorState::Hue { hue: 0.0 });
        step_shape(&mut s, 3, &step(None));
        assert!((s.angle - 0.02).abs() < 1e-12);
        assert_eq!(s.opacity, shape_opacity(0.0, 3));
        assert!((0.2..=0.8).contains(&s.opacity));
    }

    #[test]
    fn hue_mode_wraps() {
        let mut s = shape(ColorState::Hue { hue: 359.75 });
        step_shape(&mut s, 0, &step(None));
        let ColorState::Hue { hue } = s.color_state else {
            panic!("mode changed");
        };
        assert!((hue - 0.25).abs() < 1e-9);
        assert_eq!(s.color, "hsl(0.25, 100%, 70%)");
    }

    #[test]
    fn palette_progress_rolls_over_to_next_entry() {
        let mut s = shape(ColorState::Palette {
            index: 2,
            progress: 0.995,
            speed: 0.01,
        });
        step_shape(&mut s, 0, &step(Some(PALETTE)));
        assert_eq!(
            s.color_state,
            ColorState::Palette {
                index: 0,
                progress: 0.0,
                speed: 0.01
            }
        );
        assert_eq!(s.color, "#ff0000");
    }

    #[test]
    fn palette_progress_accumulates() {
        let mut s = shape(ColorState::Palette {
            index: 0,
            progress: 0.25,
            speed: 0.25,
        });
        step_shape(&mut s, 0, &step(Some(PALETTE)));
        let ColorState::Palette { index, progress, .. } = s.color_state else {
            panic!("mode changed");
        };
        assert_eq!(index, 0);
        assert!((progress - 0.5).abs() < 1e-12);
        assert_ne!(s.color, "#ff0000");
    }

    #[test]
    fn particle_wraps_and_clears_trail() {
        let mut p = particle(799.5, 300.0, 1.0, 0.0);
        p.record_trail(Point::new(798.0, 300.0));
        step_particle(&mut p, 800.0, 600.0, None);
        assert_eq!(p.x, 0.0);
        assert!(p.trail.is_empty());

        let mut q = particle(10.0, 0.2, 0.0, -1.0);
        step_particle(&mut q, 800.0, 600.0, None);
        assert_eq!(q.y, 600.0);
        assert!(q.trail.is_empty());
    }

    #[test]
    fn trail_records_pre_move_position() {
        let mut p = particle(100.0, 100.0, 1.0, 1.0);
        step_particle(&mut p, 800.0, 600.0, None);
        assert_eq!(p.trail.back(), Some(&Point::new(100.0, 100.0)));
        for _ in 0..100 {
            step_particle(&mut p, 800.0, 600.0, None);
        }
        assert_eq!(p.trail.len(), MAX_TRAIL);
    }

    #[test]
    fn pointer_pushes_nearby_particles_away() {
        let mut near = particle(110.0, 100.0, 0.0, 0.0);
        step_particle(&mut near, 800.0, 600.0, Some(Point::new(100.0, 100.0)));
        assert!(near.vx > 0.0);
        assert_eq!(near.vy, 0.0);

        let mut closer = particle(105.0, 100.0, 0.0, 0.0);
        step_particle(&mut closer, 800.0, 600.0, Some(Point::new(100.0, 100.0)));
        assert!(closer.vx > near.vx);

        let mut far = particle(400.0, 100.0, 0.0, 0.0);
        step_particle(&mut far, 800.0, 600.0, Some(Point::new(100.0, 100.0)));
        assert_eq!(far.vx, 0.0);
    }

    #[test]
    fn repulsion_decays_back_to_base_velocity() {
        let mut p = particle(110.0, 100.0, 0.1, 0.0);
        step_particle(&mut p, 800.0, 600.0, Some(Point::new(100.0, 100.0)));
        let pushed = p.vx;
        for _ in 0..400 {
            step_particle(&mut p, 800.0, 600.0, None);
        }
        assert!(pushed > 0.2);
        assert!((p.vx - 0.1).abs() < 1e-6);
    }
}

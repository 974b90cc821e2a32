//! Draw calls for one frame: fade wash, particle layer, mirrored slices.

use std::f64::consts::{PI, TAU};

use crate::color::with_opacity;
use crate::particle::Particle;
use crate::shape::{Shape, ShapeKind};
use crate::surface::{PaintSurface, Point};

/// Filter applied while the particle layer is painted.
pub const PARTICLE_BLUR: &str = "blur(1px)";
const LINE_WIDTH: f64 = 2.0;
/// Arm width of a cross is its radius divided by this.
const CROSS_ARM_DIVISOR: f64 = 2.5;

/// Radius a shape is drawn at this frame.
#[inline]
pub fn pulse_radius(radius: f64, time: f64, index: usize) -> f64 {
    radius * (1.0 + 0.1 * (time * 3.0 + index as f64).sin())
}

/// Paint translucent black over everything drawn so far.
pub fn fade<S: PaintSurface + ?Sized>(surface: &mut S, width: f64, height: f64, alpha: f64) {
    surface.set_fill_style(&format!("rgba(0, 0, 0, {alpha})"));
    surface.fill_rect(0.0, 0.0, width, height);
}

pub fn draw_particles<S: PaintSurface + ?Sized>(surface: &mut S, particles: &[Particle]) {
    surface.save();
    surface.set_filter(PARTICLE_BLUR);
    for p in particles {
        if p.trail.len() > 1 {
            surface.set_stroke_style(&format!("rgba(255, 255, 255, {})", p.opacity * 0.5));
            surface.set_line_width(p.radius);
            surface.begin_path();
            let mut points = p.trail.iter();
            if let Some(first) = points.next() {
                surface.move_to(first.x, first.y);
            }
            for point in points {
                surface.line_to(point.x, point.y);
            }
            surface.line_to(p.x, p.y);
            surface.stroke();
        }

        surface.set_fill_style(&format!("rgba(255, 255, 255, {})", p.opacity));
        surface.begin_path();
        surface.arc(p.x, p.y, p.radius, 0.0, TAU);
        surface.fill();
    }
    surface.set_filter("none");
    surface.restore();
}

/// Fill `order` with shape indices sorted by ascending base radius.
pub fn sort_by_radius(shapes: &[Shape], order: &mut Vec<usize>) {
    order.clear();
    order.extend(0..shapes.len());
    order.sort_by(|&a, &b| shapes[a].radius.total_cmp(&shapes[b].radius));
}

/// Inputs for the slice layer of one frame.
#[derive(Debug, Clone, Copy)]
pub struct SliceLayer<'a> {
    pub shapes: &'a [Shape],
    /// Paint order; indices into `shapes`.
    pub order: &'a [usize],
    pub slices: u32,
    pub width: f64,
    pub height: f64,
    /// Animation time in seconds.
    pub time: f64,
}

/// Rotate the shape layer around the surface center once per slice,
/// drawing it straight and then flipped vertically.
pub fn draw_slices<S: PaintSurface + ?Sized>(surface: &mut S, layer: &SliceLayer<'_>) {
    let slices = layer.slices.max(1);
    let step = TAU / f64::from(slices);

    surface.save();
    surface.translate(layer.width / 2.0, layer.height / 2.0);
    for i in 0..slices {
        surface.save();
        surface.rotate(f64::from(i) * step);
        draw_shapes(surface, layer);
        surface.scale(1.0, -1.0);
        draw_shapes(surface, layer);
        surface.restore();
    }
    surface.restore();
}

fn draw_shapes<S: PaintSurface + ?Sized>(surface: &mut S, layer: &SliceLayer<'_>) {
    for &index in layer.order {
        let Some(shape) = layer.shapes.get(index) else {
            continue;
        };
        let radius = pulse_radius(shape.radius, layer.time, index);
        draw_shape(surface, shape, radius);
    }
}

/// Draw one shape at its own position and rotation.
pub fn draw_shape<S: PaintSurface + ?Sized>(surface: &mut S, shape: &Shape, radius: f64) {
    let style = with_opacity(&shape.color, shape.opacity);

    surface.save();
    surface.translate(shape.x, shape.y);
    surface.rotate(shape.angle);

    match shape.kind {
        ShapeKind::Circle => {
            surface.set_fill_style(&style);
            surface.begin_path();
            surface.arc(0.0, 0.0, radius, 0.0, TAU);
            surface.fill();
        }
        ShapeKind::Square => {
            surface.set_fill_style(&style);
            surface.fill_rect(-radius, -radius, radius * 2.0, radius * 2.0);
        }
        ShapeKind::Line => {
            surface.set_stroke_style(&style);
            surface.set_line_width(LINE_WIDTH);
            surface.begin_path();
            surface.move_to(-radius, 0.0);
            surface.line_to(radius, 0.0);
            surface.stroke();
        }
        ShapeKind::Triangle | ShapeKind::Pentagon | ShapeKind::Hexagon => {
            let sides = shape.kind.polygon_sides().unwrap_or(3);
            surface.set_fill_style(&style);
            fill_outline(surface, &polygon_vertices(sides, radius));
        }
        ShapeKind::Star => {
            surface.set_fill_style(&style);
            fill_outline(surface, &star_vertices(radius));
        }
        ShapeKind::Cross => {
            surface.set_fill_style(&style);
            fill_outline(surface, &cross_outline(radius));
        }
    }

    surface.restore();
}

fn fill_outline<S: PaintSurface + ?Sized>(surface: &mut S, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(first.x, first.y);
    for p in rest {
        surface.line_to(p.x, p.y);
    }
    surface.close_path();
    surface.fill();
}

/// Vertices of a regular polygon inscribed in a circle of `radius`.
pub fn polygon_vertices(sides: usize, radius: f64) -> Vec<Point> {
    let step = TAU / sides as f64;
    (0..sides)
        .map(|i| {
            let a = i as f64 * step;
            Point::new(radius * a.cos(), radius * a.sin())
        })
        .collect()
}

/// Ten points alternating outer and inner (half) radius, starting at the top.
pub fn star_vertices(radius: f64) -> Vec<Point> {
    let inner = radius / 2.0;
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { inner };
            let a = i as f64 * PI / 5.0 - PI / 2.0;
            Point::new(r * a.cos(), r * a.sin())
        })
        .collect()
}

/// Twelve-point plus-sign outline with arm width `radius / 2.5`.
pub fn cross_outline(radius: f64) -> Vec<Point> {
    let w = radius / CROSS_ARM_DIVISOR / 2.0;
    let r = radius;
    vec![
        Point::new(-w, -r),
        Point::new(w, -r),
        Point::new(w, -w),
        Point::new(r, -w),
        Point::new(r, w),
        Point::new(w, w),
        Point::new(w, r),
        Point::new(-w, r),
        Point::new(-w, w),
        Point::new(-r, w),
        Point::new(-r, -w),
        Point::new(-w, -w),
    ]
}

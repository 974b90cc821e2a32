//! Decorative shapes and the factory that spawns them.

use std::f64::consts::TAU;

use rand::Rng;

use crate::color::{hue_color, interpolate_color};
use crate::config::Config;

/// Smallest base radius a shape can be spawned with.
pub const MIN_RADIUS: f64 = 5.0;

/// Half-width of the square (centered on the origin) shapes spawn inside.
pub const SPAWN_EXTENT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
    Line,
    Pentagon,
    Hexagon,
    Star,
    Cross,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        Self::Circle,
        Self::Triangle,
        Self::Square,
        Self::Line,
        Self::Pentagon,
        Self::Hexagon,
        Self::Star,
        Self::Cross,
    ];

    /// Side count for the regular-polygon kinds.
    pub fn polygon_sides(self) -> Option<usize> {
        match self {
            Self::Triangle => Some(3),
            Self::Pentagon => Some(5),
            Self::Hexagon => Some(6),
            _ => None,
        }
    }
}

/// How a shape's color evolves. Exactly one mode is active per shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorState {
    /// Crossfade from `palette[index]` toward `palette[index + 1]`.
    Palette {
        index: usize,
        /// Crossfade position in `[0, 1)`.
        progress: f64,
        /// Progress added per frame.
        speed: f64,
    },
    /// Free-running hue in `[0, 360)`.
    Hue { hue: f64 },
}

impl ColorState {
    pub fn is_palette(&self) -> bool {
        matches!(self, Self::Palette { .. })
    }

    /// Current display color. `None` if palette mode has no palette to read.
    pub fn resolve(&self, palette: Option<&[&str]>) -> Option<String> {
        match *self {
            Self::Palette {
                index, progress, ..
            } => {
                let colors = palette.filter(|p| !p.is_empty())?;
                let from = colors[index % colors.len()];
                let to = colors[(index + 1) % colors.len()];
                Some(interpolate_color(from, to, progress))
            }
            Self::Hue { hue } => Some(hue_color(hue)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Unique per kaleidoscope instance; a regenerated shape gets a new id.
    pub id: u64,
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub angle: f64,
    pub rotation_speed: f64,
    pub opacity: f64,
    pub color_state: ColorState,
    /// CSS color string: `#rrggbb` in palette mode, `hsl(...)` in hue mode.
    pub color: String,
}

impl Shape {
    /// Spawn a shape from the current configuration.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, id: u64, config: &Config) -> Self {
        let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
        let max_radius = if config.shape_size.is_finite() {
            config.shape_size.max(MIN_RADIUS)
        } else {
            MIN_RADIUS
        };
        let speed = config.shape_speed;

        let (color_state, color) = match config.palette_colors().filter(|p| !p.is_empty()) {
            Some(colors) => {
                let index = rng.gen_range(0..colors.len());
                let next = (index + 1) % colors.len();
                let progress = rng.gen_range(0.0..1.0);
                let state = ColorState::Palette {
                    index,
                    progress,
                    speed: rng.gen_range(0.002..0.007),
                };
                (state, interpolate_color(colors[index], colors[next], progress))
            }
            None => {
                let hue = rng.gen_range(0.0..360.0);
                (ColorState::Hue { hue }, hue_color(hue))
            }
        };

        Self {
            id,
            kind,
            x: rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
            y: rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
            radius: rng.gen_range(MIN_RADIUS..=max_radius),
            speed_x: rng.gen_range(-1.0..1.0) * speed,
            speed_y: rng.gen_range(-1.0..1.0) * speed,
            angle: rng.gen_range(0.0..TAU),
            rotation_speed: rng.gen_range(-0.01..0.01),
            opacity: 1.0,
            color_state,
            color,
        }
    }
}

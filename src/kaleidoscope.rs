//! The effect itself: owns configuration, shapes, and particles, and turns
//! one host tick into one frame of draw calls.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::config::{Config, ConfigOutcome, ConfigUpdate};
use crate::particle::{spawn_field, Particle};
use crate::render::{self, SliceLayer};
use crate::shape::{Shape, MIN_RADIUS};
use crate::simulation::{self, ShapeStep};
use crate::surface::{PaintSurface, Point};

#[derive(Debug, Clone)]
pub struct Kaleidoscope {
    config: Config,
    shapes: Vec<Shape>,
    particles: Vec<Particle>,
    rng: SmallRng,
    next_id: u64,
    /// Surface size the particle field was built for.
    last_size: Option<(f64, f64)>,
    /// Scratch buffer for per-frame paint order.
    draw_order: Vec<usize>,
}

impl Kaleidoscope {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut config = config;
        let defaults = Config::default();
        config.slices = config.slices.max(1);
        config.shape_size = shape_size(config.shape_size).unwrap_or(defaults.shape_size);
        if !config.shape_speed.is_finite() {
            config.shape_speed = defaults.shape_speed;
        }

        let mut scope = Self {
            config,
            shapes: Vec::new(),
            particles: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
            next_id: 0,
            last_size: None,
            draw_order: Vec::new(),
        };
        scope.rebuild_shapes();
        scope
    }

    /// Default configuration with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Config::default(), seed)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance one frame and paint it onto `surface`.
    ///
    /// `elapsed_ms` is the host's monotonically increasing timestamp;
    /// `pointer` is in surface coordinates.
    pub fn draw<S: PaintSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        width: f64,
        height: f64,
        elapsed_ms: f64,
        pointer: Option<Point>,
    ) {
        self.ensure_particles(width, height);

        let time = simulation::seconds(elapsed_ms);
        let variant = self.config.variant;
        trace!(time, shapes = self.shapes.len(), "frame");

        simulation::step_shapes(
            &mut self.shapes,
            &ShapeStep {
                time,
                width,
                height,
                rotation_multiplier: self.config.effective_rotation_speed(),
                palette: self.config.palette_colors(),
            },
        );
        if variant.draws_particles() {
            simulation::step_particles(&mut self.particles, width, height, pointer);
        }

        render::fade(surface, width, height, variant.fade_alpha());
        if variant.draws_particles() {
            render::draw_particles(surface, &self.particles);
        }

        render::sort_by_radius(&self.shapes, &mut self.draw_order);
        render::draw_slices(
            surface,
            &SliceLayer {
                shapes: &self.shapes,
                order: &self.draw_order,
                slices: self.config.slices,
                width,
                height,
                time,
            },
        );
    }

    /// Apply a configuration delta.
    ///
    /// Palette, size, or speed changes regenerate every shape. A bare
    /// `max_shapes` change grows or truncates in place. Slices, rotation
    /// speed and variant never touch the shapes. Non-finite sizes and speeds
    /// are ignored.
    pub fn update_config(&mut self, update: ConfigUpdate) -> ConfigOutcome {
        let mut rebuild = false;

        if let Some(palette) = update.palette {
            rebuild |= palette != self.config.palette;
            self.config.palette = palette;
        }
        if let Some(size) = update.shape_size.and_then(shape_size) {
            rebuild |= size != self.config.shape_size;
            self.config.shape_size = size;
        }
        if let Some(speed) = update.shape_speed.filter(|s| s.is_finite()) {
            rebuild |= speed != self.config.shape_speed;
            self.config.shape_speed = speed;
        }
        if let Some(slices) = update.slices {
            self.config.slices = slices.max(1);
        }
        if let Some(rotation) = update.rotation_speed {
            self.config.rotation_speed = rotation;
        }
        if let Some(variant) = update.variant {
            self.config.variant = variant;
        }

        let before = self.shapes.len();
        if let Some(max) = update.max_shapes {
            self.config.max_shapes = max;
            self.resize_shapes();
        }

        if rebuild {
            self.rebuild_shapes();
            ConfigOutcome::Rebuilt
        } else if self.shapes.len() != before {
            ConfigOutcome::Resized {
                from: before,
                to: self.shapes.len(),
            }
        } else {
            ConfigOutcome::Unchanged
        }
    }

    fn spawn_shape(&mut self) -> Shape {
        let id = self.next_id;
        self.next_id += 1;
        Shape::random(&mut self.rng, id, &self.config)
    }

    fn rebuild_shapes(&mut self) {
        self.shapes.clear();
        self.resize_shapes();
        debug!(
            count = self.shapes.len(),
            palette = %self.config.palette,
            "rebuilt shapes"
        );
    }

    fn resize_shapes(&mut self) {
        let target = self.config.max_shapes;
        if self.shapes.len() > target {
            self.shapes.truncate(target);
        }
        while self.shapes.len() < target {
            let shape = self.spawn_shape();
            self.shapes.push(shape);
        }
    }

    fn ensure_particles(&mut self, width: f64, height: f64) {
        if self.last_size == Some((width, height)) {
            return;
        }
        self.particles = spawn_field(&mut self.rng, width, height);
        self.last_size = Some((width, height));
        debug!(width, height, count = self.particles.len(), "respawned particle field");
    }
}

/// Usable maximum radius for a requested size, `None` if it is not finite.
fn shape_size(size: f64) -> Option<f64> {
    size.is_finite().then(|| size.max(MIN_RADIUS))
}

impl Default for Kaleidoscope {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

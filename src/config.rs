//! Effect parameters and partial updates.

use serde::{Deserialize, Serialize};

use crate::palette;

/// Which flavour of the effect to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Particle backdrop, short fade trail, adjustable rotation.
    #[default]
    Rich,
    /// Shapes only, long fade trail, fixed rotation rate.
    Classic,
}

impl Variant {
    /// Alpha of the black wash painted over the previous frame.
    pub fn fade_alpha(self) -> f64 {
        match self {
            Self::Rich => 0.1,
            Self::Classic => 0.05,
        }
    }

    pub fn draws_particles(self) -> bool {
        matches!(self, Self::Rich)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Number of rotational slices; always at least 1.
    pub slices: u32,
    pub max_shapes: usize,
    /// Upper bound for a shape's base radius.
    pub shape_size: f64,
    pub shape_speed: f64,
    pub rotation_speed: f64,
    pub palette: String,
    pub variant: Variant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slices: 8,
            max_shapes: 20,
            shape_size: 40.0,
            shape_speed: 1.0,
            rotation_speed: 1.0,
            palette: "Aurora".to_string(),
            variant: Variant::Rich,
        }
    }
}

impl Config {
    /// Palette colors, or `None` when hue mode is active.
    pub fn palette_colors(&self) -> Option<&'static [&'static str]> {
        palette::lookup(&self.palette)
    }

    /// Rotation multiplier actually applied by the simulation.
    pub fn effective_rotation_speed(&self) -> f64 {
        match self.variant {
            Variant::Rich => self.rotation_speed,
            Variant::Classic => 1.0,
        }
    }
}

/// A configuration delta. `None` fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigUpdate {
    pub slices: Option<u32>,
    pub max_shapes: Option<usize>,
    pub shape_size: Option<f64>,
    pub shape_speed: Option<f64>,
    pub rotation_speed: Option<f64>,
    pub palette: Option<String>,
    pub variant: Option<Variant>,
}

impl ConfigUpdate {
    /// Parse a JSON object such as `{"maxShapes": 30, "palette": "Neon"}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// What an update did to the shape collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOutcome {
    /// No shape was created or dropped.
    Unchanged,
    /// Only the collection length changed; survivors kept their state.
    Resized { from: usize, to: usize },
    /// Every shape was regenerated from the new parameters.
    Rebuilt,
}

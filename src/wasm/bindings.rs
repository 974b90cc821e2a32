//! JavaScript-facing wrapper for hosts that run their own frame loop.

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::config::{ConfigOutcome, ConfigUpdate};
use crate::{palette, Kaleidoscope, Point};

/// Draw seed from `Math.random`, for hosts that don't pass one.
pub(super) fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[wasm_bindgen]
pub struct WebKaleidoscope {
    inner: Kaleidoscope,
}

#[wasm_bindgen]
impl WebKaleidoscope {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> Self {
        let seed = seed.map_or_else(random_seed, |s| s as u64);
        Self {
            inner: Kaleidoscope::with_seed(seed),
        }
    }

    /// Advance and paint one frame. Pass both pointer coordinates or neither.
    pub fn draw(
        &mut self,
        ctx: &CanvasRenderingContext2d,
        width: f64,
        height: f64,
        elapsed_ms: f64,
        pointer_x: Option<f64>,
        pointer_y: Option<f64>,
    ) {
        let pointer = pointer_x.zip(pointer_y).map(|(x, y)| Point::new(x, y));
        let mut ctx = ctx.clone();
        self.inner.draw(&mut ctx, width, height, elapsed_ms, pointer);
    }

    /// Apply a JSON delta such as `{"maxShapes": 30}`.
    ///
    /// Returns `"unchanged"`, `"resized"`, or `"rebuilt"`.
    #[wasm_bindgen(js_name = updateConfig)]
    pub fn update_config(&mut self, json: &str) -> Result<String, JsValue> {
        let update =
            ConfigUpdate::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let outcome = match self.inner.update_config(update) {
            ConfigOutcome::Unchanged => "unchanged",
            ConfigOutcome::Resized { .. } => "resized",
            ConfigOutcome::Rebuilt => "rebuilt",
        };
        Ok(outcome.to_string())
    }

    /// Current configuration as JSON.
    pub fn config(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.config()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = shapeCount)]
    pub fn shape_count(&self) -> usize {
        self.inner.shapes().len()
    }

    #[wasm_bindgen(js_name = paletteNames)]
    pub fn palette_names() -> js_sys::Array {
        let names = js_sys::Array::new();
        for name in palette::names().chain([palette::RANDOM]) {
            names.push(&JsValue::from_str(name));
        }
        names
    }
}

//! Kaleidoscope canvas effect.
//!
//! A set of drifting, rotating shapes is mirrored across N radial slices over
//! a pointer-reactive particle backdrop. The core is host-agnostic: it draws
//! through [`PaintSurface`], so it runs against a browser canvas under wasm32
//! and against [`RecordingSurface`] in native tests.

pub mod color;
pub mod config;
pub mod kaleidoscope;
pub mod palette;
pub mod particle;
pub mod render;
pub mod shape;
pub mod simulation;
pub mod surface;

pub use config::{Config, ConfigOutcome, ConfigUpdate, Variant};
pub use kaleidoscope::Kaleidoscope;
pub use surface::{DrawCommand, PaintSurface, Point, RecordingSurface};

// Only compile browser glue when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod bindings;
    mod logging;
    mod render;
    mod surface;

    pub use bindings::WebKaleidoscope;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        logging::init();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        // Pages that drive `WebKaleidoscope` themselves have no `#c` canvas.
        let Some(element) = document.get_element_by_id("c") else {
            tracing::debug!("no #c canvas, skipping autostart");
            return Ok(());
        };
        let canvas = element.dyn_into::<web_sys::HtmlCanvasElement>()?;

        render::start(canvas)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::WebKaleidoscope;

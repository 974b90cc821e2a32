use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::bindings::random_seed;
use crate::{Kaleidoscope, Point};

fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(dim(window.inner_width()) as u32);
    canvas.set_height(dim(window.inner_height()) as u32);
}

/// Drive the kaleidoscope on `canvas` from `requestAnimationFrame`.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d canvas not supported")?
        .dyn_into()?;
    let win = window().ok_or("no window")?;

    fit_to_window(&win, &canvas);

    // Resize canvas to fit window; the kaleidoscope notices the new size
    // on its next frame.
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(w) = window() {
                fit_to_window(&w, &canvas);
            }
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let pointer: Rc<Cell<Option<Point>>> = Rc::new(Cell::new(None));
    let move_closure = {
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            pointer.set(Some(Point::new(
                f64::from(e.offset_x()),
                f64::from(e.offset_y()),
            )));
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    canvas.add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref())?;
    move_closure.forget();

    let leave_closure = {
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move || pointer.set(None)) as Box<dyn FnMut()>)
    };
    canvas.add_event_listener_with_callback("mouseleave", leave_closure.as_ref().unchecked_ref())?;
    leave_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut scope = Kaleidoscope::with_seed(random_seed());
    let mut ctx = ctx;
    tracing::info!(
        width = canvas.width(),
        height = canvas.height(),
        "kaleidoscope started"
    );

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        scope.draw(&mut ctx, width, height, timestamp, pointer.get());

        // schedule next
        let Some(w) = window() else {
            return;
        };
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(err) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                tracing::warn!(?err, "requestAnimationFrame failed, stopping");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }

    Ok(())
}

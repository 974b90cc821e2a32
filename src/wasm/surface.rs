use web_sys::CanvasRenderingContext2d as Ctx;

use crate::surface::PaintSurface;

// Inherent canvas methods share these names, so every call is spelled out
// as `Ctx::method(self, ..)` to avoid recursing into the trait.
//
// The fallible canvas calls only reject non-finite arguments or negative
// radii; a dropped call just skips that primitive for the frame.
impl PaintSurface for Ctx {
    fn save(&mut self) {
        Ctx::save(self);
    }

    fn restore(&mut self) {
        Ctx::restore(self);
    }

    fn translate(&mut self, x: f64, y: f64) {
        Ctx::translate(self, x, y).ok();
    }

    fn rotate(&mut self, angle: f64) {
        Ctx::rotate(self, angle).ok();
    }

    fn scale(&mut self, x: f64, y: f64) {
        Ctx::scale(self, x, y).ok();
    }

    fn set_fill_style(&mut self, style: &str) {
        Ctx::set_fill_style_str(self, style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        Ctx::set_stroke_style_str(self, style);
    }

    fn set_line_width(&mut self, width: f64) {
        Ctx::set_line_width(self, width);
    }

    fn set_filter(&mut self, filter: &str) {
        Ctx::set_filter(self, filter);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        Ctx::fill_rect(self, x, y, width, height);
    }

    fn begin_path(&mut self) {
        Ctx::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        Ctx::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        Ctx::line_to(self, x, y);
    }

    fn close_path(&mut self) {
        Ctx::close_path(self);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        Ctx::arc(self, x, y, radius, start, end).ok();
    }

    fn fill(&mut self) {
        Ctx::fill(self);
    }

    fn stroke(&mut self) {
        Ctx::stroke(self);
    }
}

//! Drawing Surface
//!
//! The handful of 2D operations the background needs, behind a trait so
//! frames can be rendered without a browser.

use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

/// A gradient color stop
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

impl ColorStop {
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

/// Target for background frames
pub trait Surface {
    /// Size the backing store to `width * scale` by `height * scale` device
    /// pixels and scale drawing so callers keep working in CSS pixels
    fn resize(&mut self, width: f64, height: f64, scale: f64);

    /// Clear the whole logical area
    fn clear(&mut self, width: f64, height: f64);

    /// Fill the logical area with a linear gradient from the top-left to the
    /// bottom-right corner
    fn fill_diagonal_gradient(&mut self, width: f64, height: f64, stops: &[ColorStop]);

    /// Fill a circle with a radial gradient running from its center outwards
    fn fill_radial_circle(&mut self, x: f64, y: f64, radius: f64, stops: &[ColorStop]);
}

/// `<canvas>` backed surface
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas; `None` when it has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self { canvas, ctx })
    }

    fn paint(&self, gradient: &CanvasGradient, stops: &[ColorStop]) {
        for stop in stops {
            let _ = gradient.add_color_stop(stop.offset as f32, &stop.color);
        }
        self.ctx.set_fill_style_canvas_gradient(gradient);
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64, scale: f64) {
        self.canvas.set_width((width * scale).floor() as u32);
        self.canvas.set_height((height * scale).floor() as u32);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        // Resizing the backing store resets the context, so the scale is
        // applied from scratch rather than accumulated.
        let _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_diagonal_gradient(&mut self, width: f64, height: f64, stops: &[ColorStop]) {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, width, height);
        self.paint(&gradient, stops);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_radial_circle(&mut self, x: f64, y: f64, radius: f64, stops: &[ColorStop]) {
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
            return;
        };
        self.paint(&gradient, stops);

        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, PI * 2.0).is_ok() {
            self.ctx.fill();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn canvas_surface() -> CanvasSurface {
        let canvas: HtmlCanvasElement = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("canvas")
            .unwrap()
            .unchecked_into();
        CanvasSurface::new(canvas).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_gradient_becomes_fill_style() {
        let mut surface = canvas_surface();
        surface.resize(200.0, 100.0, 2.0);
        assert_eq!((surface.canvas.width(), surface.canvas.height()), (400, 200));

        surface.fill_diagonal_gradient(
            200.0,
            100.0,
            &[ColorStop::new(0.0, "#000"), ColorStop::new(1.0, "#fff")],
        );
        assert!(surface.ctx.fill_style().is_instance_of::<CanvasGradient>());

        surface.ctx.set_fill_style_str("#123456");
        surface.fill_radial_circle(50.0, 50.0, 10.0, &[ColorStop::new(0.0, "red")]);
        assert!(surface.ctx.fill_style().is_instance_of::<CanvasGradient>());
    }
}

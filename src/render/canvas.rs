//! Canvas-backed Surface over a web-sys 2D context.
//!
//! The backing store is sized by `devicePixelRatio` and the context
//! scaled to match, so the simulation and pointer events share one CSS
//! pixel coordinate space regardless of display density.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    background: String,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement, background: &str) -> Result<Self, JsValue> {
        let rect = canvas.get_bounding_client_rect();
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let width = rect.width();
        let height = rect.height();

        canvas.set_width((width * dpr) as u32);
        canvas.set_height((height * dpr) as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("not a 2d rendering context"))?;
        ctx.scale(dpr, dpr)?;

        Ok(Self {
            ctx,
            width,
            height,
            background: background.to_string(),
        })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_fill_style_str(&self.background);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, line_width: f64) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        if !stroke.is_empty() {
            self.ctx.set_stroke_style_str(stroke);
            self.ctx.set_line_width(stroke_width);
            self.ctx.stroke();
        }
    }
}

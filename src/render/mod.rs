//! Renderer - full-surface repaint from current particle state
//!
//! Runs on the integrator cadence, after integration. Drawing is a pure
//! read: the field comes in behind a shared reference and nothing here
//! touches velocity or displacement.

use crate::core::field::Field;
use crate::simulation::Settings;

pub mod canvas;

/// Host drawing surface. The canvas implementation lives in
/// [`canvas::CanvasSurface`]; tests substitute a recording stub.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    /// Wipe the full surface back to the background color.
    fn clear(&mut self);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, line_width: f64);
    /// Filled circle with an optional outline; empty `stroke` means none.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, stroke: &str, stroke_width: f64);
}

/// Clear, redraw the reference grid, then every particle at its
/// integrated position.
pub fn draw_frame<S: Surface>(field: &Field, surface: &mut S, settings: &Settings) {
    surface.clear();
    draw_grid(surface, field.step(), settings);
    for p in field.particles() {
        let pos = p.render_position();
        surface.fill_circle(
            pos.x,
            pos.y,
            p.radius,
            &p.style.fill,
            &p.style.stroke,
            p.style.stroke_width,
        );
    }
}

/// Fixed background lines at `step` spacing, independent of particle
/// state. Vertical lines first, then horizontal, from the origin.
fn draw_grid<S: Surface>(surface: &mut S, step: f64, settings: &Settings) {
    let w = surface.width();
    let h = surface.height();

    let mut x = 0.0;
    while x < w {
        surface.draw_line(x, 0.0, x, h, &settings.grid_color, settings.grid_line_width);
        x += step;
    }
    let mut y = 0.0;
    while y < h {
        surface.draw_line(0.0, y, w, y, &settings.grid_color, settings.grid_line_width);
        y += step;
    }
}

//! Public wasm API.
//!
//! `init(canvas)` wires the whole simulation to a host canvas: grid
//! generation, the integrator+render interval, the slower wave interval,
//! and the click handler. The three tasks share one [`SimulationCore`]
//! through `Rc<RefCell<_>>`; each callback runs to completion on the
//! single JS thread, which is what makes a whole tick atomic with respect
//! to the other tasks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::render::canvas::CanvasSurface;
use crate::render::Surface;
use crate::simulation::{Settings, SimulationCore};

/// Handle to a running simulation.
///
/// Fire-and-forget hosts can ignore it; keeping it allows inspection and
/// a deterministic [`Simulation::stop`].
#[wasm_bindgen]
pub struct Simulation {
    core: Rc<RefCell<SimulationCore>>,
    running: Rc<Cell<bool>>,
    canvas: HtmlCanvasElement,
    tick_interval: i32,
    wave_interval: i32,
    // Kept alive for the lifetime of the handle; dropped after the
    // intervals are cleared and the listener removed.
    _tick_closure: Closure<dyn FnMut()>,
    _wave_closure: Closure<dyn FnMut()>,
    click_closure: Closure<dyn FnMut(MouseEvent)>,
}

/// Mount the simulation on `canvas` with default settings.
#[wasm_bindgen]
pub fn init(canvas: HtmlCanvasElement) -> Result<Simulation, JsValue> {
    start(canvas, Settings::default())
}

/// Mount with a JSON settings override (any subset of fields).
#[wasm_bindgen(js_name = initWithSettings)]
pub fn init_with_settings(
    canvas: HtmlCanvasElement,
    settings_json: &str,
) -> Result<Simulation, JsValue> {
    let settings = Settings::from_json(settings_json).map_err(|e| JsValue::from_str(&e))?;
    start(canvas, settings)
}

fn start(canvas: HtmlCanvasElement, settings: Settings) -> Result<Simulation, JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    crate::set_panic_hook();

    let mut surface = CanvasSurface::from_canvas(&canvas, &settings.background)?;
    let core = SimulationCore::new(surface.width(), surface.height(), settings)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    web_sys::console::log_1(
        &format!(
            "particlefield engine v{}: {} particles ({} x {})",
            env!("CARGO_PKG_VERSION"),
            core.field().len(),
            core.field().columns(),
            core.field().rows(),
        )
        .into(),
    );

    // First frame before the timers start.
    core.draw(&mut surface);

    let tick_ms = core.settings().tick_interval_ms() as i32;
    let wave_ms = core.settings().wave_interval_ms() as i32;

    let core = Rc::new(RefCell::new(core));
    let running = Rc::new(Cell::new(true));

    // Integrator + renderer, fast cadence. The running flag is checked
    // first so a callback already queued when stop() ran mutates nothing.
    let tick_closure = {
        let core = Rc::clone(&core);
        let running = Rc::clone(&running);
        Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            let mut core = core.borrow_mut();
            core.step();
            core.draw(&mut surface);
        }) as Box<dyn FnMut()>)
    };

    // Wave scheduler, slow cadence.
    let wave_closure = {
        let core = Rc::clone(&core);
        let running = Rc::clone(&running);
        Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            core.borrow_mut().wave_tick();
        }) as Box<dyn FnMut()>)
    };

    // Pointer handler, event-driven. Client coordinates map into surface
    // space through the canvas bounding rect.
    let click_closure = {
        let core = Rc::clone(&core);
        let running = Rc::clone(&running);
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            if !running.get() {
                return;
            }
            let rect = canvas.get_bounding_client_rect();
            let x = event.client_x() as f64 - rect.left();
            let y = event.client_y() as f64 - rect.top();
            core.borrow_mut().pointer_impulse(x, y);
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let tick_interval = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick_closure.as_ref().unchecked_ref(),
        tick_ms,
    )?;
    let wave_interval = window.set_interval_with_callback_and_timeout_and_arguments_0(
        wave_closure.as_ref().unchecked_ref(),
        wave_ms,
    )?;
    canvas.add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref())?;

    Ok(Simulation {
        core,
        running,
        canvas,
        tick_interval,
        wave_interval,
        _tick_closure: tick_closure,
        _wave_closure: wave_closure,
        click_closure,
    })
}

#[wasm_bindgen]
impl Simulation {
    /// Cancel all three tasks. No particle state mutates after this
    /// returns, even for callbacks the browser had already queued.
    pub fn stop(&mut self) {
        if !self.running.get() {
            return;
        }
        self.running.set(false);
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.tick_interval);
            window.clear_interval_with_handle(self.wave_interval);
        }
        let _ = self
            .canvas
            .remove_event_listener_with_callback("click", self.click_closure.as_ref().unchecked_ref());
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.core.borrow().field().len()
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> usize {
        self.core.borrow().field().columns()
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> usize {
        self.core.borrow().field().rows()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.borrow().frame()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.core.borrow().field().width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.core.borrow().field().height()
    }
}

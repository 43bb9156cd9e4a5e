//! Particlefield Engine - interactive particle field for canvas backgrounds
//!
//! A grid of point masses on an HTML canvas: nudged by pointer clicks,
//! continuously damped toward rest, and periodically swept by a traveling
//! wave of random vertical impulses.
//!
//! Architecture:
//! - core/       - Particle, Field, Vec2, PRNG
//! - systems/    - Integrator, pointer force, wave scheduler
//! - simulation/ - Orchestration and settings
//! - render/     - Surface abstraction + frame drawing
//! - api/        - Public wasm API

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::api::wasm::{init, init_with_settings, Simulation};
pub use crate::core::field::Field;
pub use crate::core::particle::{Particle, ParticleStyle};
pub use crate::core::vec2::Vec2;
pub use crate::error::ConfigError;
pub use crate::render::Surface;
pub use crate::simulation::settings::Settings;
pub use crate::simulation::SimulationCore;
pub use crate::systems::wave::{WavePhase, WaveScheduler};

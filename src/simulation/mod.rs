//! Simulation core - one owned container, three cooperating drivers
//!
//! The host multiplexes three tasks onto one thread: the integrator tick
//! (fast, fixed-rate, followed by a repaint), the wave tick (slower,
//! fixed-rate), and the pointer handler (event-driven). All of them
//! mutate the particle field through this struct, each call running to
//! completion before the next, so within any one tick every particle sees
//! a consistent pre-tick state. A port to preemptive threads would need a
//! mutex around the whole core to keep that discipline.

use crate::core::field::Field;
use crate::core::particle::ParticleStyle;
use crate::core::random;
use crate::core::vec2::Vec2;
use crate::error::ConfigError;
use crate::render::{self, Surface};
use crate::systems::{integrator, pointer, wave::WaveScheduler};

pub mod settings;

pub use settings::Settings;

pub struct SimulationCore {
    field: Field,
    wave: WaveScheduler,
    settings: Settings,
    rng_state: u32,
    frame: u64,
}

impl SimulationCore {
    /// Generate the field and set up both periodic processes' state.
    /// Fatal on invalid dimensions, spacing, or settings; nothing starts.
    pub fn new(width: f64, height: f64, settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let style = ParticleStyle {
            fill: settings.particle_fill.clone(),
            stroke: settings.particle_stroke.clone(),
            stroke_width: settings.particle_stroke_width,
        };
        let field = Field::generate(
            width,
            height,
            settings.spacing,
            settings.particle_radius,
            &style,
        )?;
        let wave = WaveScheduler::new(settings.wave_cooldown_ticks());
        let rng_state = random::seed_or_default(settings.rng_seed);
        Ok(Self { field, wave, settings, rng_state, frame: 0 })
    }

    /// One integrator tick.
    pub fn step(&mut self) {
        integrator::integrate(
            self.field.particles_mut(),
            self.settings.dt(),
            self.settings.damping,
        );
        self.frame += 1;
    }

    /// One wave scheduler tick.
    pub fn wave_tick(&mut self) {
        self.wave.tick(
            &mut self.field,
            &mut self.rng_state,
            self.settings.wave_amplitude,
        );
    }

    /// Impulse for a pointer event at `(x, y)` in surface space.
    pub fn pointer_impulse(&mut self, x: f64, y: f64) {
        pointer::apply_impulse(
            self.field.particles_mut(),
            Vec2::new(x, y),
            self.settings.impulse_strength,
            self.settings.min_pointer_distance,
        );
    }

    /// Repaint the full surface from current state. Pure read.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        render::draw_frame(&self.field, surface, &self.settings);
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn wave(&self) -> &WaveScheduler {
        &self.wave
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

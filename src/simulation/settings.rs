use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable constants for the simulation. Every value has a design
/// default; hosts may override any subset through a JSON blob.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Integrator tick rate in Hz; `dt` is its reciprocal.
    pub tick_rate_hz: f64,
    /// Per-tick geometric decay factor, strictly between 0 and 1.
    pub damping: f64,
    /// Grid spacing in surface pixels.
    pub spacing: f64,
    pub particle_radius: f64,
    /// Numerator of the pointer force law `strength / dist`.
    pub impulse_strength: f64,
    /// Distance floor for the pointer force (singularity guard).
    pub min_pointer_distance: f64,
    /// Wave impulses are uniform in [-amplitude, +amplitude).
    pub wave_amplitude: f64,
    /// Wave period as a multiple of the integrator period.
    pub wave_tick_factor: u32,
    /// Pause between sweeps, in milliseconds.
    pub wave_cooldown_ms: u32,
    /// Seed for the wave's PRNG; 0 selects a fixed default seed.
    pub rng_seed: u32,

    // Visual styling
    pub background: String,
    pub grid_color: String,
    pub grid_line_width: f64,
    pub particle_fill: String,
    pub particle_stroke: String,
    pub particle_stroke_width: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: 10.0,
            damping: 0.9,
            spacing: 25.0,
            particle_radius: 0.5,
            impulse_strength: 1000.0,
            min_pointer_distance: 10.0,
            wave_amplitude: 50.0,
            wave_tick_factor: 5,
            wave_cooldown_ms: 2000,
            rng_seed: 0,
            background: "white".to_string(),
            grid_color: "gray".to_string(),
            grid_line_width: 0.5,
            particle_fill: "black".to_string(),
            particle_stroke: String::new(),
            particle_stroke_width: 2.0,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Range checks beyond what serde can express. Field dimensions and
    /// spacing are checked separately at grid generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate_hz > 0.0) {
            return Err(ConfigError::InvalidSettings(format!(
                "tick_rate_hz must be positive, got {}",
                self.tick_rate_hz
            )));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::InvalidSettings(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if !(self.min_pointer_distance > 0.0) {
            return Err(ConfigError::InvalidSettings(format!(
                "min_pointer_distance must be positive, got {}",
                self.min_pointer_distance
            )));
        }
        if self.wave_tick_factor == 0 {
            return Err(ConfigError::InvalidSettings(
                "wave_tick_factor must be at least 1".to_string(),
            ));
        }
        if !(self.particle_radius >= 0.0) || !self.impulse_strength.is_finite() {
            return Err(ConfigError::InvalidSettings(
                "particle_radius and impulse_strength must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Integrator timestep in seconds.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }

    /// Integrator period in milliseconds (host timer granularity).
    pub fn tick_interval_ms(&self) -> u32 {
        (1000.0 / self.tick_rate_hz).round().max(1.0) as u32
    }

    /// Wave period in milliseconds. Saturates for extreme (but valid)
    /// tick rates whose interval already sits at the u32 ceiling.
    pub fn wave_interval_ms(&self) -> u32 {
        self.tick_interval_ms().saturating_mul(self.wave_tick_factor)
    }

    /// Cooldown length in wave ticks, rounded up, at least one.
    pub fn wave_cooldown_ticks(&self) -> u32 {
        let interval = self.wave_interval_ms().max(1);
        self.wave_cooldown_ms.div_ceil(interval).max(1)
    }
}

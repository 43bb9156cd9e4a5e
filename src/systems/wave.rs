//! Wave scheduler - traveling column sweep with a cooldown between sweeps
//!
//! A second periodic process, slower than the integrator, sharing the same
//! particle field. Each tick in the Sweeping phase injects a random
//! vertical impulse into one column and advances; once every column has
//! been visited the scheduler cools down for a fixed number of ticks, then
//! restarts from column zero. Injected velocity lands directly on the
//! particles, so the very next integrator tick sees it.

use crate::core::field::Field;
use crate::core::random;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WavePhase {
    Sweeping,
    Cooling,
}

#[derive(Clone, Debug)]
pub struct WaveScheduler {
    current_column: usize,
    phase: WavePhase,
    cooldown_left: u32,
    cooldown_ticks: u32,
}

impl WaveScheduler {
    /// `cooldown_ticks` is the pause between sweeps, in wave ticks.
    pub fn new(cooldown_ticks: u32) -> Self {
        Self {
            current_column: 0,
            phase: WavePhase::Sweeping,
            cooldown_left: 0,
            cooldown_ticks: cooldown_ticks.max(1),
        }
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn current_column(&self) -> usize {
        self.current_column
    }

    /// One wave tick. Sweep completion is checked before any processing,
    /// so the completion tick itself injects nothing.
    pub fn tick(&mut self, field: &mut Field, rng_state: &mut u32, amplitude: f64) {
        match self.phase {
            WavePhase::Cooling => {
                self.cooldown_left -= 1;
                if self.cooldown_left == 0 {
                    self.current_column = 0;
                    self.phase = WavePhase::Sweeping;
                }
            }
            WavePhase::Sweeping => {
                if self.current_column >= field.columns() {
                    self.phase = WavePhase::Cooling;
                    self.cooldown_left = self.cooldown_ticks;
                    return;
                }
                for p in field.column_mut(self.current_column) {
                    p.velocity.y += random::next_symmetric(rng_state, amplitude);
                }
                self.current_column += 1;
            }
        }
    }
}

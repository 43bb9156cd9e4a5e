//! Integrator - one fixed timestep for every particle
//!
//! Two passes over the whole field: integrate velocity into displacement,
//! then damp both. Damping multiplies the *updated* displacement, giving
//! geometric decay per tick rather than continuous exponential decay; the
//! ordering is load-bearing and pinned by tests.

use crate::core::particle::Particle;

/// Advance every particle by one tick of length `dt`.
///
/// `damping` must be strictly between 0 and 1 (validated at simulation
/// construction), which makes displacement and velocity converge to zero
/// from any bounded impulse. No clamping; transient overshoot is expected.
pub fn integrate(particles: &mut [Particle], dt: f64, damping: f64) {
    for p in particles.iter_mut() {
        p.displacement = p.displacement + p.velocity * dt;
    }
    for p in particles.iter_mut() {
        p.displacement = p.displacement * damping;
        p.velocity = p.velocity * damping;
    }
}

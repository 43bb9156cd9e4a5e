//! Pointer force - one-shot repulsion impulse from a click
//!
//! Inverse-distance polar law: every particle is pushed directly away
//! from the pointer with magnitude `strength / dist`. The distance is
//! floored at `min_dist`, so the impulse stays finite even for a particle
//! sitting exactly under the pointer.

use crate::core::particle::Particle;
use crate::core::vec2::Vec2;

/// Apply an impulse to every particle for a click at `pointer`.
///
/// `atan2` gives the quadrant-correct angle of the particle-to-pointer
/// offset; a zero offset resolves to angle 0, i.e. a `+x` push of
/// magnitude `strength / min_dist`. Composes additively with whatever
/// velocity a particle already carries.
pub fn apply_impulse(particles: &mut [Particle], pointer: Vec2, strength: f64, min_dist: f64) {
    for p in particles.iter_mut() {
        let rel = p.position - pointer;
        let dist = rel.length().max(min_dist);
        let angle = rel.y.atan2(rel.x);
        let magnitude = strength / dist;
        p.velocity.x += magnitude * angle.cos();
        p.velocity.y += magnitude * angle.sin();
    }
}

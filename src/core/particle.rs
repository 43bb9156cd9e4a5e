use super::vec2::Vec2;

/// Rendering-only attributes, invariant after creation.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
    pub fill: String,
    /// Empty string means no outline.
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for ParticleStyle {
    fn default() -> Self {
        Self {
            fill: "black".to_string(),
            stroke: String::new(),
            stroke_width: 2.0,
        }
    }
}

/// A single point mass.
///
/// `position` is the fixed grid anchor. `displacement` is the per-frame
/// offset added to it for drawing; it accumulates integrator output and
/// decays toward zero every tick, as does `velocity`.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub displacement: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    pub style: ParticleStyle,
}

impl Particle {
    pub fn new(x: f64, y: f64, radius: f64, style: ParticleStyle) -> Self {
        Self {
            position: Vec2::new(x, y),
            displacement: Vec2::zero(),
            velocity: Vec2::zero(),
            radius,
            style,
        }
    }

    /// Re-anchor the particle. The only way `position` changes after grid
    /// placement; resets the accumulated displacement.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x, y);
        self.displacement = Vec2::zero();
    }

    /// Where the particle is drawn this frame.
    pub fn render_position(&self) -> Vec2 {
        self.position + self.displacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_to_resets_displacement() {
        let mut p = Particle::new(10.0, 20.0, 0.5, ParticleStyle::default());
        p.displacement = Vec2::new(3.0, -4.0);
        p.move_to(50.0, 60.0);
        assert_eq!(p.position, Vec2::new(50.0, 60.0));
        assert_eq!(p.displacement, Vec2::zero());
    }

    #[test]
    fn render_position_adds_displacement() {
        let mut p = Particle::new(10.0, 20.0, 0.5, ParticleStyle::default());
        p.displacement = Vec2::new(1.5, -2.5);
        assert_eq!(p.render_position(), Vec2::new(11.5, 17.5));
    }
}

//! Field - column-major grid of particles
//!
//! Particles sit one `step` inside the border and stop before the far
//! edge; border cells are never populated. Storage is column-major:
//! particle `k` belongs to column `k / rows`, row `k % rows`, so each
//! column is a contiguous slice (the wave scheduler sweeps by column).

use crate::error::ConfigError;

use super::particle::{Particle, ParticleStyle};

pub struct Field {
    particles: Vec<Particle>,
    columns: usize,
    rows: usize,
    width: f64,
    height: f64,
    step: f64,
}

impl Field {
    /// Lay out the grid for a `width` x `height` surface.
    ///
    /// Fails only on non-positive dimensions or spacing. A surface too
    /// small to fit any interior point yields a valid empty field.
    pub fn generate(
        width: f64,
        height: f64,
        step: f64,
        radius: f64,
        style: &ParticleStyle,
    ) -> Result<Self, ConfigError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ConfigError::InvalidSurface { width, height });
        }
        if !(step > 0.0) {
            return Err(ConfigError::InvalidSpacing(step));
        }

        let mut particles = Vec::new();
        let mut columns = 0;
        let mut x = step;
        while x < width - 1.0 {
            columns += 1;
            let mut y = step;
            while y < height - 1.0 {
                particles.push(Particle::new(x, y, radius, style.clone()));
                y += step;
            }
            x += step;
        }

        let mut rows = 0;
        let mut y = step;
        while y < height - 1.0 {
            rows += 1;
            y += step;
        }

        Ok(Self { particles, columns, rows, width, height, step })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Contiguous block of `rows` particles making up one column.
    pub fn column(&self, col: usize) -> &[Particle] {
        let start = col * self.rows;
        &self.particles[start..start + self.rows]
    }

    pub fn column_mut(&mut self, col: usize) -> &mut [Particle] {
        let start = col * self.rows;
        &mut self.particles[start..start + self.rows]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> ParticleStyle {
        ParticleStyle::default()
    }

    #[test]
    fn grid_cardinality_100x100_step_25() {
        // Particles at 25, 50, 75 on each axis.
        let field = Field::generate(100.0, 100.0, 25.0, 0.5, &style()).unwrap();
        assert_eq!(field.columns(), 3);
        assert_eq!(field.rows(), 3);
        assert_eq!(field.len(), 9);
    }

    #[test]
    fn grid_is_column_major() {
        let field = Field::generate(100.0, 100.0, 25.0, 0.5, &style()).unwrap();
        for (k, p) in field.particles().iter().enumerate() {
            let col = k / field.rows();
            let row = k % field.rows();
            assert_eq!(p.position.x, 25.0 * (col as f64 + 1.0));
            assert_eq!(p.position.y, 25.0 * (row as f64 + 1.0));
        }
        // Column slice covers exactly the particles with that x.
        let col1 = field.column(1);
        assert_eq!(col1.len(), 3);
        assert!(col1.iter().all(|p| p.position.x == 50.0));
    }

    #[test]
    fn border_cells_are_not_populated() {
        // x = 100 would land on width - 1 + 1; last column must be 75.
        let field = Field::generate(101.0, 101.0, 25.0, 0.5, &style()).unwrap();
        let max_x = field
            .particles()
            .iter()
            .map(|p| p.position.x)
            .fold(0.0, f64::max);
        assert_eq!(max_x, 75.0);
    }

    #[test]
    fn too_small_surface_yields_empty_field() {
        let field = Field::generate(20.0, 20.0, 25.0, 0.5, &style()).unwrap();
        assert!(field.is_empty());
        assert_eq!(field.columns(), 0);
        assert_eq!(field.rows(), 0);
    }

    #[test]
    fn rejects_bad_dimensions_and_spacing() {
        assert!(matches!(
            Field::generate(0.0, 100.0, 25.0, 0.5, &style()),
            Err(ConfigError::InvalidSurface { .. })
        ));
        assert!(matches!(
            Field::generate(100.0, -5.0, 25.0, 0.5, &style()),
            Err(ConfigError::InvalidSurface { .. })
        ));
        assert!(matches!(
            Field::generate(f64::NAN, 100.0, 25.0, 0.5, &style()),
            Err(ConfigError::InvalidSurface { .. })
        ));
        assert!(matches!(
            Field::generate(100.0, 100.0, 0.0, 0.5, &style()),
            Err(ConfigError::InvalidSpacing(_))
        ));
        assert!(matches!(
            Field::generate(100.0, 100.0, -1.0, 0.5, &style()),
            Err(ConfigError::InvalidSpacing(_))
        ));
    }
}

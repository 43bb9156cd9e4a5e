use super::*;
use crate::systems::wave::WavePhase;

fn core_100x100() -> SimulationCore {
    SimulationCore::new(100.0, 100.0, Settings::default()).unwrap()
}

#[test]
fn grid_cardinality_matches_surface() {
    let core = core_100x100();
    assert_eq!(core.field().columns(), 3);
    assert_eq!(core.field().rows(), 3);
    assert_eq!(core.field().len(), 9);
}

#[test]
fn construction_fails_on_bad_config() {
    assert!(matches!(
        SimulationCore::new(0.0, 100.0, Settings::default()),
        Err(ConfigError::InvalidSurface { .. })
    ));

    let mut settings = Settings::default();
    settings.spacing = -1.0;
    assert!(matches!(
        SimulationCore::new(100.0, 100.0, settings),
        Err(ConfigError::InvalidSpacing(_))
    ));

    let mut settings = Settings::default();
    settings.damping = 1.5;
    assert!(matches!(
        SimulationCore::new(100.0, 100.0, settings),
        Err(ConfigError::InvalidSettings(_))
    ));
}

#[test]
fn click_at_origin_pushes_far_corner_diagonally() {
    // Particle at (75, 75), pointer at (0, 0): rel = (75, 75),
    // dist = sqrt(11250), angle = pi/4, magnitude = 1000 / dist = 9.428.
    let mut core = core_100x100();
    core.pointer_impulse(0.0, 0.0);

    let corner = core
        .field()
        .particles()
        .iter()
        .find(|p| p.position.x == 75.0 && p.position.y == 75.0)
        .unwrap();
    let magnitude = 1000.0 / (75.0f64 * 75.0 * 2.0).sqrt();
    assert!((magnitude - 9.428).abs() < 1e-3);
    let expected = magnitude * std::f64::consts::FRAC_PI_4.cos();
    assert!((corner.velocity.x - expected).abs() < 1e-9);
    assert!((corner.velocity.y - expected).abs() < 1e-9);
}

#[test]
fn wave_velocity_is_visible_to_the_next_step() {
    // No buffering: an injected velocity moves displacement on the very
    // next integrator tick, before any damping has eaten it.
    let mut core = core_100x100();
    core.wave_tick();
    let injected: Vec<f64> = core
        .field()
        .column(0)
        .iter()
        .map(|p| p.velocity.y)
        .collect();
    assert!(injected.iter().all(|&v| v != 0.0));

    core.step();
    let dt = core.settings().dt();
    let damping = core.settings().damping;
    for (p, v0) in core.field().column(0).iter().zip(&injected) {
        assert!((p.displacement.y - v0 * dt * damping).abs() < 1e-12);
        assert!((p.velocity.y - v0 * damping).abs() < 1e-12);
    }
}

#[test]
fn full_wave_cycle_returns_to_sweeping() {
    let mut core = core_100x100();
    let columns = core.field().columns();
    let cooldown = core.settings().wave_cooldown_ticks();

    for _ in 0..columns {
        core.wave_tick();
    }
    assert_eq!(core.wave().phase(), WavePhase::Sweeping);
    core.wave_tick(); // completion tick
    assert_eq!(core.wave().phase(), WavePhase::Cooling);
    for _ in 0..cooldown {
        core.wave_tick();
    }
    assert_eq!(core.wave().phase(), WavePhase::Sweeping);
    assert_eq!(core.wave().current_column(), 0);
}

#[test]
fn same_seed_reproduces_the_same_sweep() {
    let mut settings = Settings::default();
    settings.rng_seed = 4242;
    let mut a = SimulationCore::new(100.0, 100.0, settings.clone()).unwrap();
    let mut b = SimulationCore::new(100.0, 100.0, settings).unwrap();
    for _ in 0..3 {
        a.wave_tick();
        b.wave_tick();
    }
    let va: Vec<f64> = a.field().particles().iter().map(|p| p.velocity.y).collect();
    let vb: Vec<f64> = b.field().particles().iter().map(|p| p.velocity.y).collect();
    assert_eq!(va, vb);
}

#[test]
fn field_settles_after_mixed_input() {
    let mut core = core_100x100();
    core.pointer_impulse(50.0, 50.0);
    for _ in 0..core.field().columns() + 1 {
        core.wave_tick();
    }
    for _ in 0..200 {
        core.step();
    }
    assert_eq!(core.frame(), 200);
    for p in core.field().particles() {
        assert!(p.velocity.is_finite());
        assert!(p.displacement.is_finite());
        assert!(p.velocity.length() < 1e-6);
        assert!(p.displacement.length() < 1e-6);
    }
}

// Integrator tests: circular motion, periodicity, proper time and guards.

use blackhole_core::observer::{
    circular_orbit_speed, orbital_angular_velocity, orbital_frame_from, proper_time_step,
};
use blackhole_core::{Effect, Kinematics, Observer, ObserverMode, ParameterStore};
use glam::DVec3;

const EPS: f64 = 1e-9;

fn orbiting(distance: f64) -> (Observer, ParameterStore) {
    let mut params = ParameterStore::default();
    params.set_observer_distance(distance);
    let mut observer = Observer::default();
    observer.advance(0.0, &params);
    (observer, params)
}

#[test]
fn orbit_stays_on_circle() {
    for r in [1.6, 3.0, 11.0, 25.0, 50.0] {
        let (mut observer, params) = orbiting(r);
        for dt in [0.0, 1.0 / 60.0, 0.5, 3.0, 120.0] {
            observer.advance(dt, &params);
            let len = observer.position.length();
            assert!((len - r).abs() < EPS * r, "r={r} dt={dt}: |pos|={len}");
        }
    }
}

#[test]
fn velocity_is_tangent_and_sub_luminal() {
    let (mut observer, params) = orbiting(4.0);
    observer.advance(1.3, &params);
    assert!(observer.position.dot(observer.velocity).abs() < 1e-9);
    assert!(observer.velocity.length_squared() < 1.0);
    assert!((observer.velocity.length() - circular_orbit_speed(4.0)).abs() < 1e-12);
}

#[test]
fn full_period_returns_to_start() {
    let r = 11.0;
    let (mut observer, params) = orbiting(r);
    let start_pos = observer.position;
    let start_vel = observer.velocity;

    let period = std::f64::consts::TAU / orbital_angular_velocity(r);
    observer.advance(period / params.time_scale(), &params);

    assert!(
        (observer.position - start_pos).length() < 1e-6,
        "position drifted to {:?}",
        observer.position
    );
    assert!((observer.velocity - start_vel).length() < 1e-6);
}

#[test]
fn inclination_tilts_orbit_about_y() {
    let mut params = ParameterStore::default();
    params.set_orbital_inclination(90.0);
    let mut observer = Observer::default();
    observer.advance(0.0, &params);
    // θ = 0 sits on the x axis before the tilt; 90° about y carries it onto -z
    let expected = DVec3::new(0.0, 0.0, -11.0);
    assert!((observer.position - expected).length() < 1e-9);
}

#[test]
fn concrete_default_step() {
    let params = ParameterStore::default();
    let mut observer = Observer::default();
    observer.advance(1.0 / 60.0, &params);

    let v = circular_orbit_speed(11.0);
    let omega = orbital_angular_velocity(11.0);
    assert!((v - 1.0 / 20f64.sqrt()).abs() < 1e-12);
    assert!((v - 0.2236).abs() < 1e-4);
    assert!((omega - 0.02033).abs() < 1e-5);

    let dt: f64 = (1.0 / 60.0) * 2.0;
    assert!((dt - 0.03333).abs() < 1e-5);

    let expected = (dt * dt * (1.0 - v * v) / (1.0 - 1.0 / 11.0)).sqrt();
    assert!((observer.time() - expected).abs() < 1e-12);
    assert!((observer.time() - 0.0341).abs() < 2e-4);
    assert!((observer.orbit_angle() - omega * dt).abs() < 1e-12);
}

#[test]
fn dilation_disabled_is_exact() {
    let mut params = ParameterStore::default();
    params.set_effect(Effect::GravitationalTimeDilation, false);
    let mut observer = Observer::default();
    observer.advance(1.0 / 60.0, &params);
    assert_eq!(observer.time(), (1.0 / 60.0) * 2.0);
}

#[test]
fn dilation_approaches_identity_far_away() {
    let dt = 0.05;
    let far = proper_time_step(dt, 0.0, 1e12);
    assert!((far - dt).abs() < 1e-12);
    let orbiting_far = proper_time_step(dt, circular_orbit_speed(1e9), 1e9);
    assert!((orbiting_far - dt).abs() / dt < 1e-6);
}

#[test]
fn dilation_diverges_near_horizon() {
    let dt = 0.05;
    let mut previous = dt;
    for r in [2.0, 1.1, 1.01, 1.0001] {
        let step = proper_time_step(dt, 0.0, r);
        assert!(step > previous, "r={r}: {step} <= {previous}");
        previous = step;
    }
    assert!(previous > 10.0 * dt);
}

#[test]
fn guards_never_produce_nan() {
    assert!(proper_time_step(1.0, 0.5, 0.5).is_finite());
    assert!(proper_time_step(1.0, 2.0, 3.0).is_finite());
    assert!(proper_time_step(1.0, f64::NAN, f64::NAN).is_finite());
    assert!(circular_orbit_speed(1.0).is_finite());
    assert!(circular_orbit_speed(1.0) < 1.0);

    let mut params = ParameterStore::default();
    params.set_observer_mode(ObserverMode::Stationary);
    let mut observer = Observer::default();
    observer.position = DVec3::ZERO;
    observer.advance(1.0, &params);
    assert!(observer.time().is_finite());
    assert!(observer.time() > 0.0);
}

#[test]
fn proper_time_never_decreases() {
    let (mut observer, params) = orbiting(11.0);
    let mut last = observer.time();
    for dt in [0.016, -1.0, f64::NAN, f64::INFINITY, 0.0, 0.2] {
        observer.advance(dt, &params);
        assert!(observer.time() >= last, "dt={dt}");
        last = observer.time();
    }
}

#[test]
fn stationary_mode_zeroes_velocity() {
    let mut params = ParameterStore::default();
    params.set_observer_mode(ObserverMode::Stationary);
    let mut observer = Observer::default();
    observer.position = DVec3::new(0.0, -8.0, 0.0);
    observer.advance(0.5, &params);
    assert_eq!(observer.velocity, DVec3::ZERO);
    assert_eq!(observer.position, DVec3::new(0.0, -8.0, 0.0));
    let expected = proper_time_step(0.5 * 2.0, 0.0, 8.0);
    assert!((observer.time() - expected).abs() < 1e-12);
}

#[test]
fn orbital_frame_is_orthonormal() {
    let (mut observer, params) = orbiting(6.0);
    for _ in 0..50 {
        observer.advance(0.7, &params);
        let f = observer.orbital_frame();
        for axis in [f.x_axis, f.y_axis, f.z_axis] {
            assert!((axis.length() - 1.0).abs() < 1e-9);
        }
        assert!(f.x_axis.dot(f.y_axis).abs() < 1e-9);
        assert!(f.y_axis.dot(f.z_axis).abs() < 1e-9);
        assert!(f.z_axis.dot(f.x_axis).abs() < 1e-9);
    }
}

#[test]
fn degenerate_frame_reuses_previous() {
    let (mut observer, params) = orbiting(11.0);
    observer.advance(0.3, &params);
    let before = observer.orbital_frame();

    observer.velocity = DVec3::ZERO;
    assert_eq!(observer.orbital_frame(), before);

    assert!(orbital_frame_from(DVec3::new(5.0, 0.0, 0.0), DVec3::ZERO).is_none());
    // velocity pointing straight out along the position vector
    assert!(orbital_frame_from(DVec3::new(0.0, 3.0, 0.0), DVec3::new(0.0, 1.0, 0.0)).is_none());
}

#[test]
fn reset_restores_observer_defaults() {
    let (mut observer, params) = orbiting(3.0);
    observer.advance(5.0, &params);
    observer.reset();
    assert_eq!(observer, Observer::default());
    assert_eq!(observer.position, DVec3::new(10.0, 0.0, 0.0));
    assert_eq!(observer.velocity, DVec3::new(0.0, 1.0, 0.0));
    assert_eq!(observer.time(), 0.0);
    assert_eq!(observer.orbit_angle(), 0.0);
}

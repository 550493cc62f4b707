//! Observer kinematics: circular orbits, proper time and the orbital frame.

use crate::constants::*;
use crate::params::{Effect, ObserverMode, ParameterStore};
use glam::{DMat3, DVec3};
use std::f64::consts::TAU;

/// Operations the frame loop needs from whatever carries the camera through spacetime.
pub trait Kinematics {
    /// Advance by `dt_raw` wall-clock seconds.
    fn advance(&mut self, dt_raw: f64, params: &ParameterStore);
    /// Orthonormal basis attached to the instantaneous motion.
    fn orbital_frame(&self) -> DMat3;
}

/// Position, velocity and orientation of the camera plus its elapsed proper time.
#[derive(Clone, Debug, PartialEq)]
pub struct Observer {
    pub position: DVec3,
    pub velocity: DVec3,
    /// Columns are the camera x, y and z basis vectors.
    pub orientation: DMat3,
    time: f64,
    orbit_angle: f64,
    last_frame: DMat3,
    domain_fault: bool,
}

impl Default for Observer {
    fn default() -> Self {
        let position = DVec3::from(DEFAULT_OBSERVER_POSITION);
        let velocity = DVec3::from(DEFAULT_OBSERVER_VELOCITY);
        Self {
            position,
            velocity,
            orientation: DMat3::IDENTITY,
            time: 0.0,
            orbit_angle: 0.0,
            last_frame: orbital_frame_from(position, velocity).unwrap_or(DMat3::IDENTITY),
            domain_fault: false,
        }
    }
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed proper time in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Current angle along the circular orbit, in [0, 2π).
    pub fn orbit_angle(&self) -> f64 {
        self.orbit_angle
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn report_domain(&mut self, faulted: bool, r: f64) {
        if faulted && !self.domain_fault {
            log::warn!("[observer] non-physical state at r={r:.4}; clamped to nearest valid value");
        }
        self.domain_fault = faulted;
    }
}

impl Kinematics for Observer {
    fn advance(&mut self, dt_raw: f64, params: &ParameterStore) {
        let dt_raw = if dt_raw.is_finite() { dt_raw.max(0.0) } else { 0.0 };
        let dt = dt_raw * params.time_scale();

        let (r, v, faulted) = match params.observer_mode() {
            ObserverMode::Orbiting => {
                let (r, r_fault) = guard_radius(params.observer().distance);
                let (v, v_fault) = guard_speed(1.0 / (2.0 * (r - HORIZON_RADIUS)).sqrt());
                let omega = v / r;
                self.orbit_angle = (self.orbit_angle + omega * dt).rem_euclid(TAU);

                let (s, c) = self.orbit_angle.sin_cos();
                let tilt = DMat3::from_rotation_y(params.observer().orbital_inclination_deg.to_radians());
                self.position = tilt * DVec3::new(c * r, s * r, 0.0);
                self.velocity = tilt * DVec3::new(-s * v, c * v, 0.0);
                if let Some(frame) = orbital_frame_from(self.position, self.velocity) {
                    self.last_frame = frame;
                }
                (r, v, r_fault || v_fault)
            }
            ObserverMode::Stationary => {
                self.velocity = DVec3::ZERO;
                let (r, r_fault) = guard_radius(self.position.length());
                (r, 0.0, r_fault)
            }
        };
        self.report_domain(faulted, r);

        let dt_proper = if params.effect(Effect::GravitationalTimeDilation) {
            proper_time_step(dt, v, r)
        } else {
            dt
        };
        self.time += dt_proper;
    }

    fn orbital_frame(&self) -> DMat3 {
        match orbital_frame_from(self.position, self.velocity) {
            Some(frame) => frame,
            None => {
                log::debug!("[observer] degenerate orbital frame; reusing previous basis");
                self.last_frame
            }
        }
    }
}

/// Speed of a circular orbit at radius `r`, clamped below light speed.
pub fn circular_orbit_speed(r: f64) -> f64 {
    let (r, _) = guard_radius(r);
    guard_speed(1.0 / (2.0 * (r - HORIZON_RADIUS)).sqrt()).0
}

/// Orbital angular velocity at radius `r`.
pub fn orbital_angular_velocity(r: f64) -> f64 {
    let (r, _) = guard_radius(r);
    circular_orbit_speed(r) / r
}

/// Proper time elapsed over coordinate step `dt` at speed `v` and radius `r`:
/// `sqrt(dt² (1 - v²) / (1 - 1/r))`.
pub fn proper_time_step(dt: f64, v: f64, r: f64) -> f64 {
    let (r, _) = guard_radius(r);
    let v_sq = (v * v).min(MAX_SPEED_SQ);
    ((dt * dt * (1.0 - v_sq)) / (1.0 - HORIZON_RADIUS / r)).sqrt()
}

/// Basis biased toward the direction of travel; `None` when position and
/// travel direction are (nearly) collinear or the velocity vanishes.
pub fn orbital_frame_from(position: DVec3, velocity: DVec3) -> Option<DMat3> {
    let travel = velocity.try_normalize()?;
    let y = (travel * ORBITAL_FRAME_VELOCITY_BIAS - position).try_normalize()?;
    let z = position.cross(y);
    let len = z.length();
    if !(len > DEGENERATE_FRAME_TOLERANCE) {
        return None;
    }
    let z = z / len;
    let x = y.cross(z);
    Some(DMat3::from_cols(x, y, z))
}

#[inline]
fn guard_radius(r: f64) -> (f64, bool) {
    let min_r = HORIZON_RADIUS + HORIZON_EPSILON;
    if r >= min_r {
        (r, false)
    } else {
        (min_r, true)
    }
}

#[inline]
fn guard_speed(v: f64) -> (f64, bool) {
    if v.is_finite() && v * v <= MAX_SPEED_SQ {
        (v, false)
    } else {
        (MAX_SPEED_SQ.sqrt(), true)
    }
}

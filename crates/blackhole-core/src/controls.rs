use crate::constants::{
    CONTROL_PITCH_LIMIT_DEG, DEFAULT_CONTROL_PITCH_DEG, DEFAULT_CONTROL_YAW_DEG,
};
use glam::{DMat4, DVec3};

// Distance of the control camera from its target; only the rotation is consumed downstream.
const CONTROL_RADIUS: f64 = 1.0;

/// Turntable orbit around the origin driven by pointer drags.
///
/// Frontends own one of these and hand `view_matrix()` to the session each
/// tick. The session never writes back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    yaw: f64,
    pitch: f64,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_CONTROL_YAW_DEG.to_radians(),
            pitch: DEFAULT_CONTROL_PITCH_DEG.to_radians(),
        }
    }
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Rotate by the given angles in radians. Pitch stops short of the poles.
    pub fn rotate(&mut self, d_yaw: f64, d_pitch: f64) {
        if !(d_yaw.is_finite() && d_pitch.is_finite()) {
            return;
        }
        let limit = CONTROL_PITCH_LIMIT_DEG.to_radians();
        self.yaw = (self.yaw + d_yaw).rem_euclid(std::f64::consts::TAU);
        self.pitch = (self.pitch + d_pitch).clamp(-limit, limit);
    }

    /// Pointer drag in pixels; `radians_per_px` is the frontend's sensitivity.
    pub fn drag(&mut self, dx_px: f64, dy_px: f64, radians_per_px: f64) {
        self.rotate(-dx_px * radians_per_px, -dy_px * radians_per_px);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// World-to-camera transform.
    pub fn view_matrix(&self) -> DMat4 {
        let rotation = DMat4::from_rotation_x(-self.pitch) * DMat4::from_rotation_y(-self.yaw);
        DMat4::from_translation(DVec3::new(0.0, 0.0, -CONTROL_RADIUS)) * rotation
    }
}

use crate::constants::CAMERA_CHANGE_THRESHOLD;
use glam::DMat4;

/// Frobenius norm of `a - b`.
pub fn frobenius_distance(a: &DMat4, b: &DMat4) -> f64 {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Everything besides the camera transform that can force a redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateInputs {
    pub compile_dirty: bool,
    pub moving_parts: bool,
    pub surface_invalidated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Skip,
}

impl GateDecision {
    #[inline]
    pub fn should_render(self) -> bool {
        matches!(self, GateDecision::Render)
    }
}

/// Decides per tick whether a redraw is worth it.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderGate {
    last: DMat4,
}

impl Default for RenderGate {
    fn default() -> Self {
        Self {
            last: DMat4::IDENTITY,
        }
    }
}

impl RenderGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform used by the previous successful render.
    pub fn last_rendered(&self) -> &DMat4 {
        &self.last
    }

    /// Pure: evaluating twice with the same inputs gives the same answer.
    pub fn evaluate(&self, inputs: GateInputs, camera: &DMat4) -> GateDecision {
        let camera_moved = !(frobenius_distance(camera, &self.last) <= CAMERA_CHANGE_THRESHOLD);
        if inputs.compile_dirty || inputs.moving_parts || inputs.surface_invalidated || camera_moved {
            GateDecision::Render
        } else {
            GateDecision::Skip
        }
    }

    /// Call after a successful draw.
    pub fn record(&mut self, camera: &DMat4) {
        self.last = *camera;
    }
}

//! Reconciles orbit-control input with the observer orientation.
//!
//! The controls produce a world-to-camera transform in a y-up space while the
//! renderer works z-up, so the rotation rows are read back as columns with their
//! y and z components swapped.

use crate::observer::{Kinematics, Observer};
use crate::params::{ObserverMode, ParameterStore};
use glam::{DMat3, DMat4, DVec3};

/// Camera basis encoded in the control transform, in renderer coordinates.
pub fn control_rotation(control: &DMat4) -> DMat3 {
    let m = control.to_cols_array();
    let row = |i: usize| DVec3::new(m[i], m[8 + i], m[4 + i]);
    DMat3::from_cols(row(0), row(1), row(2))
}

/// Gram-Schmidt on the columns, keeping the handedness of the input.
pub fn orthonormalize(m: DMat3) -> Option<DMat3> {
    let x = m.x_axis.try_normalize()?;
    let y = (m.y_axis - x * x.dot(m.y_axis)).try_normalize()?;
    let z = (m.z_axis - x * x.dot(m.z_axis) - y * y.dot(m.z_axis)).try_normalize()?;
    Some(DMat3::from_cols(x, y, z))
}

/// Applies the control transform to the observer in either observer mode.
#[derive(Clone, Debug)]
pub struct CameraFrameSynchronizer {
    mode: ObserverMode,
}

impl Default for CameraFrameSynchronizer {
    fn default() -> Self {
        Self {
            mode: ObserverMode::Orbiting,
        }
    }
}

impl CameraFrameSynchronizer {
    pub fn new(mode: ObserverMode) -> Self {
        Self { mode }
    }

    /// Mode applied by the most recent update.
    pub fn mode(&self) -> ObserverMode {
        self.mode
    }

    /// Recompute orientation (and, when stationary, position) from `control`.
    ///
    /// A mode change since the previous call is picked up here, from the same
    /// control transform, so switching modes never jumps the view.
    pub fn update(&mut self, observer: &mut Observer, control: &DMat4, params: &ParameterStore) {
        let mode = params.observer_mode();
        if mode != self.mode {
            log::info!("[camera] observer mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }

        let rotation = control_rotation(control);
        match mode {
            ObserverMode::Orbiting => {
                let composed = observer.orbital_frame() * rotation;
                match orthonormalize(composed) {
                    Some(orientation) => observer.orientation = orientation,
                    None => log::debug!("[camera] degenerate composed frame; keeping orientation"),
                }
            }
            ObserverMode::Stationary => {
                match orthonormalize(rotation) {
                    Some(orientation) => observer.orientation = orientation,
                    None => log::debug!("[camera] degenerate control frame; keeping orientation"),
                }
                let forward = observer.orientation.z_axis;
                observer.position = -forward * params.observer().distance;
                observer.velocity = DVec3::ZERO;
            }
        }
    }
}

//! GPU-facing parameter block.

use crate::observer::Observer;
use crate::params::ParameterStore;
use bytemuck::{Pod, Zeroable};
use glam::DVec3;

/// Uniform block consumed by the fragment program.
///
/// Every vector is padded to a vec4 so the layout matches WGSL uniform rules
/// without per-field alignment attributes. Keep in sync with `struct Scene` in
/// the shader templates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub cam_pos: [f32; 4],
    pub cam_vel: [f32; 4],
    pub cam_x: [f32; 4],
    pub cam_y: [f32; 4],
    pub cam_z: [f32; 4],
    pub resolution: [f32; 2],
    pub time: f32,
    pub planet_distance: f32,
    pub planet_radius: f32,
    pub _pad: [f32; 3],
}

impl SceneUniforms {
    pub const SIZE: usize = std::mem::size_of::<SceneUniforms>();
}

#[inline]
fn vec4(v: DVec3) -> [f32; 4] {
    let v = v.as_vec3();
    [v.x, v.y, v.z, 0.0]
}

/// Copies observer and parameter state into [`SceneUniforms`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformBridge;

impl UniformBridge {
    pub fn push(
        observer: &Observer,
        params: &ParameterStore,
        resolution: [u32; 2],
        out: &mut SceneUniforms,
    ) {
        out.cam_pos = vec4(observer.position);
        out.cam_vel = vec4(observer.velocity);
        out.cam_x = vec4(observer.orientation.x_axis);
        out.cam_y = vec4(observer.orientation.y_axis);
        out.cam_z = vec4(observer.orientation.z_axis);
        out.resolution = [resolution[0] as f32, resolution[1] as f32];
        out.time = observer.time() as f32;
        out.planet_distance = params.planet().distance as f32;
        out.planet_radius = params.planet().radius as f32;
    }
}

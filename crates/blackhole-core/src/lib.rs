//! Observer physics and render synchronization for a relativistic black hole
//! visualizer.
//!
//! Nothing in this crate touches a window or a GPU. Front-ends own a
//! [`Session`], feed it [`Command`]s and an orbit-control transform, and call
//! [`Session::tick`] once per display frame with something implementing
//! [`Renderer`].

pub mod assets;
pub mod camera;
pub mod constants;
pub mod controls;
pub mod error;
pub mod gate;
pub mod keymap;
pub mod observer;
pub mod params;
pub mod renderer;
pub mod session;
pub mod shader;
pub mod template;
pub mod uniforms;

pub use assets::{AssetGate, TextureFilter, TextureKind, TextureSet};
pub use camera::CameraFrameSynchronizer;
pub use controls::OrbitControls;
pub use error::{AssetError, CompileError, RenderError, SessionError, TemplateError};
pub use gate::{GateDecision, GateInputs, RenderGate};
pub use keymap::{action_for_key, KeyAction};
pub use observer::{Kinematics, Observer};
pub use params::{Effect, ObserverMode, ParameterStore, Quality};
pub use renderer::Renderer;
pub use session::{Command, Session, TickOutcome};
pub use shader::{CompileOutcome, ShaderCompiler, FALLBACK_FRAGMENT_WGSL};
pub use template::{Mustache, TemplateContext, TemplateEngine, TemplateValue};
pub use uniforms::{SceneUniforms, UniformBridge};

use crate::error::{CompileError, RenderError};
use crate::uniforms::SceneUniforms;

/// The GPU side as the session sees it.
///
/// `compile` must leave the previously installed program in place when it
/// fails, so the session can keep drawing with it.
pub trait Renderer {
    fn compile(&mut self, fragment_source: &str) -> Result<(), CompileError>;
    fn draw(&mut self, uniforms: &SceneUniforms) -> Result<(), RenderError>;
}

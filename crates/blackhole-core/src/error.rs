//! Error types for the core crate.
//!
//! Physical-domain faults are not errors: the integrator clamps them and keeps
//! going. Everything here is something a caller can act on.

use thiserror::Error;

/// Problems found while rendering a shader template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unterminated tag starting at byte {0}")]
    UnterminatedTag(usize),
    #[error("empty tag at byte {0}")]
    EmptyTag(usize),
    #[error("unknown template key `{0}`")]
    UnknownKey(String),
    #[error("section `{0}` is never closed")]
    UnclosedSection(String),
    #[error("closing tag `{found}` does not match open section `{expected}`")]
    MismatchedClose { expected: String, found: String },
    #[error("closing tag `{0}` without an open section")]
    UnexpectedClose(String),
    #[error("partial or delimiter tag at byte {0} is not supported")]
    UnsupportedTag(usize),
    #[error("`{0}` is used both as a value and as a section")]
    MixedUsage(String),
    #[error("mustache: {0}")]
    Engine(String),
}

/// Failure to turn the current parameters into a usable program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("template: {0}")]
    Template(#[from] TemplateError),
    #[error("program rejected by renderer: {0}")]
    Rejected(String),
}

/// Failure reported by the renderer while drawing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("output surface lost or outdated")]
    SurfaceLost,
    #[error("renderer out of memory")]
    OutOfMemory,
    #[error("renderer backend: {0}")]
    Backend(String),
}

/// Errors returned from a session tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Startup asset problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("asset `{name}` failed to load: {reason}")]
    Load { name: String, reason: String },
    #[error("asset gate is missing: {0}")]
    Incomplete(String),
}

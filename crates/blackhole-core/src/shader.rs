//! Regenerates the fragment program whenever compile-affecting parameters change.

use crate::error::CompileError;
use crate::params::ParameterStore;
use crate::renderer::Renderer;
use crate::template::{Mustache, TemplateContext, TemplateEngine};

/// Fragment program used when the ray tracer template cannot be loaded.
pub const FALLBACK_FRAGMENT_WGSL: &str = include_str!("../shaders/fallback.wgsl");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompileOutcome {
    /// A new program was installed and the dirty flag cleared.
    Compiled,
    /// Nothing to do; the store was clean.
    UpToDate,
    /// This parameter combination already failed; not resubmitted.
    PreviouslyRejected,
}

pub struct ShaderCompiler<E: TemplateEngine = Mustache> {
    template: String,
    engine: E,
    rejected: Option<TemplateContext>,
    compiles: u64,
}

impl ShaderCompiler<Mustache> {
    pub fn new(template: impl Into<String>) -> Self {
        Self::with_engine(template, Mustache)
    }
}

impl<E: TemplateEngine> ShaderCompiler<E> {
    pub fn with_engine(template: impl Into<String>, engine: E) -> Self {
        Self {
            template: template.into(),
            engine,
            rejected: None,
            compiles: 0,
        }
    }

    /// True when the next `compile` would submit a program: the store is
    /// dirty and its parameters have not already been rejected.
    pub fn is_pending(&self, params: &ParameterStore) -> bool {
        params.is_dirty() && self.rejected.as_ref() != Some(&params.template_context())
    }

    /// Number of programs successfully installed.
    pub fn compile_count(&self) -> u64 {
        self.compiles
    }

    /// Program text for the current parameters without submitting it.
    pub fn render(&self, params: &ParameterStore) -> Result<String, CompileError> {
        Ok(self.engine.render(&self.template, &params.template_context())?)
    }

    /// Recompile if the store is dirty.
    ///
    /// On failure the renderer keeps its previous program and the store stays
    /// dirty. The error is returned once; later calls with the same parameters
    /// report `PreviouslyRejected` until something compile-affecting changes.
    pub fn compile<R: Renderer + ?Sized>(
        &mut self,
        params: &mut ParameterStore,
        renderer: &mut R,
    ) -> Result<CompileOutcome, CompileError> {
        if !params.is_dirty() {
            return Ok(CompileOutcome::UpToDate);
        }
        let ctx = params.template_context();
        if self.rejected.as_ref() == Some(&ctx) {
            return Ok(CompileOutcome::PreviouslyRejected);
        }

        let result = self
            .engine
            .render(&self.template, &ctx)
            .map_err(CompileError::from)
            .and_then(|source| renderer.compile(&source));

        match result {
            Ok(()) => {
                self.rejected = None;
                self.compiles += 1;
                params.mark_clean();
                log::info!(
                    "[shader] compiled program #{} (quality {})",
                    self.compiles,
                    params.quality().name()
                );
                Ok(CompileOutcome::Compiled)
            }
            Err(err) => {
                log::warn!("[shader] compile failed, keeping previous program: {err}");
                self.rejected = Some(ctx);
                Err(err)
            }
        }
    }

    /// Allow a previously rejected parameter combination to be tried again.
    pub fn forget_failure(&mut self) {
        self.rejected = None;
    }
}

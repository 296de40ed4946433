//! Pipeline orchestrator.

use blobgen_ir::Struct;
use eyre::Result;
use tracing::debug;

use super::{
    CompilationContext, Phase, PhaseInfo,
    phases::{CompatPhase, LayoutPhase, ValidatePhase},
};
use crate::GenerateOptions;

/// Runs the built-in phases (validate, compat, layout) followed by any extra
/// phases added with [`Pipeline::phase`].
///
/// # Example
///
/// ```
/// use blobgen_codegen::{GenerateOptions, pipeline::Pipeline};
/// use blobgen_ir::{Field, Primitive, Struct};
///
/// let settings = Struct::top_level("Settings", vec![Field::new("zoom", Primitive::F32)]);
/// let ctx = Pipeline::new()
///     .run(vec![settings], GenerateOptions::default())
///     .unwrap();
///
/// assert!(!ctx.has_errors());
/// assert_eq!(ctx.layouts[0].size, 8);
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Descriptions of every phase, built-in first.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        Self::builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|p| p.info())
            .collect()
    }

    fn builtin_phases() -> Vec<Box<dyn Phase>> {
        vec![
            Box::new(ValidatePhase::new()),
            Box::new(CompatPhase),
            Box::new(LayoutPhase),
        ]
    }

    /// Run every phase over `structs`.
    ///
    /// The returned context carries all diagnostics; callers decide whether
    /// errors among them are fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails to run.
    pub fn run(&self, structs: Vec<Struct>, options: GenerateOptions) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(structs, options);

        let builtin = Self::builtin_phases();
        for phase in builtin.iter().chain(self.phases.iter()) {
            debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

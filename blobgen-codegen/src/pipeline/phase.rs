//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the checking pipeline.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints over the structs
/// - `CompatPhase` - checks consecutive versions, when enabled
/// - `LayoutPhase` - computes sizes and offsets
pub trait Phase: Send + Sync {
    /// The name of this phase, used in diagnostics.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error only if the phase cannot run at all. Problems with
    /// the structs are recorded as diagnostics.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

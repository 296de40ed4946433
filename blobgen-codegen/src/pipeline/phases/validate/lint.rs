//! Lint trait for struct validation.

use blobgen_ir::Struct;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over the top-level structs of one generation run.
pub trait Lint: Send + Sync {
    /// The name of this lint, used as the diagnostic code.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the structs and add any diagnostics.
    fn check(&self, structs: &[Struct], diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

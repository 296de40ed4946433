//! Validate phase - runs lints on the structs.

mod lint;
pub mod lints;

use eyre::Result;
pub use lint::{Lint, LintInfo};
pub use lints::{DuplicateStructLint, EmptyStructLint, IdentifierLint, VersionFieldLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the structs using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(VersionFieldLint),
                Box::new(IdentifierLint),
                Box::new(DuplicateStructLint),
                Box::new(EmptyStructLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check struct integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.structs, &mut ctx.diagnostics);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use blobgen_ir::{Field, Primitive, Struct};

    use super::*;
    use crate::{GenerateOptions, pipeline::Diagnostic};

    fn context(structs: Vec<Struct>) -> CompilationContext {
        CompilationContext::new(structs, GenerateOptions::default())
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            ["version-field", "identifier", "duplicate-struct", "empty-struct"]
        );
    }

    #[test]
    fn test_custom_lint_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _structs: &[Struct], diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("validate", "forced error"));
            }
        }

        let mut ctx = context(Vec::new());
        ValidatePhase::empty()
            .with_lint(AlwaysErrorLint)
            .run(&mut ctx)
            .unwrap();

        assert!(ctx.has_errors());
    }

    #[test]
    fn test_clean_structs() {
        let mut ctx = context(vec![Struct::top_level(
            "Settings",
            vec![Field::new("zoom", Primitive::F32)],
        )]);
        ValidatePhase::new().run(&mut ctx).unwrap();

        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_warnings_only() {
        let mut ctx = context(vec![Struct::top_level(
            "Settings",
            vec![Field::new("reserved", Struct::named("Reserved"))],
        )]);
        ValidatePhase::new().run(&mut ctx).unwrap();

        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }
}

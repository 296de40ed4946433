//! Header generation: checking pipeline followed by emission.

use blobgen_ir::Struct;
use eyre::Result;
use thiserror::Error;
use tracing::debug;

use crate::{
    emit::{EmitOptions, emit_all_with},
    pipeline::{CompilationContext, Diagnostic, Pipeline},
};

/// Optional checks, all off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Emit `STATIC_ASSERT`s pinning field offsets and struct sizes.
    pub verify_layout: bool,
    /// Require each top-level struct to only append to the one before it.
    pub check_compat: bool,
}

impl GenerateOptions {
    fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            verify_layout: self.verify_layout,
        }
    }
}

/// Generation refused because the pipeline reported errors.
#[derive(Debug, Error)]
#[error("{} error(s) in settings structs", .diagnostics.len())]
pub struct Rejected {
    pub diagnostics: Vec<Diagnostic>,
}

/// A generated header and the non-fatal diagnostics found on the way.
#[derive(Debug)]
pub struct Generated {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Generates one header from a list of top-level settings structs.
///
/// # Example
///
/// ```
/// use blobgen_codegen::Generator;
/// use blobgen_ir::{Field, Primitive, Struct};
///
/// let v1 = Struct::top_level("Settings_1_0", vec![Field::new("zoom", Primitive::F32)]);
/// let generated = Generator::new(vec![v1]).generate().unwrap();
///
/// assert!(generated.text.contains("struct Settings_1_0 {"));
/// ```
pub struct Generator {
    structs: Vec<Struct>,
    options: GenerateOptions,
}

impl Generator {
    pub fn new(structs: Vec<Struct>) -> Self {
        Self {
            structs,
            options: GenerateOptions::default(),
        }
    }

    pub fn options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn structs(&self) -> &[Struct] {
        &self.structs
    }

    /// Run the checking pipeline without emitting anything.
    pub fn check(&self) -> Result<CompilationContext> {
        Pipeline::new().run(self.structs.clone(), self.options)
    }

    /// Check, then emit. Any error diagnostic aborts with [`Rejected`] and
    /// no text.
    pub fn generate(&self) -> Result<Generated> {
        let ctx = self.check()?;
        if ctx.has_errors() {
            let diagnostics: Vec<Diagnostic> = ctx.errors().cloned().collect();
            debug!(errors = diagnostics.len(), "generation rejected");
            return Err(Rejected { diagnostics }.into());
        }

        debug!(warnings = ctx.warning_count(), "generation accepted");

        let text = emit_all_with(&ctx.structs, &self.options.emit_options())?;
        Ok(Generated {
            text,
            diagnostics: ctx.diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use blobgen_ir::{Field, Primitive};

    use super::*;

    fn v1() -> Struct {
        Struct::top_level("Settings_1", vec![Field::new("zoom", Primitive::F32)])
    }

    #[test]
    fn test_generate_default() {
        let generated = Generator::new(vec![v1()]).generate().unwrap();

        assert!(generated.text.contains("struct Settings_1 {"));
        assert!(!generated.text.contains("offsetof"));
        assert!(generated.diagnostics.iter().all(|d| !d.severity.is_error()));
    }

    #[test]
    fn test_generate_rejects_schema_error() {
        let bad = Struct::named("Bad").field("zoom", Primitive::F32);
        let err = Generator::new(vec![bad]).generate().unwrap_err();
        let rejected = err.downcast_ref::<Rejected>().unwrap();

        assert_eq!(rejected.diagnostics.len(), 1);
        assert_eq!(rejected.diagnostics[0].code, Some("version-field"));
    }

    #[test]
    fn test_compat_only_when_enabled() {
        let v2 = Struct::top_level("Settings_2", vec![]);

        assert!(Generator::new(vec![v1(), v2.clone()]).generate().is_ok());

        let options = GenerateOptions {
            check_compat: true,
            ..Default::default()
        };
        let err = Generator::new(vec![v1(), v2])
            .options(options)
            .generate()
            .unwrap_err();
        assert!(err.downcast_ref::<Rejected>().is_some());
    }

    #[test]
    fn test_verify_layout_option() {
        let options = GenerateOptions {
            verify_layout: true,
            ..Default::default()
        };
        let generated = Generator::new(vec![v1()]).options(options).generate().unwrap();

        assert!(generated.text.contains("STATIC_ASSERT(8 == sizeof(Settings_1), Settings_1_size);"));
    }
}

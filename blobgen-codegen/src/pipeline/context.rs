//! State passed through pipeline phases.

use blobgen_ir::Struct;

use super::diagnostic::{Diagnostic, Severity};
use crate::{GenerateOptions, layout::StructLayout};

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// Top-level structs, in output order.
    pub structs: Vec<Struct>,
    /// Which optional checks are enabled.
    pub options: GenerateOptions,
    /// Layout of each top-level struct (populated by `LayoutPhase`).
    pub layouts: Vec<StructLayout>,
    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(structs: Vec<Struct>, options: GenerateOptions) -> Self {
        Self {
            structs,
            options,
            layouts: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Error diagnostics only.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }
}

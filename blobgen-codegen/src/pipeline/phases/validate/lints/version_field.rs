//! Lint for the mandatory `version: u32` first field.

use blobgen_ir::{Struct, validate_top_level};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on top-level structs not starting with `version: u32`.
pub struct VersionFieldLint;

impl Lint for VersionFieldLint {
    fn name(&self) -> &'static str {
        "version-field"
    }

    fn description(&self) -> &'static str {
        "Check that top-level structs start with a u32 'version' field"
    }

    fn check(&self, structs: &[Struct], diagnostics: &mut Vec<Diagnostic>) {
        for s in structs {
            if let Err(err) = validate_top_level(s) {
                diagnostics.push(
                    Diagnostic::error("validate", err.to_string())
                        .code(self.name())
                        .at(s.name()),
                );
            }
        }
    }
}

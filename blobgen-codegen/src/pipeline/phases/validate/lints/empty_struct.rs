//! Lint for structs without fields.

use std::collections::HashSet;

use blobgen_ir::Struct;

use super::super::Lint;
use crate::{emit::emission_order, pipeline::Diagnostic};

/// Lint that warns about structs that declare no fields.
pub struct EmptyStructLint;

impl Lint for EmptyStructLint {
    fn name(&self) -> &'static str {
        "empty-struct"
    }

    fn description(&self) -> &'static str {
        "Warn about structs without fields"
    }

    fn check(&self, structs: &[Struct], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        for s in emission_order(structs) {
            if s.is_empty() && seen.insert(s.name()) {
                diagnostics.push(
                    Diagnostic::warning("validate", format!("struct '{}' has no fields", s.name()))
                        .code(self.name())
                        .at(s.name()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blobgen_ir::Field;

    use super::*;

    #[test]
    fn test_nested_empty_struct_reported_once() {
        let s = Struct::top_level(
            "Settings",
            vec![
                Field::new("a", Struct::named("Reserved")),
                Field::new("b", Struct::named("Reserved")),
            ],
        );
        let mut diagnostics = Vec::new();
        EmptyStructLint.check(&[s], &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].message, "struct 'Reserved' has no fields");
    }
}

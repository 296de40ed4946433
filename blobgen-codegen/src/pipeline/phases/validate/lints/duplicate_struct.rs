//! Lint for struct names declared more than once.
//!
//! The emitter never deduplicates, so a nested struct referenced from two
//! places is declared twice in the header. Identical repeats are reported as
//! warnings; two different definitions sharing a name are errors.

use blobgen_ir::Struct;
use indexmap::IndexMap;

use super::super::Lint;
use crate::{emit::emission_order, pipeline::Diagnostic};

/// Lint that reports repeated and conflicting struct declarations.
pub struct DuplicateStructLint;

impl Lint for DuplicateStructLint {
    fn name(&self) -> &'static str {
        "duplicate-struct"
    }

    fn description(&self) -> &'static str {
        "Detect struct names declared more than once in the generated header"
    }

    fn check(&self, structs: &[Struct], diagnostics: &mut Vec<Diagnostic>) {
        let mut by_name: IndexMap<&str, Vec<&Struct>> = IndexMap::new();
        for s in emission_order(structs) {
            by_name.entry(s.name()).or_default().push(s);
        }

        for (name, decls) in by_name {
            let Some((first, rest)) = decls.split_first() else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }

            let diagnostic = if rest.iter().any(|other| other != first) {
                Diagnostic::error(
                    "validate",
                    format!("conflicting definitions of struct '{}'", name),
                )
            } else {
                Diagnostic::warning(
                    "validate",
                    format!("struct '{}' is declared {} times", name, decls.len()),
                )
            };
            diagnostics.push(diagnostic.code(self.name()).at(name));
        }
    }
}

#[cfg(test)]
mod tests {
    use blobgen_ir::{Field, Primitive};

    use super::*;

    fn rect() -> Struct {
        Struct::named("Rect")
            .field("x", Primitive::I32)
            .field("y", Primitive::I32)
    }

    #[test]
    fn test_no_duplicates() {
        let s = Struct::top_level("Settings", vec![Field::new("window", rect())]);
        let mut diagnostics = Vec::new();
        DuplicateStructLint.check(&[s], &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_repeated_nested_struct_warns() {
        let v1 = Struct::top_level("Settings_1", vec![Field::new("window", rect())]);
        let v2 = Struct::extend(&v1, "Settings_2", vec![Field::new("zoom", Primitive::F32)]);
        let mut diagnostics = Vec::new();
        DuplicateStructLint.check(&[v1, v2], &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].message, "struct 'Rect' is declared 2 times");
    }

    #[test]
    fn test_conflicting_definitions_error() {
        let other_rect = Struct::named("Rect").field("w", Primitive::U16);
        let s = Struct::top_level(
            "Settings",
            vec![Field::new("window", rect()), Field::new("sidebar", other_rect)],
        );
        let mut diagnostics = Vec::new();
        DuplicateStructLint.check(&[s], &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].location.as_deref(), Some("Rect"));
    }

    #[test]
    fn test_duplicate_top_level_names() {
        let a = Struct::top_level("Settings", vec![]);
        let b = Struct::top_level("Settings", vec![Field::new("zoom", Primitive::F32)]);
        let mut diagnostics = Vec::new();
        DuplicateStructLint.check(&[a, b], &mut diagnostics);

        assert!(diagnostics[0].severity.is_error());
    }
}

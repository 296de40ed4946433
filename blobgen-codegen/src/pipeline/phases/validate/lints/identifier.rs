//! Lint for struct and field names that aren't usable C++ identifiers.

use std::collections::HashSet;

use blobgen_ir::Struct;

use super::super::Lint;
use crate::{emit::emission_order, pipeline::Diagnostic};

/// C and C++ reserved words that cannot name a struct or field.
const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char",
    "class", "const", "constexpr", "const_cast", "continue", "decltype", "default", "delete",
    "do", "double", "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false",
    "float", "for", "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace",
    "new", "noexcept", "not", "nullptr", "operator", "or", "private", "protected", "public",
    "register", "reinterpret_cast", "restrict", "return", "short", "signed", "sizeof",
    "static", "static_assert", "static_cast", "struct", "switch", "template", "this",
    "thread_local", "throw", "true", "try", "typedef", "typeid", "typename", "union",
    "unsigned", "using", "virtual", "void", "volatile", "while", "xor",
];

/// Why `name` is not a valid identifier, if it isn't.
fn identifier_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name is empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("must start with a letter or underscore"),
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("only ASCII letters, digits and underscores are allowed");
    }
    if CPP_KEYWORDS.contains(&name) {
        return Some("is a C++ reserved word");
    }
    None
}

/// Lint that errors on names the generated header could not declare.
pub struct IdentifierLint;

impl IdentifierLint {
    fn report(&self, name: &str, kind: &str, location: String, diagnostics: &mut Vec<Diagnostic>) {
        if let Some(problem) = identifier_problem(name) {
            diagnostics.push(
                Diagnostic::error("validate", format!("invalid {} name '{}': {}", kind, name, problem))
                    .code(self.name())
                    .at(location),
            );
        }
    }
}

impl Lint for IdentifierLint {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn description(&self) -> &'static str {
        "Check that struct and field names are valid C++ identifiers"
    }

    fn check(&self, structs: &[Struct], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        for s in emission_order(structs) {
            if !seen.insert(s.name()) {
                continue;
            }
            self.report(s.name(), "struct", s.name().to_string(), diagnostics);
            for field in s.fields() {
                self.report(
                    &field.name,
                    "field",
                    format!("{}.{}", s.name(), field.name),
                    diagnostics,
                );
            }
        }
    }
}

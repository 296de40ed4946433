//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints and collects diagnostics
//! - [`CompatPhase`] - checks that each version only appends fields
//! - [`LayoutPhase`] - computes top-level struct layouts

mod compat;
mod layout;
mod validate;

pub use compat::CompatPhase;
pub use layout::LayoutPhase;
pub use validate::{
    DuplicateStructLint, EmptyStructLint, IdentifierLint, Lint, LintInfo, ValidatePhase,
    VersionFieldLint,
};

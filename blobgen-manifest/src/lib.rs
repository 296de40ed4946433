//! `blobgen.toml` parsing and lowering.
//!
//! A manifest declares named structs under `[structs]` and the top-level
//! settings structs, oldest first, as `[[settings]]` entries. Lowering turns
//! the entries into [`blobgen_ir::Struct`]s ready for generation.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;
mod manifest;
mod span;

pub use error::{Error, Result, SourceContext};
pub use manifest::{FieldDef, GenerateConfig, Manifest, SettingsDef, StructDef};

/// Manifest name used when none is given.
pub const DEFAULT_FILENAME: &str = "blobgen.toml";

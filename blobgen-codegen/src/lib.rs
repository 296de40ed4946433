//! Header generation for blobgen settings structs.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented code building (`CodeBuilder`)
//! - [`emit`] - Recursive struct emission and the fixed header preamble
//! - [`layout`] - Field offsets and struct sizes, `STATIC_ASSERT` generation
//! - [`compat`] - Append-only check between consecutive settings versions
//! - [`pipeline`] - Lints and checks run before generation
//! - [`Generator`] - Pipeline plus emission in one call

pub mod builder;
pub mod compat;
pub mod emit;
mod generator;
pub mod layout;
pub mod pipeline;

pub use compat::{CompatError, check_compat};
pub use emit::{EmitOptions, HEADER, emit_all, emit_all_with, emit_struct, emit_struct_with};
pub use generator::{GenerateOptions, Generated, Generator, Rejected};
pub use layout::{StructLayout, compute_layout};

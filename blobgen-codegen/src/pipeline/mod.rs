//! Checking pipeline run before a header is generated.
//!
//! The [`Pipeline`] runs a fixed sequence of phases over the top-level
//! structs and collects [`Diagnostic`]s in a [`CompilationContext`]:
//!
//! - validate: lints (version field, identifiers, duplicate and empty structs)
//! - compat: append-only check between consecutive versions, when enabled
//! - layout: sizes and offsets of every top-level struct
//!
//! # Example
//!
//! ```ignore
//! use blobgen_codegen::pipeline::{Pipeline, Severity};
//!
//! let ctx = Pipeline::new().run(structs, options)?;
//! for diag in &ctx.diagnostics {
//!     if matches!(diag.severity, Severity::Warning) {
//!         eprintln!("{}", diag);
//!     }
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;

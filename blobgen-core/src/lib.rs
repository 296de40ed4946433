//! Core utilities for the blobgen settings layout generator.
//!
//! This crate provides the version codec used for the leading `version`
//! field of every settings struct, and generated-file writing.

mod file;
mod version;

// File operations
pub use file::{File, WriteResult};
// Version codec
pub use version::{MAX_COMPONENTS, ParseVersionError, RangeError, Version, decode, encode};

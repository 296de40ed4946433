//! Struct model for the blobgen settings layout generator.
//!
//! A settings blob is described as a tree of [`Struct`]s whose [`Field`]s are
//! either fixed-width [`Primitive`]s or other structs. Top-level structs start
//! with a `version: u32` field holding a packed version number.
//!
//! # Architecture
//!
//! ```text
//! blobgen.toml (TOML) → blobgen-manifest (parsing) → blobgen-ir (structs) → codegen
//! ```
//!
//! Descriptions are immutable once built. A new settings version is derived
//! from the previous one with [`Struct::extend`], which can only append.

mod model;
mod types;

pub use model::{
    Field, SchemaError, Struct, VERSION_FIELD, is_top_level_valid, validate_top_level,
};
pub use types::{PTR_SIZE, Primitive, TypeRef};

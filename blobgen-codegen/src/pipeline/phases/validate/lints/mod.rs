//! Built-in lints for struct validation.

mod duplicate_struct;
mod empty_struct;
mod identifier;
mod version_field;

pub use duplicate_struct::DuplicateStructLint;
pub use empty_struct::EmptyStructLint;
pub use identifier::IdentifierLint;
pub use version_field::VersionFieldLint;

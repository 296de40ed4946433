//! Struct and field descriptions.

use std::borrow::Cow;

use thiserror::Error;

use crate::{Primitive, TypeRef};

/// Name of the mandatory first field of a top-level struct.
pub const VERSION_FIELD: &str = "version";

/// A top-level struct that does not start with `version: u32`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("top-level struct '{name}' has no fields, expected a leading 'version' field")]
    MissingVersion { name: String },

    #[error("top-level struct '{name}' starts with field '{field}', expected 'version'")]
    MisnamedVersion { name: String, field: String },

    #[error("field 'version' of top-level struct '{name}' is '{ty}', expected 'uint32_t'")]
    VersionType { name: String, ty: String },
}

impl SchemaError {
    /// Name of the offending struct.
    pub fn struct_name(&self) -> &str {
        match self {
            SchemaError::MissingVersion { name }
            | SchemaError::MisnamedVersion { name, .. }
            | SchemaError::VersionType { name, .. } => name,
        }
    }
}

/// A named, typed member of a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// The leading `version: u32` field of a top-level struct.
    pub fn version() -> Self {
        Self::new(VERSION_FIELD, Primitive::U32)
    }

    /// Type token for the declaration line, e.g. `uint32_t` or `Rect`.
    pub fn declared_type_text(&self) -> Cow<'_, str> {
        self.ty.c_type()
    }

    pub fn is_nested_struct(&self) -> bool {
        self.ty.as_struct().is_some()
    }
}

/// An ordered list of fields. Field order is the memory layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    name: String,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// A struct with no fields yet, to be filled with [`Struct::field`].
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// A top-level struct: `version: u32` followed by `fields`.
    pub fn top_level(name: impl Into<String>, fields: Vec<Field>) -> Self {
        let mut all = Vec::with_capacity(fields.len() + 1);
        all.push(Field::version());
        all.extend(fields);
        Self::new(name, all)
    }

    /// Append a field (builder style).
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    /// Derive the next version of a struct: every field of `prior`, in
    /// order, followed by `additions`.
    ///
    /// ```
    /// use blobgen_ir::{Field, Primitive, Struct};
    ///
    /// let v1 = Struct::top_level("Settings_1_0", vec![Field::new("zoom", Primitive::F32)]);
    /// let v2 = Struct::extend(&v1, "Settings_1_1", vec![Field::new("tabs", Primitive::U8)]);
    ///
    /// assert_eq!(v2.fields().len(), 3);
    /// assert!(v2.starts_with(&v1));
    /// ```
    pub fn extend(prior: &Struct, name: impl Into<String>, additions: Vec<Field>) -> Self {
        let mut fields = prior.fields.clone();
        fields.extend(additions);
        Self::new(name, fields)
    }

    /// A copy with field `from` renamed to `to`; `None` when no field is
    /// called `from`.
    pub fn rename_field(&self, from: &str, to: impl Into<String>) -> Option<Self> {
        let index = self.fields.iter().position(|f| f.name == from)?;
        let mut renamed = self.clone();
        renamed.fields[index].name = to.into();
        Some(renamed)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether `prior`'s fields are exactly the leading fields of `self`.
    pub fn starts_with(&self, prior: &Struct) -> bool {
        self.fields.starts_with(&prior.fields)
    }

    /// Nested structs referenced directly by this struct, in field order.
    pub fn nested(&self) -> impl Iterator<Item = &Struct> {
        self.fields.iter().filter_map(|f| f.ty.as_struct())
    }
}

/// Check the top-level invariant: first field is `version` of type `u32`.
pub fn validate_top_level(s: &Struct) -> Result<(), SchemaError> {
    let Some(first) = s.fields.first() else {
        return Err(SchemaError::MissingVersion {
            name: s.name.clone(),
        });
    };
    if first.name != VERSION_FIELD {
        return Err(SchemaError::MisnamedVersion {
            name: s.name.clone(),
            field: first.name.clone(),
        });
    }
    if first.ty.as_primitive() != Some(&Primitive::U32) {
        return Err(SchemaError::VersionType {
            name: s.name.clone(),
            ty: first.declared_type_text().into_owned(),
        });
    }
    Ok(())
}

pub fn is_top_level_valid(s: &Struct) -> bool {
    validate_top_level(s).is_ok()
}

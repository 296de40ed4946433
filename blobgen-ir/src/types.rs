//! Fixed-width field types.

use std::{borrow::Cow, fmt, sync::Arc};

use crate::Struct;

/// Size in bytes of the `Ptr<T>` union, on every target.
pub const PTR_SIZE: usize = 8;

/// A primitive whose size is the same on every target architecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Primitive {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    /// Pointer to `pointee`, stored as an 8-byte union so 32-bit and 64-bit
    /// builds share one layout.
    Ptr(String),
}

impl Primitive {
    /// Pointer to a target-language type, e.g. `Primitive::ptr("WCHAR")`.
    pub fn ptr(pointee: impl Into<String>) -> Self {
        Primitive::Ptr(pointee.into())
    }

    /// Parse a schema type name (`u32`, `f64`, `ptr<char>`, ...).
    pub fn from_schema_name(name: &str) -> Option<Self> {
        let primitive = match name.trim() {
            "u8" => Primitive::U8,
            "u16" => Primitive::U16,
            "u32" => Primitive::U32,
            "u64" => Primitive::U64,
            "i8" => Primitive::I8,
            "i16" => Primitive::I16,
            "i32" => Primitive::I32,
            "i64" => Primitive::I64,
            "f32" => Primitive::F32,
            "f64" => Primitive::F64,
            other => {
                let pointee = other.strip_prefix("ptr<")?.strip_suffix('>')?.trim();
                if pointee.is_empty() {
                    return None;
                }
                Primitive::ptr(pointee)
            }
        };
        Some(primitive)
    }

    /// The schema type name, inverse of [`Primitive::from_schema_name`].
    pub fn schema_name(&self) -> Cow<'static, str> {
        match self {
            Primitive::U8 => "u8".into(),
            Primitive::U16 => "u16".into(),
            Primitive::U32 => "u32".into(),
            Primitive::U64 => "u64".into(),
            Primitive::I8 => "i8".into(),
            Primitive::I16 => "i16".into(),
            Primitive::I32 => "i32".into(),
            Primitive::I64 => "i64".into(),
            Primitive::F32 => "f32".into(),
            Primitive::F64 => "f64".into(),
            Primitive::Ptr(pointee) => format!("ptr<{}>", pointee).into(),
        }
    }

    /// The exact type token written into the generated header.
    pub fn c_type(&self) -> Cow<'static, str> {
        match self {
            Primitive::U8 => "uint8_t".into(),
            Primitive::U16 => "uint16_t".into(),
            Primitive::U32 => "uint32_t".into(),
            Primitive::U64 => "uint64_t".into(),
            Primitive::I8 => "int8_t".into(),
            Primitive::I16 => "int16_t".into(),
            Primitive::I32 => "int32_t".into(),
            Primitive::I64 => "int64_t".into(),
            Primitive::F32 => "float".into(),
            Primitive::F64 => "double".into(),
            Primitive::Ptr(pointee) => format!("Ptr<{}>", pointee).into(),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Primitive::U8 | Primitive::I8 => 1,
            Primitive::U16 | Primitive::I16 => 2,
            Primitive::U32 | Primitive::I32 | Primitive::F32 => 4,
            Primitive::U64 | Primitive::I64 | Primitive::F64 => 8,
            Primitive::Ptr(_) => PTR_SIZE,
        }
    }

    /// Natural alignment; equal to the size for every primitive. For `Ptr`
    /// this relies on the `alignas(8)` in the generated preamble.
    pub fn align(&self) -> usize {
        self.size()
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Primitive::I8 | Primitive::I16 | Primitive::I32 | Primitive::I64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Primitive::F32 | Primitive::F64)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.schema_name())
    }
}

/// The type of a field: a primitive, or another struct expanded in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(Primitive),
    Struct(Arc<Struct>),
}

impl TypeRef {
    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            TypeRef::Struct(nested) => Some(nested),
            TypeRef::Primitive(_) => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            TypeRef::Primitive(primitive) => Some(primitive),
            TypeRef::Struct(_) => None,
        }
    }

    /// The type token written into the generated header.
    pub fn c_type(&self) -> Cow<'_, str> {
        match self {
            TypeRef::Primitive(primitive) => primitive.c_type(),
            TypeRef::Struct(nested) => Cow::Borrowed(nested.name()),
        }
    }
}

impl From<Primitive> for TypeRef {
    fn from(primitive: Primitive) -> Self {
        TypeRef::Primitive(primitive)
    }
}

impl From<Struct> for TypeRef {
    fn from(nested: Struct) -> Self {
        TypeRef::Struct(Arc::new(nested))
    }
}

impl From<Arc<Struct>> for TypeRef {
    fn from(nested: Arc<Struct>) -> Self {
        TypeRef::Struct(nested)
    }
}

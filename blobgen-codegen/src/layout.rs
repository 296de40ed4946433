//! Field offsets and struct sizes under natural alignment.
//!
//! Every primitive is aligned to its own size, a nested struct to its widest
//! member, and each struct is padded to a multiple of its alignment.
//!
//! `Ptr<T>` is 8-aligned on every target because the header preamble declares
//! it `alignas(8)`. 8-byte scalars (`uint64_t`, `int64_t`, `double`) are
//! 8-aligned on 64-bit ABIs and on MSVC x86, but only 4-aligned inside structs
//! under the i386 System V ABI. There the generated assertions fail to
//! compile, flagging a layout that differs from the 64-bit build.

use blobgen_ir::{Struct, TypeRef};

/// Offset and size of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: String,
    pub offset: usize,
    pub size: usize,
}

/// Computed layout of a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLayout {
    pub name: String,
    pub size: usize,
    pub align: usize,
    pub fields: Vec<FieldLayout>,
}

impl StructLayout {
    /// Bytes lost to alignment padding.
    pub fn padding(&self) -> usize {
        self.size - self.fields.iter().map(|f| f.size).sum::<usize>()
    }

    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn align_to(offset: usize, align: usize) -> usize {
    offset.div_ceil(align) * align
}

fn size_and_align(ty: &TypeRef) -> (usize, usize) {
    match ty {
        TypeRef::Primitive(primitive) => (primitive.size(), primitive.align()),
        TypeRef::Struct(nested) => {
            let layout = compute_layout(nested);
            (layout.size, layout.align)
        }
    }
}

/// Compute the layout of `s`, recursing into nested structs.
///
/// A struct without fields occupies one byte, as in C++.
pub fn compute_layout(s: &Struct) -> StructLayout {
    let mut fields = Vec::with_capacity(s.fields().len());
    let mut offset = 0;
    let mut align = 1;

    for field in s.fields() {
        let (size, field_align) = size_and_align(&field.ty);
        let field_offset = align_to(offset, field_align);
        fields.push(FieldLayout {
            name: field.name.clone(),
            offset: field_offset,
            size,
        });
        offset = field_offset + size;
        align = align.max(field_align);
    }

    let size = if fields.is_empty() {
        1
    } else {
        align_to(offset, align)
    };

    StructLayout {
        name: s.name().to_string(),
        size,
        align,
        fields,
    }
}

/// `STATIC_ASSERT` lines pinning every field offset and the total size.
pub fn static_asserts(layout: &StructLayout) -> Vec<String> {
    let mut lines: Vec<String> = layout
        .fields
        .iter()
        .map(|f| {
            format!(
                "STATIC_ASSERT({} == offsetof({}, {}), {}_{}_offset);",
                f.offset, layout.name, f.name, layout.name, f.name
            )
        })
        .collect();
    lines.push(format!(
        "STATIC_ASSERT({} == sizeof({}), {}_size);",
        layout.size, layout.name, layout.name
    ));
    lines
}

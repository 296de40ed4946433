//! Recursive emission of struct declarations.
//!
//! Nested structs are emitted depth-first at the point they are first
//! referenced, so a nested declaration always precedes its container. Nothing
//! is deduplicated: a struct referenced twice is declared twice.

use blobgen_ir::{SchemaError, Struct, validate_top_level};
use tracing::{debug, trace};

use crate::{
    builder::CodeBuilder,
    layout::{compute_layout, static_asserts},
};

/// Minimum width of the type column in field declarations.
pub const TYPE_COLUMN_WIDTH: usize = 24;

/// Preamble of every generated header: the 8-byte pointer union and
/// compile-time checks of its size and alignment. The union is aligned to 8
/// so a `Ptr` field sits at the same offset on 32-bit and 64-bit targets.
pub const HEADER: &str = "\
// DON'T EDIT MANUALLY !!!!
// auto-generated by blobgen !!!!

template <typename T>
union alignas(8) Ptr {
    T *       ptr;
    char      b[8];
};

STATIC_ASSERT(8 == sizeof(Ptr<int>), ptr_is_8_bytes);
STATIC_ASSERT(8 == alignof(Ptr<int>), ptr_is_8_aligned);

";

/// Optional passes layered on top of plain emission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Follow each declaration with `STATIC_ASSERT`s on field offsets and
    /// struct size.
    pub verify_layout: bool,
}

/// One field declaration line, without indentation.
pub fn field_line(type_text: &str, name: &str) -> String {
    format!("{:<width$} {};", type_text, name, width = TYPE_COLUMN_WIDTH)
}

/// Emit `s` and, first, every struct it references.
///
/// Declarations are pushed to `out` in depth-first encounter order. When
/// `is_top_level` is set the `version: u32` rule is checked first and nothing
/// is pushed on failure.
pub fn emit_struct(s: &Struct, out: &mut Vec<String>, is_top_level: bool) -> Result<(), SchemaError> {
    emit_struct_with(s, out, is_top_level, &EmitOptions::default())
}

pub fn emit_struct_with(
    s: &Struct,
    out: &mut Vec<String>,
    is_top_level: bool,
    options: &EmitOptions,
) -> Result<(), SchemaError> {
    if is_top_level {
        validate_top_level(s)?;
    }
    push_struct(s, out, options);
    Ok(())
}

fn push_struct(s: &Struct, out: &mut Vec<String>, options: &EmitOptions) {
    trace!(struct_name = s.name(), fields = s.fields().len(), "emitting struct");

    let mut builder = CodeBuilder::new();
    builder.push_line(&format!("struct {} {{", s.name())).push_indent();
    for field in s.fields() {
        builder.push_line(&field_line(&field.declared_type_text(), &field.name));
        if let Some(nested) = field.ty.as_struct() {
            push_struct(nested, out, options);
        }
    }
    builder.push_dedent().push_line("};");

    if options.verify_layout {
        builder.push_lines(static_asserts(&compute_layout(s)));
    }

    out.push(builder.build());
}

/// Generate the complete header for `structs`.
///
/// Every struct is validated as top-level before anything is emitted, so a
/// schema error never yields partial output.
pub fn emit_all(structs: &[Struct]) -> Result<String, SchemaError> {
    emit_all_with(structs, &EmitOptions::default())
}

pub fn emit_all_with(structs: &[Struct], options: &EmitOptions) -> Result<String, SchemaError> {
    for s in structs {
        validate_top_level(s)?;
    }

    let mut blocks = Vec::new();
    for s in structs {
        emit_struct_with(s, &mut blocks, true, options)?;
    }
    debug!(
        top_level = structs.len(),
        declarations = blocks.len(),
        "emitted header"
    );

    let mut text = String::from(HEADER);
    text.push_str(&blocks.join("\n"));
    Ok(text)
}

/// Every struct `emit_all` would declare, in output order.
pub fn emission_order(structs: &[Struct]) -> Vec<&Struct> {
    fn visit<'a>(s: &'a Struct, order: &mut Vec<&'a Struct>) {
        for nested in s.nested() {
            visit(nested, order);
        }
        order.push(s);
    }

    let mut order = Vec::new();
    for s in structs {
        visit(s, &mut order);
    }
    order
}

use blobgen_codegen::{HEADER, emit_all, emit_struct};
use blobgen_ir::{Field, Primitive, Struct};

fn rect() -> Struct {
    Struct::named("Rect")
        .field("x", Primitive::I32)
        .field("y", Primitive::I32)
        .field("dx", Primitive::I32)
        .field("dy", Primitive::I32)
}

fn settings_v1() -> Struct {
    Struct::top_level(
        "Settings_1_0",
        vec![
            Field::new("window", rect()),
            Field::new("show_toolbar", Primitive::U8),
            Field::new("default_zoom", Primitive::F32),
        ],
    )
}

fn settings_v2() -> Struct {
    Struct::extend(
        &settings_v1(),
        "Settings_1_1",
        vec![
            Field::new("last_file", Primitive::ptr("char")),
            Field::new("tab_width", Primitive::U16),
        ],
    )
}

fn field_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .filter(|line| line.starts_with("    "))
        .collect()
}

#[test]
fn extended_struct_keeps_prior_fields_in_order() {
    let mut out = Vec::new();
    emit_struct(&settings_v1(), &mut out, true).unwrap();
    let v1_block = out.pop().unwrap();

    let mut out = Vec::new();
    emit_struct(&settings_v2(), &mut out, true).unwrap();
    let v2_block = out.pop().unwrap();

    let v1_fields = field_lines(&v1_block);
    let v2_fields = field_lines(&v2_block);

    assert_eq!(v2_fields.len(), v1_fields.len() + 2);
    assert_eq!(&v2_fields[..v1_fields.len()], &v1_fields[..]);
    assert_eq!(
        &v2_fields[v1_fields.len()..],
        [
            "    Ptr<char>                last_file;",
            "    uint16_t                 tab_width;",
        ]
    );
}

#[test]
fn nested_struct_declared_once_before_container() {
    let inner = Struct::named("Inner").field("value", Primitive::U64);
    let outer = Struct::top_level("Outer", vec![Field::new("inner", inner)]);

    let text = emit_all(&[outer]).unwrap();

    assert_eq!(text.matches("struct Inner {").count(), 1);
    assert_eq!(text.matches("struct Outer {").count(), 1);

    let inner_at = text.find("struct Inner {").unwrap();
    let outer_close = text.rfind("};").unwrap();
    assert!(inner_at < text.find("struct Outer {").unwrap());
    assert!(inner_at < outer_close);
}

#[test]
fn nested_structs_follow_depth_first_order() {
    let c = Struct::named("C").field("value", Primitive::U8);
    let b = Struct::named("B").field("c", c);
    let a = Struct::top_level("A", vec![Field::new("b", b)]);

    let text = emit_all(&[a]).unwrap();

    let positions: Vec<usize> = ["struct C {", "struct B {", "struct A {"]
        .iter()
        .map(|decl| text.find(decl).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(text.matches("struct ").count(), 3);
}

#[test]
fn emit_all_is_idempotent() {
    let structs = [settings_v1(), settings_v2()];
    assert_eq!(emit_all(&structs).unwrap(), emit_all(&structs).unwrap());
}

#[test]
fn invalid_top_level_produces_no_text() {
    let bad = Struct::named("Settings").field("version", Primitive::U16);
    assert!(emit_all(&[settings_v1(), bad]).is_err());
}

#[test]
fn full_header() {
    let text = emit_all(&[settings_v1(), settings_v2()]).unwrap();

    assert!(text.starts_with(HEADER));
    insta::assert_snapshot!(text, @r"
// DON'T EDIT MANUALLY !!!!
// auto-generated by blobgen !!!!

template <typename T>
union alignas(8) Ptr {
    T *       ptr;
    char      b[8];
};

STATIC_ASSERT(8 == sizeof(Ptr<int>), ptr_is_8_bytes);
STATIC_ASSERT(8 == alignof(Ptr<int>), ptr_is_8_aligned);

struct Rect {
    int32_t                  x;
    int32_t                  y;
    int32_t                  dx;
    int32_t                  dy;
};

struct Settings_1_0 {
    uint32_t                 version;
    Rect                     window;
    uint8_t                  show_toolbar;
    float                    default_zoom;
};

struct Rect {
    int32_t                  x;
    int32_t                  y;
    int32_t                  dx;
    int32_t                  dy;
};

struct Settings_1_1 {
    uint32_t                 version;
    Rect                     window;
    uint8_t                  show_toolbar;
    float                    default_zoom;
    Ptr<char>                last_file;
    uint16_t                 tab_width;
};
");
}

//! Cross-version compatibility check.
//!
//! The struct for version N must keep every field of version N-1 at the same
//! position with the same type; new fields may only follow them. Field names
//! may change. Nested structs are compared by shape, so renaming a nested
//! struct type is allowed while changing its members is not.

use blobgen_ir::{Struct, TypeRef};
use thiserror::Error;

/// A violation of the append-only rule between two consecutive versions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompatError {
    #[error(
        "'{next}' has {next_len} fields but '{prev}' has {prev_len}; fields cannot be removed"
    )]
    FieldRemoved {
        prev: String,
        next: String,
        prev_len: usize,
        next_len: usize,
    },

    #[error(
        "field {index} ('{field}') of '{next}' has type '{next_ty}' but was '{prev_ty}' in '{prev}'"
    )]
    TypeChanged {
        prev: String,
        next: String,
        index: usize,
        field: String,
        prev_ty: String,
        next_ty: String,
    },
}

/// Whether two field types have identical binary layout.
fn same_shape(a: &TypeRef, b: &TypeRef) -> bool {
    match (a, b) {
        (TypeRef::Primitive(a), TypeRef::Primitive(b)) => a == b,
        (TypeRef::Struct(a), TypeRef::Struct(b)) => {
            a.fields().len() == b.fields().len()
                && a
                    .fields()
                    .iter()
                    .zip(b.fields())
                    .all(|(fa, fb)| same_shape(&fa.ty, &fb.ty))
        }
        _ => false,
    }
}

/// Verify that `next` is a prefix-preserving superset of `prev`.
pub fn check_compat(prev: &Struct, next: &Struct) -> Result<(), CompatError> {
    if next.fields().len() < prev.fields().len() {
        return Err(CompatError::FieldRemoved {
            prev: prev.name().to_string(),
            next: next.name().to_string(),
            prev_len: prev.fields().len(),
            next_len: next.fields().len(),
        });
    }

    for (index, (old, new)) in prev.fields().iter().zip(next.fields()).enumerate() {
        if !same_shape(&old.ty, &new.ty) {
            return Err(CompatError::TypeChanged {
                prev: prev.name().to_string(),
                next: next.name().to_string(),
                index,
                field: new.name.clone(),
                prev_ty: old.declared_type_text().into_owned(),
                next_ty: new.declared_type_text().into_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use blobgen_ir::{Field, Primitive};

    use super::*;

    fn rect(name: &str) -> Struct {
        Struct::named(name)
            .field("x", Primitive::I32)
            .field("y", Primitive::I32)
    }

    fn v1() -> Struct {
        Struct::top_level(
            "Settings_1",
            vec![
                Field::new("zoom", Primitive::F32),
                Field::new("window", rect("Rect")),
            ],
        )
    }

    #[test]
    fn test_extension_is_compatible() {
        let v2 = Struct::extend(&v1(), "Settings_2", vec![Field::new("tabs", Primitive::U8)]);
        assert_eq!(check_compat(&v1(), &v2), Ok(()));
        assert_eq!(check_compat(&v1(), &v1()), Ok(()));
    }

    #[test]
    fn test_rename_is_compatible() {
        let v2 = v1().rename_field("zoom", "default_zoom").unwrap();
        assert!(check_compat(&v1(), &v2).is_ok());

        let v2 = Struct::top_level(
            "Settings_2",
            vec![
                Field::new("zoom", Primitive::F32),
                Field::new("window", rect("WindowRect")),
            ],
        );
        assert!(check_compat(&v1(), &v2).is_ok());
    }

    #[test]
    fn test_removal_is_rejected() {
        let v2 = Struct::top_level("Settings_2", vec![Field::new("zoom", Primitive::F32)]);
        let err = check_compat(&v1(), &v2).unwrap_err();
        assert!(matches!(
            err,
            CompatError::FieldRemoved {
                prev_len: 3,
                next_len: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_type_change_is_rejected() {
        let v2 = Struct::top_level(
            "Settings_2",
            vec![
                Field::new("zoom", Primitive::F64),
                Field::new("window", rect("Rect")),
            ],
        );
        let err = check_compat(&v1(), &v2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "field 1 ('zoom') of 'Settings_2' has type 'double' but was 'float' in 'Settings_1'"
        );
    }

    #[test]
    fn test_nested_member_change_is_rejected() {
        let wider = Struct::named("Rect")
            .field("x", Primitive::I32)
            .field("y", Primitive::I32)
            .field("dx", Primitive::I32);
        let v2 = Struct::top_level(
            "Settings_2",
            vec![
                Field::new("zoom", Primitive::F32),
                Field::new("window", wider),
            ],
        );
        assert!(matches!(
            check_compat(&v1(), &v2),
            Err(CompatError::TypeChanged { index: 2, .. })
        ));
    }
}

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source text and filename of a manifest, kept for error reporting.
///
/// Lowering happens after deserialization, so the manifest holds on to its
/// source to point errors at the offending entry.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::new("", crate::DEFAULT_FILENAME)
    }
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Span of the quoted string `value` in the source, if present.
    pub fn find_quoted(&self, value: &str) -> Option<SourceSpan> {
        crate::span::find_quoted_span(&self.src, value)
    }

    /// Span of the raw `key` value written in the `[[settings]]` entry `name`.
    pub fn find_settings_value(&self, name: &str, key: &str) -> Option<SourceSpan> {
        crate::span::find_entry_value_span(&self.src, "settings", name, key)
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn unknown_type_error(&self, owner: &str, field: &str, ty: &str) -> Box<Error> {
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span: self.find_quoted(ty),
            owner: owner.to_string(),
            field: field.to_string(),
            ty: ty.to_string(),
        })
    }

    pub fn unknown_extends_error(&self, name: &str, extends: &str) -> Box<Error> {
        Box::new(Error::UnknownExtends {
            src: self.named_source(),
            span: self.find_quoted(extends),
            name: name.to_string(),
            extends: extends.to_string(),
        })
    }

    pub fn recursive_struct_error(&self, cycle: &[&str]) -> Box<Error> {
        let start = cycle.first().copied().unwrap_or_default();
        Box::new(Error::RecursiveStruct {
            src: self.named_source(),
            span: crate::span::find_table_span(&self.src, "structs", start),
            cycle: cycle.join(" -> "),
        })
    }

    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest path with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse blobgen.toml")]
    #[diagnostic(code(blobgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown type '{ty}' for field '{field}' of '{owner}'")]
    #[diagnostic(
        code(blobgen::unknown_type),
        help(
            "valid types are u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, ptr<T>, or a struct declared under [structs]"
        )
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        owner: String,
        field: String,
        ty: String,
    },

    #[error("'{name}' extends '{extends}', which is not declared before it")]
    #[diagnostic(
        code(blobgen::unknown_extends),
        help("'extends' must name an earlier [[settings]] entry")
    )]
    UnknownExtends {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an earlier settings entry")]
        span: Option<SourceSpan>,
        name: String,
        extends: String,
    },

    #[error("struct contains itself: {cycle}")]
    #[diagnostic(
        code(blobgen::recursive_struct),
        help("structs are expanded in place; use a ptr<T> field to refer to another struct")
    )]
    RecursiveStruct {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        cycle: String,
    },

    #[error("{message}")]
    #[diagnostic(code(blobgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

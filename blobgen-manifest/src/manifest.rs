use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use blobgen_core::Version;
use blobgen_ir::Struct;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{DEFAULT_FILENAME, Error, Result, SourceContext, lower::Lowering};

/// Root of `blobgen.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output location and optional checks.
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Named structs usable as field types.
    #[serde(default)]
    pub structs: IndexMap<String, StructDef>,

    /// Top-level settings structs, oldest first.
    #[serde(default)]
    pub settings: Vec<SettingsDef>,

    #[serde(skip)]
    source: SourceContext,
}

/// The `[generate]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    #[serde(default)]
    pub verify_layout: bool,
    #[serde(default)]
    pub check_compat: bool,
    /// Header path, relative to the manifest.
    pub output: Option<PathBuf>,
}

/// A `[structs.<Name>]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructDef {
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// A `[[settings]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsDef {
    pub name: String,
    /// Dotted version this struct was introduced in, e.g. `"3.1"`.
    pub version: Option<Version>,
    /// Earlier entry whose fields come first.
    pub extends: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl SettingsDef {
    /// The version packed into a `u32`, as stored in the blob's `version`
    /// field.
    pub fn packed_version(&self) -> Option<u32> {
        self.version.map(|v| v.packed())
    }
}

/// `{ name = "...", type = "..." }`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a blobgen.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a blobgen.toml from a string with a custom filename for error
    /// reporting.
    ///
    /// The manifest is lowered once here, so a manifest that parses is
    /// known to lower.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let mut manifest: Self = toml::from_str(content).map_err(|e| source.parse_error(e))?;
        manifest.source = source;
        manifest.validate()?;
        manifest.lower()?;
        Ok(manifest)
    }

    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Resolve every `[[settings]]` entry into a top-level struct, in file
    /// order.
    pub fn lower(&self) -> Result<Vec<Struct>> {
        Lowering::new(self).settings()
    }

    /// Output path resolved against the directory holding the manifest.
    pub fn output_path(&self, manifest_dir: &Path) -> Option<PathBuf> {
        self.generate.output.as_ref().map(|p| manifest_dir.join(p))
    }

    fn validate(&self) -> Result<()> {
        let mut seen = IndexMap::new();
        for (index, entry) in self.settings.iter().enumerate() {
            if let Some(first) = seen.insert(entry.name.as_str(), index) {
                return Err(self.source.validation_error_at(
                    format!(
                        "settings entry '{}' is declared twice (entries {} and {})",
                        entry.name,
                        first + 1,
                        index + 1
                    ),
                    self.source.find_quoted(&entry.name),
                ));
            }
            if self.structs.contains_key(&entry.name) {
                return Err(self.source.validation_error_at(
                    format!("'{}' is declared both under [structs] and [[settings]]", entry.name),
                    self.source.find_quoted(&entry.name),
                ));
            }
        }

        let versions: Vec<_> = self
            .settings
            .iter()
            .filter_map(|s| s.version.map(|v| (s, v)))
            .collect();
        for pair in versions.windows(2) {
            let ((prev, prev_version), (next, next_version)) = (pair[0], pair[1]);
            if next_version <= prev_version {
                return Err(self.source.validation_error_at(
                    format!(
                        "'{}' has version {} which is not newer than {} of '{}'",
                        next.name, next_version, prev_version, prev.name
                    ),
                    self.source
                        .find_settings_value(&next.name, "version")
                        .or_else(|| self.source.find_quoted(&next.name)),
                ));
            }
        }
        Ok(())
    }
}

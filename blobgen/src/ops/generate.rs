//! Generate operation - manifest to header.

use std::path::{Path, PathBuf};

use blobgen_codegen::{GenerateOptions, Generator};
use blobgen_core::File;
use blobgen_manifest::Manifest;
use eyre::Result;
use tracing::info;

use crate::reports::{Destination, GenerateReport};

/// CLI overrides layered on the manifest's `[generate]` table.
#[derive(Debug, Default)]
pub struct GenerateRequest {
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub verify_layout: bool,
    pub check_compat: bool,
}

impl GenerateRequest {
    fn options(&self, manifest: &Manifest) -> GenerateOptions {
        GenerateOptions {
            verify_layout: self.verify_layout || manifest.generate.verify_layout,
            check_compat: self.check_compat || manifest.generate.check_compat,
        }
    }

    /// `--stdout`, then `--output`, then `[generate].output` relative to the
    /// manifest, then stdout.
    fn destination(&self, manifest: &Manifest, config_path: &Path) -> Option<PathBuf> {
        if self.stdout {
            return None;
        }
        let manifest_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
        self.output
            .clone()
            .or_else(|| manifest.output_path(manifest_dir))
    }
}

/// Execute the generate operation.
///
/// Nothing is written unless generation succeeds as a whole.
pub fn generate(
    manifest: &Manifest,
    config_path: &Path,
    request: &GenerateRequest,
) -> Result<GenerateReport> {
    let structs = manifest.lower()?;
    let generated = Generator::new(structs)
        .options(request.options(manifest))
        .generate()?;

    let destination = match request.destination(manifest, config_path) {
        Some(path) => {
            let result = File::new(&path, generated.text.as_str()).write()?;
            info!(path = %path.display(), ?result, "header written");
            Destination::File { path, result }
        }
        None => Destination::Stdout(generated.text),
    };

    Ok(GenerateReport {
        settings: manifest.settings.len(),
        destination,
        diagnostics: generated.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use blobgen_codegen::Rejected;
    use blobgen_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
[generate]
output = "include/SettingsStructs.h"

[structs.Rect]
fields = [{ name = "x", type = "i32" }, { name = "y", type = "i32" }]

[[settings]]
name = "Settings_1_0"
version = "1.0"
fields = [{ name = "version", type = "u32" }, { name = "window", type = "Rect" }]

[[settings]]
name = "Settings_1_1"
version = "1.1"
extends = "Settings_1_0"
fields = [{ name = "zoom", type = "f32" }]
"#;

    fn setup(src: &str) -> (TempDir, PathBuf, Manifest) {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("blobgen.toml");
        std::fs::write(&config, src).unwrap();
        let manifest = Manifest::from_file(&config).unwrap();
        (dir, config, manifest)
    }

    #[test]
    fn test_writes_manifest_output() {
        let (dir, config, manifest) = setup(MANIFEST);

        let report = generate(&manifest, &config, &GenerateRequest::default()).unwrap();

        let path = dir.path().join("include/SettingsStructs.h");
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("struct Settings_1_1 {"));
        assert_eq!(report.settings, 2);
        assert!(matches!(
            report.destination,
            Destination::File {
                result: WriteResult::Written,
                ..
            }
        ));

        let again = generate(&manifest, &config, &GenerateRequest::default()).unwrap();
        assert!(matches!(
            again.destination,
            Destination::File {
                result: WriteResult::Unchanged,
                ..
            }
        ));
    }

    #[test]
    fn test_stdout_overrides_output() {
        let (dir, config, manifest) = setup(MANIFEST);
        let request = GenerateRequest {
            stdout: true,
            verify_layout: true,
            ..Default::default()
        };

        let report = generate(&manifest, &config, &request).unwrap();

        let Destination::Stdout(text) = report.destination else {
            panic!("expected stdout destination");
        };
        assert!(text.contains("STATIC_ASSERT(12 == sizeof(Settings_1_0), Settings_1_0_size);"));
        assert!(!dir.path().join("include").exists());
    }

    #[test]
    fn test_rejected_writes_nothing() {
        let src = r#"
[generate]
output = "SettingsStructs.h"

[[settings]]
name = "Settings"
fields = [{ name = "zoom", type = "f32" }]
"#;
        let (dir, config, manifest) = setup(src);

        let err = generate(&manifest, &config, &GenerateRequest::default()).unwrap_err();

        assert!(err.downcast_ref::<Rejected>().is_some());
        assert!(!dir.path().join("SettingsStructs.h").exists());
    }

    #[test]
    fn test_check_compat_from_flag() {
        let src = r#"
[[settings]]
name = "Settings_1"
fields = [{ name = "version", type = "u32" }, { name = "zoom", type = "f32" }]

[[settings]]
name = "Settings_2"
fields = [{ name = "version", type = "u32" }, { name = "zoom", type = "f64" }]
"#;
        let (_dir, config, manifest) = setup(src);

        assert!(generate(&manifest, &config, &GenerateRequest::default()).is_ok());

        let request = GenerateRequest {
            check_compat: true,
            ..Default::default()
        };
        assert!(generate(&manifest, &config, &request).is_err());
    }
}

//! Check operation - manifest validation.

use std::path::Path;

use blobgen_codegen::{GenerateOptions, Generator};
use blobgen_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::{CheckReport, SettingsSummary};

/// Execute the check operation.
///
/// Runs every lint plus the compatibility check between consecutive settings
/// structs, whatever the manifest's `[generate]` table says.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let structs = manifest.lower()?;
    let options = GenerateOptions {
        check_compat: true,
        ..Default::default()
    };
    let ctx = Generator::new(structs)
        .options(options)
        .check()
        .wrap_err("validation failed")?;

    let settings = manifest
        .settings
        .iter()
        .zip(&ctx.layouts)
        .map(|(entry, layout)| SettingsSummary {
            name: entry.name.clone(),
            version: entry.version.map(|v| v.to_string()),
            packed_version: entry.packed_version(),
            fields: layout.fields.len(),
            size: layout.size,
        })
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        settings,
        diagnostics: ctx.diagnostics,
    })
}

//! Check command report data structures.

use std::path::PathBuf;

use blobgen_codegen::pipeline::{Diagnostic, Severity};
use serde::Serialize;

use super::output::{Output, Report, render_diagnostics};

/// One `[[settings]]` entry as checked.
#[derive(Debug, Serialize)]
pub struct SettingsSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packed_version: Option<u32>,
    pub fields: usize,
    pub size: usize,
}

/// Report data from manifest validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub settings: Vec<SettingsSummary>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, out);
        if !self.is_valid() {
            return;
        }

        if self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
        {
            out.newline();
        }
        out.status(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        let count = self.settings.len();
        out.section(&format!(
            "{} settings struct{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for entry in &self.settings {
            let version = match (&entry.version, entry.packed_version) {
                (Some(dotted), Some(packed)) => format!(" v{} (0x{:08x})", dotted, packed),
                _ => String::new(),
            };
            out.list_item(&format!(
                "{}{}: {} fields, {} bytes",
                entry.name, version, entry.fields, entry.size
            ));
        }
    }
}

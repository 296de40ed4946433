//! Generate command report data structures.

use std::path::PathBuf;

use blobgen_codegen::pipeline::Diagnostic;
use blobgen_core::WriteResult;

use super::output::{Output, Report, render_diagnostics};

/// Where the header went.
#[derive(Debug)]
pub enum Destination {
    File { path: PathBuf, result: WriteResult },
    /// The header text, not yet printed.
    Stdout(String),
}

/// Report data from a successful generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of `[[settings]]` entries generated.
    pub settings: usize,
    pub destination: Destination,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, out);

        match &self.destination {
            Destination::Stdout(text) => out.raw(text),
            Destination::File { path, result } => {
                let status = match result {
                    WriteResult::Written => "wrote",
                    WriteResult::Unchanged => "unchanged",
                };
                out.status(&format!(
                    "{} {} ({} settings struct{})",
                    status,
                    path.display(),
                    self.settings,
                    if self.settings == 1 { "" } else { "s" }
                ));
            }
        }
    }
}

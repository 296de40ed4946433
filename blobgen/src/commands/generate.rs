use std::path::PathBuf;

use blobgen_codegen::Rejected;
use blobgen_manifest::{DEFAULT_FILENAME, Manifest};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateRequest},
    reports::{Report, TerminalOutput, render_diagnostics},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to blobgen.toml
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,

    /// Header to write (defaults to [generate].output, else stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the header to stdout even if the manifest names an output
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Add STATIC_ASSERTs for every field offset and struct size
    #[arg(long)]
    pub verify_layout: bool,

    /// Require each settings struct to only append to the previous one
    #[arg(long)]
    pub check_compat: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let request = GenerateRequest {
            output: self.output.clone(),
            stdout: self.stdout,
            verify_layout: self.verify_layout,
            check_compat: self.check_compat,
        };

        match ops::generate(&manifest, &self.config, &request) {
            Ok(report) => {
                report.render(&mut TerminalOutput::new());
                Ok(())
            }
            Err(err) => {
                if let Some(rejected) = err.downcast_ref::<Rejected>() {
                    render_diagnostics(&rejected.diagnostics, &mut TerminalOutput::new());
                    std::process::exit(1);
                }
                Err(err)
            }
        }
    }
}

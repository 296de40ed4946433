//! Compat phase - append-only check between consecutive versions.

use eyre::Result;

use crate::{
    compat::check_compat,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that compares each top-level struct with the one before it.
///
/// Does nothing unless `GenerateOptions::check_compat` is set.
pub struct CompatPhase;

impl Phase for CompatPhase {
    fn name(&self) -> &'static str {
        "compat"
    }

    fn description(&self) -> &'static str {
        "Verify each settings version only appends to the previous one"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        if !ctx.options.check_compat {
            return Ok(());
        }

        for pair in ctx.structs.windows(2) {
            if let Err(err) = check_compat(&pair[0], &pair[1]) {
                ctx.diagnostics
                    .push(Diagnostic::error(self.name(), err.to_string()).at(pair[1].name()));
            }
        }
        Ok(())
    }
}

//! Layout phase - sizes and offsets of the top-level structs.

use eyre::Result;

use crate::{
    layout::compute_layout,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that fills `CompilationContext::layouts` and reports each size.
pub struct LayoutPhase;

impl Phase for LayoutPhase {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn description(&self) -> &'static str {
        "Compute field offsets and struct sizes"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.layouts = ctx.structs.iter().map(compute_layout).collect();

        for layout in &ctx.layouts {
            let mut message = format!("'{}' is {} bytes", layout.name, layout.size);
            if layout.padding() > 0 {
                message.push_str(&format!(" ({} bytes of padding)", layout.padding()));
            }
            ctx.diagnostics
                .push(Diagnostic::info(self.name(), message).at(layout.name.as_str()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use blobgen_ir::{Field, Primitive, Struct};

    use super::*;
    use crate::GenerateOptions;

    #[test]
    fn test_reports_size_and_padding() {
        let s = Struct::top_level("Settings", vec![Field::new("flag", Primitive::U8)]);
        let mut ctx = CompilationContext::new(vec![s], GenerateOptions::default());
        LayoutPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.layouts[0].size, 8);
        assert_eq!(
            ctx.diagnostics[0].message,
            "'Settings' is 8 bytes (3 bytes of padding)"
        );
    }
}

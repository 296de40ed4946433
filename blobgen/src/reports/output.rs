//! Output trait for rendering reports.

use blobgen_codegen::pipeline::{Diagnostic, Severity};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render an indented list item.
    fn list_item(&mut self, text: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a status line.
    fn status(&mut self, msg: &str);

    /// Render text exactly as given, with no trailing newline added.
    fn raw(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output. Problems go to stderr and everything else to stdout.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn status(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn raw(&mut self, text: &str) {
        print!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Errors and warnings, each followed by its location. Info diagnostics are
/// skipped.
pub fn render_diagnostics(diagnostics: &[Diagnostic], out: &mut dyn Output) {
    for diag in diagnostics {
        let mut msg = match diag.code {
            Some(code) => format!("[{}] {}", code, diag.message),
            None => diag.message.clone(),
        };
        if let Some(loc) = &diag.location {
            msg.push_str(&format!("\n  --> {}", loc));
        }

        match diag.severity {
            Severity::Error => out.error(&msg),
            Severity::Warning => out.warning(&msg),
            Severity::Info => {}
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{testing::Recorded, *};

    #[test]
    fn test_render_diagnostics() {
        let diagnostics = vec![
            Diagnostic::error("validate", "missing version")
                .code("version-field")
                .at("Settings"),
            Diagnostic::warning("validate", "struct 'Rect' is declared 2 times"),
            Diagnostic::info("layout", "'Settings' is 8 bytes"),
        ];
        let mut out = Recorded::default();
        render_diagnostics(&diagnostics, &mut out);

        assert_eq!(
            out.stderr,
            [
                "error: [version-field] missing version\n  --> Settings",
                "warning: struct 'Rect' is declared 2 times",
            ]
        );
        assert!(out.stdout.is_empty());
    }
}

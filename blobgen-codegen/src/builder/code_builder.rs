//! Line-oriented text builder that tracks indentation.

/// One level of indentation, as used for struct members.
pub const INDENT: &str = "    ";

/// Accumulates lines of generated code at the current indentation level.
///
/// ```
/// use blobgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("struct Rect {")
///     .push_indent()
///     .push_line("int32_t x;")
///     .push_dedent()
///     .push_line("};");
///
/// assert_eq!(builder.build(), "struct Rect {\n    int32_t x;\n};\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line at the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add each line in order.
    pub fn push_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_indentation() {
        let mut builder = CodeBuilder::new();
        builder
            .push_line("a")
            .push_indent()
            .push_line("b")
            .push_indent()
            .push_line("c");

        assert_eq!(builder.current_indent(), 2);
        assert_eq!(builder.as_str(), "a\n    b\n        c\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new();
        builder.push_dedent().push_line("x;");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_push_lines() {
        let mut builder = CodeBuilder::new();
        builder
            .push_indent()
            .push_lines(vec!["a;".to_string(), "b;".to_string()]);
        assert_eq!(builder.build(), "    a;\n    b;\n");
    }
}

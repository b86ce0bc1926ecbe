//! Code builder utility for generating properly indented code.

use std::ops::{Deref, DerefMut};

use super::Indent;

/// Line-oriented builder for indented code.
///
/// Every line is prefixed with the indentation active at the moment it is
/// written; changing the level later never touches lines already in the
/// buffer.
///
/// # Example
///
/// ```
/// use entigen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::csharp();
/// builder.block_with_close("public class Order", "}", |b| {
///     b.push_line("public int Id { get; set; }");
/// });
///
/// assert_eq!(
///     builder.build(),
///     "public class Order\n{\n    public int Id { get; set; }\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (C# default).
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add an XML doc comment line (`/// text`).
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Enter one indentation level for the lifetime of the returned guard.
    ///
    /// The level in effect before the call is restored when the guard is
    /// dropped, including on early return through `?`.
    ///
    /// ```
    /// use entigen_codegen::builder::CodeBuilder;
    ///
    /// let mut builder = CodeBuilder::csharp();
    /// builder.push_line("{");
    /// {
    ///     let mut body = builder.indented();
    ///     body.push_line("get => Id;");
    /// }
    /// builder.push_line("}");
    ///
    /// assert_eq!(builder.build(), "{\n    get => Id;\n}\n");
    /// ```
    pub fn indented(&mut self) -> IndentGuard<'_> {
        let restore_level = self.indent_level;
        self.indent_level += 1;
        IndentGuard {
            builder: self,
            restore_level,
        }
    }

    /// Add a brace-delimited block: header line, `{`, indented body, closing line.
    pub fn block_with_close<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header);
        self.push_line("{");
        f(&mut *self.indented());
        self.push_line(close)
    }

    /// Add an indented body without header or braces.
    pub fn indent_with<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        f(&mut *self.indented());
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}

/// Scoped indentation returned by [`CodeBuilder::indented`].
pub struct IndentGuard<'a> {
    builder: &'a mut CodeBuilder,
    restore_level: usize,
}

impl Deref for IndentGuard<'_> {
    type Target = CodeBuilder;

    fn deref(&self) -> &CodeBuilder {
        self.builder
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut CodeBuilder {
        self.builder
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.builder.indent_level = self.restore_level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::csharp();
        builder.push_line("int x = 1;");
        assert_eq!(builder.build(), "int x = 1;\n");
    }

    #[test]
    fn test_manual_indentation() {
        let mut builder = CodeBuilder::csharp();
        builder
            .push_line("{")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "{\n    return 1;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::csharp();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::csharp();
        builder.indent_with(|b| {
            b.push_line("a").push_blank().push_line("b");
        });
        assert_eq!(builder.build(), "    a\n\n    b\n");
    }

    #[test]
    fn test_doc_comment() {
        let mut builder = CodeBuilder::csharp();
        builder.indent_with(|b| {
            b.push_doc("<summary>");
        });
        assert_eq!(builder.build(), "    /// <summary>\n");
    }

    #[test]
    fn test_nested_guards() {
        let mut builder = CodeBuilder::csharp();
        {
            let mut outer = builder.indented();
            outer.push_line("outer");
            {
                let mut inner = outer.indented();
                inner.push_line("inner");
                assert_eq!(inner.current_indent(), 2);
            }
            outer.push_line("outer again");
        }
        builder.push_line("top");
        assert_eq!(
            builder.build(),
            "    outer\n        inner\n    outer again\ntop\n"
        );
    }

    #[test]
    fn test_guard_restores_unbalanced_indent() {
        let mut builder = CodeBuilder::csharp();
        {
            let mut body = builder.indented();
            body.push_indent().push_indent();
        }
        assert_eq!(builder.current_indent(), 0);
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn fail() -> Result<(), &'static str> {
            Err("aborted")
        }

        fn emit(builder: &mut CodeBuilder) -> Result<(), &'static str> {
            let mut body = builder.indented();
            body.push_line("written");
            fail()?;
            body.push_line("never written");
            Ok(())
        }

        let mut builder = CodeBuilder::csharp();
        assert!(emit(&mut builder).is_err());
        builder.push_line("after");

        // Lines keep the indentation active when they were written.
        assert_eq!(builder.build(), "    written\nafter\n");
    }

    #[test]
    fn test_block_with_close() {
        let mut builder = CodeBuilder::csharp();
        builder.block_with_close("namespace Shop", "}", |b| {
            b.block_with_close("public partial class Order", "}", |b| {
                b.push_line("public int Id { get; set; }");
            });
        });
        assert_eq!(
            builder.build(),
            "namespace Shop\n{\n    public partial class Order\n    {\n        public int Id { get; set; }\n    }\n}\n"
        );
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.indent_with(|b| {
            b.push_line("x");
        });
        assert_eq!(builder.build(), "\tx\n");
    }
}

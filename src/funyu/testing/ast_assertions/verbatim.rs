//! Code block and embedded HTML assertions

use crate::funyu::ast::{CodeBlock, EmbeddedHtml};

pub struct CodeBlockAssertion<'a> {
    pub(crate) code_block: &'a CodeBlock,
    pub(crate) context: String,
}

impl<'a> CodeBlockAssertion<'a> {
    pub fn language(self, expected: Option<&str>) -> Self {
        let actual = self.code_block.language.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected code block language {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }
    pub fn line_count(self, expected: usize) -> Self {
        assert_lines_len(&self.code_block.lines, expected, &self.context);
        self
    }
    pub fn lines(self, expected: &[&str]) -> Self {
        assert_lines(&self.code_block.lines, expected, &self.context);
        self
    }
    pub fn content_contains(self, substring: &str) -> Self {
        let content = self.code_block.content();
        assert!(
            content.contains(substring),
            "{}: Expected code block content to contain '{}', but got '{}'",
            self.context,
            substring,
            content
        );
        self
    }
}

pub struct EmbeddedHtmlAssertion<'a> {
    pub(crate) embedded_html: &'a EmbeddedHtml,
    pub(crate) context: String,
}

impl<'a> EmbeddedHtmlAssertion<'a> {
    pub fn line_count(self, expected: usize) -> Self {
        assert_lines_len(&self.embedded_html.lines, expected, &self.context);
        self
    }
    pub fn lines(self, expected: &[&str]) -> Self {
        assert_lines(&self.embedded_html.lines, expected, &self.context);
        self
    }
}

fn assert_lines_len(lines: &[String], expected: usize, context: &str) {
    assert_eq!(
        lines.len(),
        expected,
        "{}: Expected {} verbatim lines, found {}",
        context,
        expected,
        lines.len()
    );
}

fn assert_lines(lines: &[String], expected: &[&str], context: &str) {
    assert_eq!(
        lines, expected,
        "{}: Verbatim lines differ",
        context
    );
}

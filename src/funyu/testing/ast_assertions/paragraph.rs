//! Paragraph assertions

use super::inlines::InlineAssertion;
use crate::funyu::ast::Paragraph;
use crate::funyu::testing::matchers::TextMatch;

pub struct ParagraphAssertion<'a> {
    pub(crate) para: &'a Paragraph,
    pub(crate) context: String,
}

impl<'a> ParagraphAssertion<'a> {
    /// All lines joined with `\n`
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.para.text(), &self.context);
        self
    }
    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.para.text(), &self.context);
        self
    }
    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.para.text(), &self.context);
        self
    }
    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.para.lines.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} lines, found {} lines",
            self.context, expected, actual
        );
        self
    }
    pub fn line(self, index: usize, expected: &str) -> Self {
        let context = format!("{}::lines[{}]", self.context, index);
        TextMatch::Exact(expected.to_string()).assert(self.line_text(index), &context);
        self
    }
    pub fn line_inlines<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion),
    {
        let line = self.para.lines.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Line index {} out of bounds ({} lines)",
                self.context,
                index,
                self.para.lines.len()
            )
        });
        assertion(InlineAssertion::new(
            line,
            format!("{}::lines[{}]", self.context, index),
        ));
        self
    }

    fn line_text(&self, index: usize) -> &'a str {
        let para: &'a Paragraph = self.para;
        para.lines
            .get(index)
            .map(|line| line.as_string())
            .unwrap_or_else(|| {
                panic!(
                    "{}: Line index {} out of bounds ({} lines)",
                    self.context,
                    index,
                    para.lines.len()
                )
            })
    }
}

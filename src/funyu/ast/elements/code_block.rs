//! Code block element
//!
//!     Lines between a code fence and its closing fence, indented one tab deeper than the
//!     fence. Content is never inline-parsed: only the structural tab is removed, everything
//!     else (including further tabs and spaces) is kept byte for byte.

use super::super::traits::{truncate_label, AstNode, Visitor};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag after the opening fence, if any.
    pub language: Option<String>,
    pub lines: Vec<String>,
}

impl CodeBlock {
    pub fn new(language: Option<String>, lines: Vec<String>) -> Self {
        Self { language, lines }
    }

    /// The content lines joined with `\n`.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

impl AstNode for CodeBlock {
    fn node_type(&self) -> &'static str {
        "CodeBlock"
    }

    fn display_label(&self) -> String {
        let language = self.language.as_deref().unwrap_or("-");
        let first = self.lines.first().map(String::as_str).unwrap_or("");
        format!("[{}] {}", language, truncate_label(first, 40))
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_code_block(self);
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CodeBlock({:?}, {} lines)",
            self.language,
            self.lines.len()
        )
    }
}

//! Paragraph element
//!
//!     A paragraph is a run of consecutive text lines at the same depth. It ends at a blank
//!     line, at any block marker, or when the depth changes. Each line keeps its own inline
//!     spans; line breaks inside a paragraph are significant and survive rendering.

use super::super::text_content::TextContent;
use super::super::traits::{truncate_label, AstNode, Visitor};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub lines: Vec<TextContent>,
}

impl Paragraph {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|line| TextContent::from_string(line))
                .collect(),
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(TextContent::from_string(line));
    }

    /// All lines joined with `\n`, as written. Used by the paragraph text assertions.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.as_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        let first = self.lines.first().map(|l| l.as_string()).unwrap_or("");
        format!("{} line(s): {}", self.lines.len(), truncate_label(first, 40))
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_paragraph(self);
        for line in &self.lines {
            visitor.visit_text_line(line);
        }
        visitor.leave_paragraph(self);
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph({} lines)", self.lines.len())
    }
}

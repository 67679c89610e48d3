//! Section element
//!
//!     A section is the main structural element of funyu documents. Sections can be arbitrarily
//!     nested and carry a title plus nested content.
//!
//! Structure:
//!
//!         - Title: the rest of the `-- ` line, trimmed, inline-parseable
//!         - Content: any blocks, indented one tab deeper than the title line
//!
//!     The section closes at the first non-blank line that is not indented deeper than its
//!     title line. Blank lines inside the content are paragraph separators only.
//!
//! Example:
//!
//!     -- inline items
//!     	this is [[keyword]] text.
//!
//!     	second paragraph of the section.

use super::super::text_content::TextContent;
use super::super::traits::{truncate_label, visit_children, AstNode, Container, Visitor};
use super::block::Block;
use std::fmt;

/// A section represents a hierarchical container with a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: TextContent,
    pub children: Vec<Block>,
}

impl Section {
    pub fn new(title: impl Into<String>, children: Vec<Block>) -> Self {
        Self {
            title: TextContent::from_string(title),
            children,
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }
}

impl AstNode for Section {
    fn node_type(&self) -> &'static str {
        "Section"
    }

    fn display_label(&self) -> String {
        truncate_label(self.title.as_string(), 50)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_section(self);
        visit_children(visitor, &self.children);
        visitor.leave_section(self);
    }
}

impl Container for Section {
    fn label(&self) -> &str {
        self.title.as_string()
    }

    fn children(&self) -> &[Block] {
        &self.children
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section('{}', {} items)",
            self.title.as_string(),
            self.children.len()
        )
    }
}

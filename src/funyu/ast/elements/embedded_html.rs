//! Embedded HTML element
//!
//!     Raw HTML between `(((` and `)))`. The lines are copied to the output as written, with no
//!     escaping and no wrapping element. Funyu markup inside is disregarded.

use super::super::traits::{truncate_label, AstNode, Visitor};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedHtml {
    pub lines: Vec<String>,
}

impl EmbeddedHtml {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl AstNode for EmbeddedHtml {
    fn node_type(&self) -> &'static str {
        "EmbeddedHtml"
    }

    fn display_label(&self) -> String {
        truncate_label(self.lines.first().map(String::as_str).unwrap_or(""), 50)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_embedded_html(self);
    }
}

impl fmt::Display for EmbeddedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmbeddedHtml({} lines)", self.lines.len())
    }
}

//! PostScript element
//!
//!     A postscript is an addendum to a post, introduced by `p.s. ` and a date token. Its
//!     content is nested exactly like a section's. Text following the date on the marker line
//!     becomes the first line of the postscript's first paragraph.
//!
//!     The date is kept as the token written; it is not validated.

use super::super::traits::{visit_children, AstNode, Container, Visitor};
use super::block::Block;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostScript {
    pub date: String,
    pub children: Vec<Block>,
}

impl PostScript {
    pub fn new(date: impl Into<String>, children: Vec<Block>) -> Self {
        Self {
            date: date.into(),
            children,
        }
    }
}

impl AstNode for PostScript {
    fn node_type(&self) -> &'static str {
        "PostScript"
    }

    fn display_label(&self) -> String {
        format!("p.s. {}", self.date)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_postscript(self);
        visit_children(visitor, &self.children);
        visitor.leave_postscript(self);
    }
}

impl Container for PostScript {
    fn label(&self) -> &str {
        &self.date
    }

    fn children(&self) -> &[Block] {
        &self.children
    }
}

impl fmt::Display for PostScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostScript({}, {} items)", self.date, self.children.len())
    }
}

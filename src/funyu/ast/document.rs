//! Document root node
//!
//!     The document holds the metadata block (possibly empty) and the ordered top-level
//!     blocks. When metadata was recognized, the paragraph it came from is not part of the
//!     block list.

use super::elements::Block;
use super::metadata::Metadata;
use super::traits::{visit_children, AstNode, Visitor};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub metadata: Metadata,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            metadata: Metadata::new(),
            blocks,
        }
    }

    pub fn with_metadata(metadata: Metadata, blocks: Vec<Block>) -> Self {
        Self { metadata, blocks }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty() && self.blocks.is_empty()
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!(
            "Document ({} metadata entries, {} blocks)",
            self.metadata.len(),
            self.blocks.len()
        )
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_children(visitor, &self.blocks);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document({} metadata entries, {} blocks)",
            self.metadata.len(),
            self.blocks.len()
        )
    }
}

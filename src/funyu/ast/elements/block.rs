//! Block element enum

use super::super::traits::{AstNode, Container};
use super::{CodeBlock, EmbeddedHtml, Paragraph, PostScript, Section};
use crate::funyu::ast::traits::Visitor;
use std::fmt;

/// Any block-level element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    Section(Section),
    PostScript(PostScript),
    CodeBlock(CodeBlock),
    EmbeddedHtml(EmbeddedHtml),
}

impl Block {
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Block::Section(_))
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Block::Section(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_postscript(&self) -> Option<&PostScript> {
        match self {
            Block::PostScript(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_code_block(&self) -> Option<&CodeBlock> {
        match self {
            Block::CodeBlock(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_embedded_html(&self) -> Option<&EmbeddedHtml> {
        match self {
            Block::EmbeddedHtml(e) => Some(e),
            _ => None,
        }
    }

    /// Nested blocks for container variants, empty for leaves.
    pub fn children(&self) -> &[Block] {
        match self {
            Block::Section(s) => s.children(),
            Block::PostScript(p) => p.children(),
            _ => &[],
        }
    }
}

impl AstNode for Block {
    fn node_type(&self) -> &'static str {
        match self {
            Block::Paragraph(p) => p.node_type(),
            Block::Section(s) => s.node_type(),
            Block::PostScript(p) => p.node_type(),
            Block::CodeBlock(c) => c.node_type(),
            Block::EmbeddedHtml(e) => e.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Block::Paragraph(p) => p.display_label(),
            Block::Section(s) => s.display_label(),
            Block::PostScript(p) => p.display_label(),
            Block::CodeBlock(c) => c.display_label(),
            Block::EmbeddedHtml(e) => e.display_label(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Block::Paragraph(p) => p.accept(visitor),
            Block::Section(s) => s.accept(visitor),
            Block::PostScript(p) => p.accept(visitor),
            Block::CodeBlock(c) => c.accept(visitor),
            Block::EmbeddedHtml(e) => e.accept(visitor),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.node_type(), self.display_label())
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Section> for Block {
    fn from(s: Section) -> Self {
        Block::Section(s)
    }
}

impl From<PostScript> for Block {
    fn from(p: PostScript) -> Self {
        Block::PostScript(p)
    }
}

impl From<CodeBlock> for Block {
    fn from(c: CodeBlock) -> Self {
        Block::CodeBlock(c)
    }
}

impl From<EmbeddedHtml> for Block {
    fn from(e: EmbeddedHtml) -> Self {
        Block::EmbeddedHtml(e)
    }
}

//! Fluent assertion API for document trees
//!
//!     Tests describe the expected tree top-down: pick an item, assert its kind, then check
//!     its fields and recurse into its children. Each step extends a context path used in
//!     failure messages.
//!
//!     ```rust,ignore
//!     assert_ast(&doc)
//!         .metadata_entry("title", "test")
//!         .item(0, |item| {
//!             item.assert_postscript()
//!                 .date("2015-04-01")
//!                 .child(0, |child| {
//!                     child.assert_paragraph().text("this is test.");
//!                 });
//!         });
//!     ```

mod containers;
mod document;
mod inlines;
mod paragraph;
mod verbatim;

pub use containers::{PostScriptAssertion, SectionAssertion};
pub use document::DocumentAssertion;
pub use inlines::{InlineAssertion, InlineExpectation};
pub use paragraph::ParagraphAssertion;
pub use verbatim::{CodeBlockAssertion, EmbeddedHtmlAssertion};

use crate::funyu::ast::{AstNode, Block, Document};

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct BlockAssertion<'a> {
    pub(crate) block: &'a Block,
    pub(crate) context: String,
}

impl<'a> BlockAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.block.node_type()
        )
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.block {
            Block::Paragraph(para) => ParagraphAssertion {
                para,
                context: self.context,
            },
            _ => self.mismatch("Paragraph"),
        }
    }

    pub fn assert_section(self) -> SectionAssertion<'a> {
        match self.block {
            Block::Section(section) => SectionAssertion {
                section,
                context: self.context,
            },
            _ => self.mismatch("Section"),
        }
    }

    pub fn assert_postscript(self) -> PostScriptAssertion<'a> {
        match self.block {
            Block::PostScript(postscript) => PostScriptAssertion {
                postscript,
                context: self.context,
            },
            _ => self.mismatch("PostScript"),
        }
    }

    pub fn assert_code_block(self) -> CodeBlockAssertion<'a> {
        match self.block {
            Block::CodeBlock(code_block) => CodeBlockAssertion {
                code_block,
                context: self.context,
            },
            _ => self.mismatch("CodeBlock"),
        }
    }

    pub fn assert_embedded_html(self) -> EmbeddedHtmlAssertion<'a> {
        match self.block {
            Block::EmbeddedHtml(embedded_html) => EmbeddedHtmlAssertion {
                embedded_html,
                context: self.context,
            },
            _ => self.mismatch("EmbeddedHtml"),
        }
    }
}

// ============================================================================
// Helper Functions (shared across modules)
// ============================================================================

pub(super) fn summarize_items(items: &[Block]) -> String {
    items
        .iter()
        .map(|item| item.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check the child count of a container, listing what was found on failure.
pub(super) fn assert_child_count(items: &[Block], expected: usize, context: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: Expected {} children, found {}: [{}]",
        context,
        expected,
        items.len(),
        summarize_items(items)
    );
}

/// Run an assertion on one child, with the child's path as context.
pub(super) fn assert_child<'a, F>(items: &'a [Block], index: usize, context: &str, assertion: F)
where
    F: FnOnce(BlockAssertion<'a>),
{
    let block = items.get(index).unwrap_or_else(|| {
        panic!(
            "{}: Child index {} out of bounds ({} children)",
            context,
            index,
            items.len()
        )
    });
    assertion(BlockAssertion {
        block,
        context: format!("{}::children[{}]", context, index),
    });
}

//! Abstract Syntax Tree (AST) definitions for the funyu format
//!
//!     The tree is built once per parse call and is read-only afterwards. Every node owns its
//!     children; there are no shared or cyclic references. Nesting is strictly the indentation
//!     nesting of the source.
//!
//! Structure
//!
//!     - Document: metadata plus the top-level blocks
//!     - Blocks: Paragraph, Section, PostScript, CodeBlock, EmbeddedHtml
//!     - Inlines: Text, Keyword, Emphasis, Code, Link, ImageLink
//!
//!     Text-bearing lines (paragraph lines, section titles) are stored as [TextContent], which
//!     keeps the raw line and parses its inline spans on first access.
//!
//!     Walk the tree with a [Visitor](traits::Visitor); see the formats module for examples.

pub mod document;
pub mod elements;
pub mod metadata;
pub mod text_content;
pub mod traits;

pub use document::Document;
pub use elements::{
    Block, CodeBlock, EmbeddedHtml, ImageLink, InlineContent, InlineSpan, Link, Paragraph,
    PostScript, Section,
};
pub use metadata::Metadata;
pub use text_content::TextContent;
pub use traits::{AstNode, Visitor};

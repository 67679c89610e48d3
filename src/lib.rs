//! # funyu
//!
//! A parser for the funyu blog markup, with an HTML renderer and a canonical funyu renderer.
//!
//! File Layout
//!
//! The processing runs in three stages, each in its own module under `src/funyu`:
//!
//! src/funyu
//!   ├── lexing       Raw text to indent-annotated line tokens
//!   ├── parsing      Line tokens to the document tree (blocks + metadata)
//!   ├── inlines      Inline spans inside a single text line
//!   ├── ast          The document tree and its visitor
//!   └── formats      Serializers walking the tree (html, funyu, treeviz, metadata)
//!
//! The functions re-exported here are the whole public surface most callers need:
//!
//! ```ignore
//! let doc = funyu::parse("title: test\n\nthis is test of [[funyu]].\n")?;
//! assert_eq!(doc.metadata().get("title"), Some("test"));
//! let html = funyu::render_html(&doc);
//! ```
//!
//! For testing guidelines, see the [testing module](funyu::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod funyu;

pub use funyu::ast::{Block, Document, InlineSpan, Metadata};
pub use funyu::formats::html::HtmlOptions;
pub use funyu::parsing::{ParseError, ParseOptions};

/// Parse a complete funyu document with the default options.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    funyu::parsing::parse_document(source, &ParseOptions::default())
}

/// Parse a complete funyu document with explicit options.
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    funyu::parsing::parse_document(source, options)
}

/// Render a document as an HTML5 fragment. Metadata is never part of the output.
pub fn render_html(doc: &Document) -> String {
    funyu::formats::html::to_html(doc, &HtmlOptions::default())
}

/// Render a document as HTML with explicit options.
pub fn render_html_with(doc: &Document, options: &HtmlOptions) -> String {
    funyu::formats::html::to_html(doc, options)
}

/// Re-serialize a document into canonical funyu markup.
pub fn render_markup(doc: &Document) -> String {
    funyu::formats::markup::to_markup(doc)
}

/// The ordered key/value metadata extracted from the document's first paragraph.
pub fn metadata(doc: &Document) -> &Metadata {
    doc.metadata()
}

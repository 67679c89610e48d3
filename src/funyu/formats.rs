//! Output format implementations for document serialization
//!
//! This module contains the format implementations that walk a parsed document:
//! - html: the HTML5 fragment a blog page embeds
//! - funyu: canonical funyu markup, the inverse of parsing
//! - treeviz: one line per node, for inspecting the tree
//! - metadata, metadata-json: the document's metadata only

pub mod html;
pub mod markup;
pub mod metadata;
pub mod registry;
pub mod treeviz;

pub use html::{to_html, HtmlFormatter, HtmlOptions};
pub use markup::{to_markup, MarkupFormatter};
pub use metadata::{to_metadata_json, to_metadata_lines, MetadataFormatter, MetadataJsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};

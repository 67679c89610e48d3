//! Parsing module for the funyu format
//!
//!     This module provides the processing pipeline from source text to the document tree:
//!         1. Lexing: split lines and measure indentation. See [lexing](crate::funyu::lexing).
//!         2. Block parsing: recursive descent over line tokens. See [parser].
//!         3. Metadata extraction: the first paragraph may turn into metadata. See [metadata].
//!         4. Inline parsing: deferred until a renderer asks a line for its spans. See
//!            [inlines](crate::funyu::inlines).
//!
//! Parsing End To End
//!
//!     Lexing produces one token per source line: its depth, its content with the structural
//!     tabs removed, and a line type taken from the leading marker. Code blocks and embedded
//!     HTML are already resolved at this point; their content lines come out as verbatim.
//!
//!     The block parser consumes lines at one depth. A section or postscript line recurses one
//!     level deeper for its content, and the recursion returns at the first line that is not
//!     deeper than the head line. A line that is deeper than anything open is an error.
//!
//!     Errors are fatal for the whole parse call. No partial tree is ever returned.

pub mod error;
pub mod metadata;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse_document, BlockParser, ParseOptions};

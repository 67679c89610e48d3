//! Inline parsing
//!
//!     Inline spans live inside a single text line: paragraph lines and section titles. The
//!     line is tokenized by [token] and then read by a recursive scanner in [parser].
//!
//! Priority
//!
//!     At each position the scanner tries, in order:
//!
//!         1. a link, when the token is `[` or `[[` and we are not inside a link's text
//!         2. `[[...]]` keyword
//!         3. `<<...>>` emphasis
//!         4. `{{...}}` code (literal)
//!
//!     Trying the link first lets `[[[a]] b](uri)` read as a link whose text starts with a
//!     keyword. Inside a link's text `[` is plain text, so links never nest.
//!
//! Leniency
//!
//!     An opener without a matching closer inside its enclosing span is literal text and
//!     scanning continues right after it. Inline parsing never fails.
//!
//!     Spans nest at most [MAX_INLINE_DEPTH](parser::MAX_INLINE_DEPTH) deep, link text included.
//!     Deeper openers are literal text, so a line of thousands of `<<` still parses in bounded
//!     stack space.
//!
//! Cost
//!
//!     Closers for every delimiter, the end of every link's brackets and the next `)` are
//!     computed once per line, so scanning is linear in the line length.

pub mod parser;
pub mod token;

pub use parser::{parse_inlines, IMAGE_MARKER, MAX_INLINE_DEPTH};
pub use token::{tokenize, InlineToken};

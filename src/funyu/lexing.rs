//! Lexer
//!
//!     This module turns raw document text into a flat sequence of line tokens. Funyu is line
//!     based: every structural decision the parser makes can be taken from a line's indentation
//!     depth and the marker it starts with, so the lexer never looks inside a line beyond that.
//!
//! Indentation Handling
//!
//!     The indentation unit is a single hard tab. The depth of a line is the number of leading
//!     tabs, and any other whitespace character found while that run is being measured is an
//!     error. There is no tab width and no alignment with spaces: a space at the start of a line
//!     is always rejected with the offending line and column.
//!
//!     Blank lines (empty, or whitespace only) carry no depth. They separate paragraphs and are
//!     otherwise ignored by the parser.
//!
//! Verbatim Regions
//!
//!     Code blocks and embedded HTML disable all markup, and that includes indentation rules.
//!     Source code often indents with spaces, so inside those regions only the structural tabs
//!     (one more than the opening marker) are measured and the rest of the line is kept as is.
//!     See [line_classification](line_classification) for the stateful classifier that tracks
//!     those regions.
//!
//! The Lexing Pipeline
//!
//!         1. Split the source into lines (`\n` or `\r\n`).
//!         2. Classify each line with [LineClassifier], which measures indentation outside
//!            verbatim regions and re-tags lines inside them.
//!
//!     At this point lexing is complete. The parser receives [LineToken]s only.

pub mod line_classification;
pub mod tokens;

pub use line_classification::LineClassifier;
pub use tokens::{LineToken, LineType, VerbatimKind};

use thiserror::Error;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Non-tab whitespace inside the indentation run of a line.
    #[error(
        "line {line}: indentation must use hard tabs only (found other whitespace at column {column})"
    )]
    Indentation { line: usize, column: usize },
}

/// Lex a whole document into line tokens.
pub fn lex(source: &str) -> Result<Vec<LineToken>, LexError> {
    let mut classifier = LineClassifier::new();
    let mut tokens = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        tokens.push(classifier.classify(index + 1, raw)?);
    }
    tracing::debug!(lines = tokens.len(), "lexed source");
    Ok(tokens)
}

/// Measure the leading hard-tab run of a line.
///
/// Returns the depth and the remaining content. Fails when another whitespace character shows up
/// before the first non-whitespace character.
pub fn measure_indentation(number: usize, raw: &str) -> Result<(usize, &str), LexError> {
    let mut depth = 0;
    for (offset, ch) in raw.char_indices() {
        if ch == '\t' {
            depth += 1;
        } else if ch.is_whitespace() {
            return Err(LexError::Indentation {
                line: number,
                column: raw[..offset].chars().count() + 1,
            });
        } else {
            return Ok((depth, &raw[offset..]));
        }
    }
    Ok((depth, ""))
}

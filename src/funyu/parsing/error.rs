//! Parse errors
//!
//!     Every error carries the 1-based line it was detected on and displays as
//!     `line N: message`.

use crate::funyu::lexing::{LexError, VerbatimKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Soft tab or other whitespace in the indentation run.
    #[error(
        "line {line}: indentation must use hard tabs only (found other whitespace at column {column})"
    )]
    Indentation { line: usize, column: usize },

    /// A code block or embedded HTML block that is never closed. `line` is the opener.
    #[error("line {line}: unterminated {kind}")]
    UnterminatedBlock { line: usize, kind: VerbatimKind },

    /// A line indented deeper than any open block allows.
    #[error("line {line}: unexpected indentation (expected depth {expected}, found {found})")]
    UnexpectedIndent {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: nesting deeper than {limit} levels")]
    NestingTooDeep { line: usize, limit: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Indentation { line, .. }
            | ParseError::UnterminatedBlock { line, .. }
            | ParseError::UnexpectedIndent { line, .. }
            | ParseError::NestingTooDeep { line, .. } => *line,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        match error {
            LexError::Indentation { line, column } => ParseError::Indentation { line, column },
        }
    }
}

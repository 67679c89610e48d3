//! TextContent facade for representing user content text
//!
//! Paragraph lines and section titles are stored as the raw line. Inline spans are parsed the
//! first time they are requested and cached, so a document that is only re-serialized never
//! pays for inline parsing.

use crate::funyu::ast::elements::InlineSpan;
use crate::funyu::inlines::parse_inlines;
use once_cell::sync::OnceCell;
use std::fmt;

/// A line of user text with lazily parsed inline spans.
#[derive(Clone, Default)]
pub struct TextContent {
    raw: String,
    inlines: OnceCell<Vec<InlineSpan>>,
}

impl TextContent {
    pub fn from_string(text: impl Into<String>) -> Self {
        Self {
            raw: text.into(),
            inlines: OnceCell::new(),
        }
    }

    /// The line exactly as written.
    pub fn as_string(&self) -> &str {
        &self.raw
    }

    /// Inline spans of this line, parsed on first access.
    pub fn inlines(&self) -> &[InlineSpan] {
        self.inlines.get_or_init(|| parse_inlines(&self.raw))
    }
}

impl PartialEq for TextContent {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for TextContent {}

impl fmt::Debug for TextContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextContent").field(&self.raw).finish()
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        Self::from_string(text)
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Self::from_string(text)
    }
}

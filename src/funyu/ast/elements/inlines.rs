//! Inline span types
//!
//!     A text line parses into a sequence of spans. Keyword, emphasis and link spans contain
//!     further spans; code spans and image links are literal.
//!
//!         [[keyword]]         Keyword
//!         <<emphasis>>        Emphasis
//!         {{code}}            Code (literal)
//!         [text](uri)         Link
//!         [IMG: alt](uri)     ImageLink (alt is literal)

use std::fmt;

/// Sequence of inline spans.
pub type InlineContent = Vec<InlineSpan>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Keyword(InlineContent),
    Emphasis(InlineContent),
    Code(String),
    Link(Link),
    ImageLink(ImageLink),
}

impl InlineSpan {
    pub fn text(value: impl Into<String>) -> Self {
        InlineSpan::Text(value.into())
    }

    pub fn code(value: impl Into<String>) -> Self {
        InlineSpan::Code(value.into())
    }

    pub fn link(target: impl Into<String>, content: InlineContent) -> Self {
        InlineSpan::Link(Link::new(target, content))
    }

    pub fn image_link(target: impl Into<String>, alt: impl Into<String>) -> Self {
        InlineSpan::ImageLink(ImageLink::new(target, alt))
    }

    /// Nested spans for container kinds.
    pub fn children(&self) -> Option<&InlineContent> {
        match self {
            InlineSpan::Keyword(children) | InlineSpan::Emphasis(children) => Some(children),
            InlineSpan::Link(link) => Some(&link.content),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InlineSpan::Text(_) => "Text",
            InlineSpan::Keyword(_) => "Keyword",
            InlineSpan::Emphasis(_) => "Emphasis",
            InlineSpan::Code(_) => "Code",
            InlineSpan::Link(_) => "Link",
            InlineSpan::ImageLink(_) => "ImageLink",
        }
    }

    /// The visible text with all markup removed.
    pub fn plain_text(&self) -> String {
        match self {
            InlineSpan::Text(text) | InlineSpan::Code(text) => text.clone(),
            InlineSpan::Keyword(children) | InlineSpan::Emphasis(children) => {
                plain_text(children)
            }
            InlineSpan::Link(link) => plain_text(&link.content),
            InlineSpan::ImageLink(image) => image.alt.clone(),
        }
    }
}

/// Concatenated visible text of a span sequence.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::plain_text).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub target: String,
    pub content: InlineContent,
}

impl Link {
    pub fn new(target: impl Into<String>, content: InlineContent) -> Self {
        Self {
            target: target.into(),
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLink {
    pub target: String,
    pub alt: String,
}

impl ImageLink {
    pub fn new(target: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            alt: alt.into(),
        }
    }
}

impl fmt::Display for InlineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind(), self.plain_text())
    }
}

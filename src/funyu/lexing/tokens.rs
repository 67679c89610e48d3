//! Line tokens for the lexer pipeline
//!
//!     Being line based, all the grammar needs is one token per source line carrying its depth,
//!     its content (indentation stripped) and a classification. The classification is taken from
//!     the line's leading marker only:
//!
//!         - Blank: empty or whitespace only
//!         - SectionHead: `-- title`
//!         - PostScriptHead: `p.s. date [text]`
//!         - CodeOpen: ```` ``` [lang] ````
//!         - HtmlOpen: `(((`
//!         - Verbatim: a line inside a code block or embedded HTML, kept as written
//!         - CodeClose / HtmlClose: the closing marker at the opener's depth
//!         - Text: any other line (paragraph text)
//!
//!     The order matters when a line could be read more than one way; see
//!     [LineClassifier](super::LineClassifier) for the rules.

use std::fmt;

/// Marker that opens a postscript block.
pub const POSTSCRIPT_MARKER: &str = "p.s. ";
/// Marker that opens a section block.
pub const SECTION_MARKER: &str = "-- ";
/// Marker that opens and closes a code block.
pub const CODE_FENCE: &str = "```";
/// Marker that opens an embedded HTML block.
pub const HTML_OPEN: &str = "(((";
/// Marker that closes an embedded HTML block.
pub const HTML_CLOSE: &str = ")))";

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken {
    /// 1-based line number in the source.
    pub number: usize,
    /// Number of structural tabs. Always 0 for blank lines.
    pub depth: usize,
    /// The line with its structural tabs removed.
    pub content: String,
    pub line_type: LineType,
}

impl LineToken {
    pub fn new(number: usize, depth: usize, content: impl Into<String>, line_type: LineType) -> Self {
        Self {
            number,
            depth,
            content: content.into(),
            line_type,
        }
    }

    pub fn blank(number: usize) -> Self {
        Self::new(number, 0, String::new(), LineType::Blank)
    }

    pub fn is_blank(&self) -> bool {
        self.line_type == LineType::Blank
    }
}

impl fmt::Display for LineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4} {:<14} {}{}",
            self.number,
            self.line_type.to_string(),
            "\\t".repeat(self.depth),
            self.content
        )
    }
}

/// The classification of a line token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Empty or whitespace only
    Blank,
    /// `-- ` followed by the section title
    SectionHead,
    /// `p.s. ` followed by a date token
    PostScriptHead,
    /// Code fence with an optional language tag
    CodeOpen,
    /// Code fence closing a code block
    CodeClose,
    /// `(((`
    HtmlOpen,
    /// `)))`
    HtmlClose,
    /// Raw line inside a code block or embedded HTML
    Verbatim,
    /// Any other line
    Text,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::Blank => "BLANK",
            LineType::SectionHead => "SECTION_HEAD",
            LineType::PostScriptHead => "POSTSCRIPT",
            LineType::CodeOpen => "CODE_OPEN",
            LineType::CodeClose => "CODE_CLOSE",
            LineType::HtmlOpen => "HTML_OPEN",
            LineType::HtmlClose => "HTML_CLOSE",
            LineType::Verbatim => "VERBATIM",
            LineType::Text => "TEXT",
        };
        f.write_str(name)
    }
}

/// The two kinds of region where markup is disregarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbatimKind {
    Code,
    EmbeddedHtml,
}

impl VerbatimKind {
    /// Line type of the closing marker.
    pub fn close_type(self) -> LineType {
        match self {
            VerbatimKind::Code => LineType::CodeClose,
            VerbatimKind::EmbeddedHtml => LineType::HtmlClose,
        }
    }

    pub fn close_marker(self) -> &'static str {
        match self {
            VerbatimKind::Code => CODE_FENCE,
            VerbatimKind::EmbeddedHtml => HTML_CLOSE,
        }
    }
}

impl fmt::Display for VerbatimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbatimKind::Code => f.write_str("code block"),
            VerbatimKind::EmbeddedHtml => f.write_str("embedded HTML block"),
        }
    }
}

//! Element types for the funyu AST
//!
//!     Blocks are the structural units of a document. Two of them (Section, PostScript) hold
//!     nested blocks; the others are leaves. Paragraph lines and section titles carry inline
//!     spans, code blocks and embedded HTML carry raw lines only.

pub mod block;
pub mod code_block;
pub mod embedded_html;
pub mod inlines;
pub mod paragraph;
pub mod postscript;
pub mod section;

pub use block::Block;
pub use code_block::CodeBlock;
pub use embedded_html::EmbeddedHtml;
pub use inlines::{ImageLink, InlineContent, InlineSpan, Link};
pub use paragraph::Paragraph;
pub use postscript::PostScript;
pub use section::Section;

//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to AST node information across all node types.

use super::elements::{Block, CodeBlock, EmbeddedHtml, Paragraph, PostScript, Section};
use super::text_content::TextContent;

/// Visitor trait for traversing the AST
///
/// Implement this trait to walk the AST. Each visit method corresponds to a node type.
/// Default implementations are empty, so you only need to override the methods you care about.
/// Container nodes get a `leave_*` call after their children have been visited.
///
/// # Example
///
/// ```ignore
/// struct SectionCounter(usize);
///
/// impl Visitor for SectionCounter {
///     fn visit_section(&mut self, _section: &Section) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = SectionCounter(0);
/// document.accept(&mut counter);
/// ```
pub trait Visitor {
    // Container nodes with children
    fn visit_section(&mut self, _section: &Section) {}
    fn leave_section(&mut self, _section: &Section) {}

    fn visit_postscript(&mut self, _postscript: &PostScript) {}
    fn leave_postscript(&mut self, _postscript: &PostScript) {}

    // Leaf nodes (some contain lines)
    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {}
    fn leave_paragraph(&mut self, _paragraph: &Paragraph) {}

    fn visit_text_line(&mut self, _text_line: &TextContent) {}

    fn visit_code_block(&mut self, _code_block: &CodeBlock) {}

    fn visit_embedded_html(&mut self, _embedded_html: &EmbeddedHtml) {}
}

/// Helper function to visit all children in a Block slice
pub fn visit_children(visitor: &mut dyn Visitor, items: &[Block]) {
    for item in items {
        item.accept(visitor);
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}

/// Trait for container nodes that have a label and children
pub trait Container: AstNode {
    fn label(&self) -> &str;
    fn children(&self) -> &[Block];
}

/// Shortens a label for one-line displays.
pub(crate) fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funyu::ast::Document;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Visitor for Recorder {
        fn visit_section(&mut self, section: &Section) {
            self.0.push(format!("enter {}", section.label()));
        }
        fn leave_section(&mut self, section: &Section) {
            self.0.push(format!("leave {}", section.label()));
        }
        fn visit_text_line(&mut self, text_line: &TextContent) {
            self.0.push(text_line.as_string().to_string());
        }
    }

    #[test]
    fn test_visitor_order() {
        let doc = Document::from_blocks(vec![Block::Section(Section::new(
            "outer",
            vec![Block::Paragraph(Paragraph::from_lines(["inner"]))],
        ))]);
        let mut recorder = Recorder::default();
        doc.accept(&mut recorder);
        assert_eq!(recorder.0, vec!["enter outer", "inner", "leave outer"]);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("ふにゅうふにゅう", 4), "ふにゅう...");
    }
}

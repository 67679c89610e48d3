//! Funyu markup serializer
//!
//!     Re-serializes a document into canonical funyu markup: the inverse of parsing. Parsing
//!     the output again yields a document that renders the same HTML.
//!
//!     The canonical form:
//!         - metadata as `key: value` lines, then one blank line
//!         - one blank line between sibling blocks
//!         - one hard tab per nesting level, no tabs on blank lines
//!         - inline spans re-wrapped in their delimiters
//!
//!     Inline spans keep the exact text they were parsed from, so a line renders back to the
//!     same string it was read from.

use super::registry::{FormatError, Formatter};
use crate::funyu::ast::elements::{Block, InlineSpan, PostScript};
use crate::funyu::ast::{Document, TextContent};
use crate::funyu::inlines::IMAGE_MARKER;
use crate::funyu::lexing::line_classification::classify_content;
use crate::funyu::lexing::tokens::{
    CODE_FENCE, HTML_CLOSE, HTML_OPEN, POSTSCRIPT_MARKER, SECTION_MARKER,
};
use crate::funyu::lexing::LineType;

/// Trait for converting a node to its funyu source representation
pub trait ToFunyuString {
    fn to_funyu_string(&self) -> String;
}

impl ToFunyuString for InlineSpan {
    fn to_funyu_string(&self) -> String {
        match self {
            InlineSpan::Text(text) => text.clone(),
            InlineSpan::Keyword(children) => format!("[[{}]]", children.to_funyu_string()),
            InlineSpan::Emphasis(children) => format!("<<{}>>", children.to_funyu_string()),
            InlineSpan::Code(text) => format!("{{{{{}}}}}", text),
            InlineSpan::Link(link) => {
                format!("[{}]({})", link.content.to_funyu_string(), link.target)
            }
            InlineSpan::ImageLink(image) => {
                format!("[{}{}]({})", IMAGE_MARKER, image.alt, image.target)
            }
        }
    }
}

impl ToFunyuString for [InlineSpan] {
    fn to_funyu_string(&self) -> String {
        self.iter().map(ToFunyuString::to_funyu_string).collect()
    }
}

impl ToFunyuString for Vec<InlineSpan> {
    fn to_funyu_string(&self) -> String {
        self.as_slice().to_funyu_string()
    }
}

impl ToFunyuString for TextContent {
    fn to_funyu_string(&self) -> String {
        self.inlines().to_funyu_string()
    }
}

/// Serialize a document as canonical funyu markup.
pub fn to_markup(doc: &Document) -> String {
    let mut output = String::new();
    if !doc.metadata().is_empty() {
        for (key, value) in doc.metadata().iter() {
            output.push_str(&format!("{key}: {value}\n"));
        }
        output.push('\n');
    }
    push_blocks(&mut output, doc.blocks(), 0);
    output
}

fn push_blocks(output: &mut String, blocks: &[Block], depth: usize) {
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        push_block(output, block, depth);
    }
}

fn push_line(output: &mut String, depth: usize, line: &str) {
    if !line.is_empty() {
        output.push_str(&"\t".repeat(depth));
        output.push_str(line);
    }
    output.push('\n');
}

fn push_block(output: &mut String, block: &Block, depth: usize) {
    match block {
        Block::Paragraph(paragraph) => {
            for line in &paragraph.lines {
                push_line(output, depth, &line.to_funyu_string());
            }
        }
        Block::Section(section) => {
            let head = format!("{}{}", SECTION_MARKER, section.title.to_funyu_string());
            push_line(output, depth, &head);
            push_blocks(output, &section.children, depth + 1);
        }
        Block::PostScript(postscript) => push_postscript(output, postscript, depth),
        Block::CodeBlock(code_block) => {
            match &code_block.language {
                Some(language) => push_line(output, depth, &format!("{CODE_FENCE} {language}")),
                None => push_line(output, depth, CODE_FENCE),
            }
            for line in &code_block.lines {
                push_line(output, depth + 1, line);
            }
            push_line(output, depth, CODE_FENCE);
        }
        Block::EmbeddedHtml(embedded_html) => {
            push_line(output, depth, HTML_OPEN);
            for line in &embedded_html.lines {
                push_line(output, depth + 1, line);
            }
            push_line(output, depth, HTML_CLOSE);
        }
    }
}

/// A postscript's first line goes back onto the head line when it would read as a marker
/// on a line of its own.
fn push_postscript(output: &mut String, postscript: &PostScript, depth: usize) {
    let all: &[Block] = &postscript.children;
    let (folded, lines, children) = match all.split_first() {
        Some((Block::Paragraph(first), rest)) => match first.lines.split_first() {
            Some((line, lines)) if classify_content(&line.to_funyu_string()) != LineType::Text => {
                (Some(line), lines, rest)
            }
            _ => (None, &[][..], all),
        },
        _ => (None, &[][..], all),
    };

    let mut head = format!("{}{}", POSTSCRIPT_MARKER, postscript.date);
    if let Some(line) = folded {
        head.push(' ');
        head.push_str(&line.to_funyu_string());
    }
    push_line(output, depth, &head);

    for line in lines {
        push_line(output, depth + 1, &line.to_funyu_string());
    }
    // The folded paragraph ends here; without a blank line it would absorb a following one.
    if folded.is_some() && !children.is_empty() {
        output.push('\n');
    }
    push_blocks(output, children, depth + 1);
}

/// Formatter implementation for canonical funyu markup
pub struct MarkupFormatter;

impl Formatter for MarkupFormatter {
    fn name(&self) -> &str {
        "funyu"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_markup(doc))
    }

    fn description(&self) -> &str {
        "Canonical funyu markup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funyu::inlines::parse_inlines;
    use crate::funyu::parsing::{parse_document, ParseOptions};

    fn markup(source: &str) -> String {
        to_markup(&parse_document(source, &ParseOptions::default()).expect("parse failed"))
    }

    #[test]
    fn test_inline_spans_render_back_to_source() {
        for line in [
            "plain",
            "a [[b]] <<c>> {{d}}",
            "[[[this]] is [[link]]](test)",
            "[a[b](u)](v)",
            "[IMG: alt](x.png) and [[opened",
            "{{code [[x]]}} <<a [[b>> c]]",
        ] {
            assert_eq!(parse_inlines(line).to_funyu_string(), line);
        }
    }

    #[test]
    fn test_metadata_and_blocks() {
        assert_eq!(
            markup("title: test\n\nthis is test.\nhello, world!\n"),
            "title: test\n\nthis is test.\nhello, world!\n"
        );
    }

    #[test]
    fn test_nested_blocks_are_tabbed() {
        assert_eq!(
            markup("-- s\n\ta\n\n\t``` rust\n\t\tfn x() {}\n\n\t\t  y\n\t```\nafter\n"),
            "-- s\n\ta\n\n\t``` rust\n\t\tfn x() {}\n\n\t\t  y\n\t```\n\nafter\n"
        );
    }

    #[test]
    fn test_postscript_and_embedded_html() {
        assert_eq!(
            markup("p.s. 2015-01-01 hello\n(((\n\t<hr>\n)))\n"),
            "p.s. 2015-01-01\n\thello\n\n(((\n\t<hr>\n)))\n"
        );
    }

    #[test]
    fn test_postscript_marker_line_stays_on_head() {
        let source = "p.s. 2015-01-01 -- not a section\n";
        assert_eq!(markup(source), source);
    }

    #[test]
    fn test_postscript_folded_line_stays_apart_from_next_paragraph() {
        let source = "p.s. 2015-01-01 -- x\n\n\tpara\n";
        let doc = parse_document(source, &ParseOptions::default()).expect("parse failed");
        let output = to_markup(&doc);
        assert_eq!(output, source);

        let reparsed = parse_document(&output, &ParseOptions::default()).expect("parse failed");
        assert_eq!(reparsed, doc);
        assert_eq!(doc.blocks()[0].children().len(), 2);

        let source = "p.s. 2015-01-01 ``` x\n\tsame paragraph\n\n\tnext\n";
        assert_eq!(markup(source), source);
    }
}

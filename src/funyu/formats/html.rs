//! HTML serializer
//!
//!     Renders a document as an HTML5 fragment, meant to be placed inside a page body. Every
//!     element ends with a newline, and paragraph lines end with `<br>`:
//!
//!         <section>
//!         <h1>title</h1>
//!         <p>
//!         a line<br>
//!         </p>
//!         </section>
//!
//!     Text is escaped. Code blocks and embedded HTML are copied verbatim (code blocks can be
//!     escaped through [HtmlOptions::escape_code_blocks]). Metadata is never rendered.
//!
//! Heading levels
//!
//!     Top-level sections use `initial_heading_level`; each enclosing section or postscript adds
//!     one. Levels above 6 stay at 6.

use super::registry::{FormatError, Formatter};
use crate::funyu::ast::elements::{CodeBlock, EmbeddedHtml, InlineSpan, Paragraph, PostScript, Section};
use crate::funyu::ast::{AstNode, Document, TextContent, Visitor};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `scheme:` prefix of an absolute URI.
static URI_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:").expect("valid scheme pattern"));

const MAX_HEADING_LEVEL: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Heading level of top-level sections.
    pub initial_heading_level: usize,
    /// Escape `&`, `<` and `>` inside code blocks.
    pub escape_code_blocks: bool,
    /// Open links with a URI scheme in a new tab.
    pub external_link_target: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            initial_heading_level: 1,
            escape_code_blocks: false,
            external_link_target: true,
        }
    }
}

/// Render a document as HTML.
pub fn to_html(doc: &Document, options: &HtmlOptions) -> String {
    let mut renderer = HtmlRenderer::new(options);
    doc.accept(&mut renderer);
    renderer.output
}

/// Render a sequence of inline spans.
pub fn inlines_to_html(spans: &[InlineSpan], options: &HtmlOptions) -> String {
    let mut output = String::new();
    push_inlines(&mut output, spans, options);
    output
}

fn push_inlines(output: &mut String, spans: &[InlineSpan], options: &HtmlOptions) {
    for span in spans {
        match span {
            InlineSpan::Text(text) => output.push_str(&escape(text)),
            InlineSpan::Keyword(children) => {
                output.push_str("<strong>");
                push_inlines(output, children, options);
                output.push_str("</strong>");
            }
            InlineSpan::Emphasis(children) => {
                output.push_str("<em>");
                push_inlines(output, children, options);
                output.push_str("</em>");
            }
            InlineSpan::Code(text) => {
                output.push_str("<code>");
                output.push_str(&escape(text));
                output.push_str("</code>");
            }
            InlineSpan::Link(link) => {
                push_anchor_open(output, &link.target, options);
                push_inlines(output, &link.content, options);
                output.push_str("</a>");
            }
            InlineSpan::ImageLink(image) => {
                push_anchor_open(output, &image.target, options);
                output.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">",
                    escape(&image.target),
                    escape(&image.alt)
                ));
                output.push_str("</a>");
            }
        }
    }
}

fn push_anchor_open(output: &mut String, target: &str, options: &HtmlOptions) {
    output.push_str(&format!("<a href=\"{}\"", escape(target)));
    if options.external_link_target && is_external(target) {
        output.push_str(" target=\"_blank\"");
    }
    output.push('>');
}

/// Whether a link target carries a URI scheme (`http:`, `mailto:`, ...).
pub fn is_external(target: &str) -> bool {
    URI_SCHEME.is_match(target)
}

/// Escape `&`, `<`, `>` and `"`.
fn escape(text: &str) -> String {
    html_escape::encode_text(text).replace('"', "&quot;")
}

struct HtmlRenderer<'a> {
    options: &'a HtmlOptions,
    output: String,
    /// Enclosing sections and postscripts.
    nesting: usize,
}

impl<'a> HtmlRenderer<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        Self {
            options,
            output: String::new(),
            nesting: 0,
        }
    }

    fn heading_level(&self) -> usize {
        (self.options.initial_heading_level + self.nesting).clamp(1, MAX_HEADING_LEVEL)
    }

    fn push_text(&mut self, text: &TextContent) {
        push_inlines(&mut self.output, text.inlines(), self.options);
    }
}

impl Visitor for HtmlRenderer<'_> {
    fn visit_section(&mut self, section: &Section) {
        let level = self.heading_level();
        self.output.push_str(&format!("<section>\n<h{level}>"));
        self.push_text(&section.title);
        self.output.push_str(&format!("</h{level}>\n"));
        self.nesting += 1;
    }

    fn leave_section(&mut self, _section: &Section) {
        self.nesting -= 1;
        self.output.push_str("</section>\n");
    }

    fn visit_postscript(&mut self, postscript: &PostScript) {
        self.output.push_str(&format!(
            "<ins>\n<b>p.s. <date>{}</date></b><br>\n",
            escape(&postscript.date)
        ));
        self.nesting += 1;
    }

    fn leave_postscript(&mut self, _postscript: &PostScript) {
        self.nesting -= 1;
        self.output.push_str("</ins>\n");
    }

    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {
        self.output.push_str("<p>\n");
    }

    fn leave_paragraph(&mut self, _paragraph: &Paragraph) {
        self.output.push_str("</p>\n");
    }

    fn visit_text_line(&mut self, text_line: &TextContent) {
        self.push_text(text_line);
        self.output.push_str("<br>\n");
    }

    fn visit_code_block(&mut self, code_block: &CodeBlock) {
        match &code_block.language {
            Some(language) => self
                .output
                .push_str(&format!("<pre class=\"code code_{}\">\n", escape(language))),
            None => self.output.push_str("<pre class=\"code\">\n"),
        }
        let content = code_block.content();
        if self.options.escape_code_blocks {
            self.output.push_str(&html_escape::encode_text(&content));
        } else {
            self.output.push_str(&content);
        }
        self.output.push_str("\n</pre>\n");
    }

    fn visit_embedded_html(&mut self, embedded_html: &EmbeddedHtml) {
        self.output.push_str(&embedded_html.lines.join("\n"));
        self.output.push('\n');
    }
}

/// Formatter implementation for html format
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    pub options: HtmlOptions,
}

impl HtmlFormatter {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_html(doc, &self.options))
    }

    fn description(&self) -> &str {
        "HTML5 fragment for embedding in a page"
    }
}

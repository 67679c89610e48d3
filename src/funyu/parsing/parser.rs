//! Block parser
//!
//!     A recursive descent over line tokens. `parse_blocks(min_depth)` reads the lines at
//!     exactly `min_depth` and returns at the first non-blank line that is shallower. Each line
//!     is dispatched on its line type:
//!
//!         BLANK           ends the open paragraph
//!         SECTION_HEAD    section, content at min_depth + 1
//!         POSTSCRIPT      postscript, content at min_depth + 1
//!         CODE_OPEN       code block, verbatim lines until CODE_CLOSE
//!         HTML_OPEN       embedded HTML, verbatim lines until HTML_CLOSE
//!         TEXT            appended to the open paragraph (or starts one)
//!
//!     Any marker line also ends the open paragraph, so two blocks are never merged.

use super::error::ParseError;
use super::metadata::extract_metadata;
use crate::funyu::ast::{Block, CodeBlock, Document, EmbeddedHtml, Paragraph, PostScript, Section};
use crate::funyu::lexing::tokens::{CODE_FENCE, POSTSCRIPT_MARKER, SECTION_MARKER};
use crate::funyu::lexing::{lex, LineToken, LineType, VerbatimKind};
use serde::{Deserialize, Serialize};

/// Options for a parse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Deepest indentation accepted. Bounds the recursion of the block parser.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Parse a complete document: blocks first, then metadata from the first block.
pub fn parse_document(source: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    let tokens = lex(source)?;
    let blocks = BlockParser::new(&tokens, options).parse()?;
    let (metadata, blocks) = extract_metadata(blocks);
    tracing::debug!(
        lines = tokens.len(),
        blocks = blocks.len(),
        metadata = metadata.len(),
        "parsed document"
    );
    Ok(Document::with_metadata(metadata, blocks))
}

pub struct BlockParser<'a> {
    tokens: &'a [LineToken],
    options: &'a ParseOptions,
    pos: usize,
}

impl<'a> BlockParser<'a> {
    pub fn new(tokens: &'a [LineToken], options: &'a ParseOptions) -> Self {
        Self {
            tokens,
            options,
            pos: 0,
        }
    }

    /// Parse all tokens as top-level blocks.
    pub fn parse(mut self) -> Result<Vec<Block>, ParseError> {
        self.parse_blocks(0)
    }

    fn peek(&self) -> Option<&'a LineToken> {
        self.tokens.get(self.pos)
    }

    fn parse_blocks(&mut self, min_depth: usize) -> Result<Vec<Block>, ParseError> {
        let mut blocks = Vec::new();
        let mut paragraph: Option<Paragraph> = None;

        while let Some(token) = self.peek() {
            if token.is_blank() {
                flush_paragraph(&mut paragraph, &mut blocks);
                self.pos += 1;
                continue;
            }
            if token.depth < min_depth {
                break;
            }
            if token.depth > self.options.max_depth {
                return Err(ParseError::NestingTooDeep {
                    line: token.number,
                    limit: self.options.max_depth,
                });
            }
            if token.depth > min_depth {
                return Err(ParseError::UnexpectedIndent {
                    line: token.number,
                    expected: min_depth,
                    found: token.depth,
                });
            }

            tracing::trace!(line = token.number, kind = %token.line_type, depth = min_depth);
            self.pos += 1;
            let block = match token.line_type {
                LineType::SectionHead => self.parse_section(token)?,
                LineType::PostScriptHead => self.parse_postscript(token)?,
                LineType::CodeOpen => self.parse_code_block(token)?,
                LineType::HtmlOpen => self.parse_embedded_html(token)?,
                // Verbatim and closing lines only follow an opener, which consumes them.
                _ => {
                    paragraph
                        .get_or_insert_with(Paragraph::default)
                        .push_line(token.content.as_str());
                    continue;
                }
            };
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(block);
        }

        flush_paragraph(&mut paragraph, &mut blocks);
        Ok(blocks)
    }

    fn parse_section(&mut self, head: &LineToken) -> Result<Block, ParseError> {
        let title = head.content[SECTION_MARKER.len()..].trim();
        let children = self.parse_blocks(head.depth + 1)?;
        Ok(Block::Section(Section::new(title, children)))
    }

    /// `p.s. DATE rest`: the date is the first token, the rest of the line opens the content.
    fn parse_postscript(&mut self, head: &LineToken) -> Result<Block, ParseError> {
        let rest = head.content[POSTSCRIPT_MARKER.len()..].trim();
        let (date, tail) = match rest.split_once(char::is_whitespace) {
            Some((date, tail)) => (date, tail.trim()),
            None => (rest, ""),
        };

        let continues_paragraph = self
            .peek()
            .map(|next| next.line_type == LineType::Text && next.depth == head.depth + 1)
            .unwrap_or(false);
        let mut children = self.parse_blocks(head.depth + 1)?;

        if !tail.is_empty() {
            match children.first_mut() {
                Some(Block::Paragraph(first)) if continues_paragraph => {
                    first.lines.insert(0, tail.into());
                }
                _ => children.insert(0, Block::Paragraph(Paragraph::from_lines([tail]))),
            }
        }
        Ok(Block::PostScript(PostScript::new(date, children)))
    }

    fn parse_code_block(&mut self, head: &LineToken) -> Result<Block, ParseError> {
        let language = head.content[CODE_FENCE.len()..].trim();
        let language = (!language.is_empty()).then(|| language.to_string());
        let lines = self.verbatim_lines(head, VerbatimKind::Code)?;
        Ok(Block::CodeBlock(CodeBlock::new(language, lines)))
    }

    fn parse_embedded_html(&mut self, head: &LineToken) -> Result<Block, ParseError> {
        let lines = self.verbatim_lines(head, VerbatimKind::EmbeddedHtml)?;
        Ok(Block::EmbeddedHtml(EmbeddedHtml::new(lines)))
    }

    /// Collect verbatim lines up to and including the closer.
    fn verbatim_lines(
        &mut self,
        head: &LineToken,
        kind: VerbatimKind,
    ) -> Result<Vec<String>, ParseError> {
        let mut lines = Vec::new();
        loop {
            match self.peek() {
                Some(token) if token.line_type == LineType::Verbatim => {
                    lines.push(token.content.clone());
                    self.pos += 1;
                }
                Some(token) if token.line_type == kind.close_type() => {
                    self.pos += 1;
                    return Ok(lines);
                }
                _ => {
                    return Err(ParseError::UnterminatedBlock {
                        line: head.number,
                        kind,
                    })
                }
            }
        }
    }
}

fn flush_paragraph(paragraph: &mut Option<Paragraph>, blocks: &mut Vec<Block>) {
    if let Some(paragraph) = paragraph.take() {
        blocks.push(Block::Paragraph(paragraph));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Vec<Block>, ParseError> {
        let tokens = lex(source)?;
        BlockParser::new(&tokens, &ParseOptions::default()).parse()
    }

    #[test]
    fn test_blank_line_separates_paragraphs() {
        let blocks = parse("a\nb\n\nc\n").unwrap();
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(Paragraph::from_lines(["a", "b"])),
                Block::Paragraph(Paragraph::from_lines(["c"])),
            ]
        );
    }

    #[test]
    fn test_section_nesting_and_close() {
        let blocks = parse("-- Title\n\tinner\nafter\n").unwrap();
        assert_eq!(
            blocks,
            vec![
                Block::Section(Section::new(
                    "Title",
                    vec![Block::Paragraph(Paragraph::from_lines(["inner"]))]
                )),
                Block::Paragraph(Paragraph::from_lines(["after"])),
            ]
        );
    }

    #[test]
    fn test_marker_ends_paragraph() {
        let blocks = parse("text\n-- s\n").unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].is_paragraph());
        assert!(blocks[1].is_section());
    }

    #[test]
    fn test_postscript_folds_rest_of_line() {
        let blocks = parse("p.s. 2015-04-01 first\n\tsecond\n").unwrap();
        assert_eq!(
            blocks,
            vec![Block::PostScript(PostScript::new(
                "2015-04-01",
                vec![Block::Paragraph(Paragraph::from_lines(["first", "second"]))]
            ))]
        );

        let blocks = parse("p.s. 2015-04-01 first\n\t-- s\n").unwrap();
        let children = blocks[0].children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], Block::Paragraph(Paragraph::from_lines(["first"])));
    }

    #[test]
    fn test_code_block() {
        let blocks = parse("``` python\n\tif x:\n\t\treturn [[y]]\n```\n").unwrap();
        assert_eq!(
            blocks,
            vec![Block::CodeBlock(CodeBlock::new(
                Some("python".to_string()),
                vec!["if x:".to_string(), "\treturn [[y]]".to_string()]
            ))]
        );
    }

    #[test]
    fn test_unterminated_blocks() {
        assert_eq!(
            parse("``` python\n\tprint(1)\n"),
            Err(ParseError::UnterminatedBlock {
                line: 1,
                kind: VerbatimKind::Code
            })
        );
        assert_eq!(
            parse("-- s\n\t(((\n\t\t<b>\nafter\n"),
            Err(ParseError::UnterminatedBlock {
                line: 2,
                kind: VerbatimKind::EmbeddedHtml
            })
        );
    }

    #[test]
    fn test_unexpected_indent() {
        assert_eq!(
            parse("para\n\tdeeper\n"),
            Err(ParseError::UnexpectedIndent {
                line: 2,
                expected: 0,
                found: 1
            })
        );
        assert_eq!(
            parse("-- s\n\t\ttoo deep\n"),
            Err(ParseError::UnexpectedIndent {
                line: 2,
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_nesting_limit() {
        let tokens = lex("-- a\n\t-- b\n\t\t-- c\n").unwrap();
        let options = ParseOptions { max_depth: 1 };
        assert_eq!(
            BlockParser::new(&tokens, &options).parse(),
            Err(ParseError::NestingTooDeep { line: 3, limit: 1 })
        );
    }
}

//! Line Classification
//!
//! Core classification logic for determining line types from their leading marker.
//! This module contains the stateful classifier for verbatim region detection: once a code
//! fence or `(((` is seen, following lines are re-tagged as verbatim until the matching closer
//! shows up at the opener's depth, or until a line dedents to the opener's depth or less.
use super::tokens::{
    LineToken, LineType, VerbatimKind, CODE_FENCE, HTML_OPEN, POSTSCRIPT_MARKER, SECTION_MARKER,
};
use super::{measure_indentation, LexError};

/// An open verbatim region.
#[derive(Debug, Clone, Copy)]
struct VerbatimRegion {
    kind: VerbatimKind,
    opener_depth: usize,
}

/// A stateful classifier that identifies verbatim regions and re-tags their content lines.
#[derive(Debug, Default)]
pub struct LineClassifier {
    region: Option<VerbatimRegion>,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one raw line (without its line terminator).
    pub fn classify(&mut self, number: usize, raw: &str) -> Result<LineToken, LexError> {
        if let Some(region) = self.region {
            if let Some(token) = self.classify_in_region(region, number, raw)? {
                return Ok(token);
            }
        }

        if raw.trim().is_empty() {
            return Ok(LineToken::blank(number));
        }

        let (depth, content) = measure_indentation(number, raw)?;
        let line_type = classify_content(content);
        match line_type {
            LineType::CodeOpen => self.open(VerbatimKind::Code, depth),
            LineType::HtmlOpen => self.open(VerbatimKind::EmbeddedHtml, depth),
            _ => {}
        }
        Ok(LineToken::new(number, depth, content, line_type))
    }

    fn open(&mut self, kind: VerbatimKind, opener_depth: usize) {
        self.region = Some(VerbatimRegion { kind, opener_depth });
    }

    /// Returns `None` when the line leaves the region without closing it; the caller then
    /// classifies it as a regular line.
    fn classify_in_region(
        &mut self,
        region: VerbatimRegion,
        number: usize,
        raw: &str,
    ) -> Result<Option<LineToken>, LexError> {
        let content_depth = region.opener_depth + 1;
        if let Some(content) = strip_tabs(raw, content_depth) {
            return Ok(Some(LineToken::new(
                number,
                content_depth,
                content,
                LineType::Verbatim,
            )));
        }
        if raw.trim().is_empty() {
            return Ok(Some(LineToken::new(
                number,
                content_depth,
                String::new(),
                LineType::Verbatim,
            )));
        }

        let (depth, content) = measure_indentation(number, raw)?;
        self.region = None;
        if depth == region.opener_depth && content.trim_end() == region.kind.close_marker() {
            return Ok(Some(LineToken::new(
                number,
                depth,
                content.trim_end(),
                region.kind.close_type(),
            )));
        }
        Ok(None)
    }
}

/// Determine the type of a line from its content (indentation already stripped).
pub fn classify_content(content: &str) -> LineType {
    if content.trim().is_empty() {
        return LineType::Blank;
    }
    if content.starts_with(SECTION_MARKER) {
        return LineType::SectionHead;
    }
    if let Some(rest) = content.strip_prefix(POSTSCRIPT_MARKER) {
        // A postscript needs its date token; a bare `p.s. ` is ordinary text.
        if !rest.trim().is_empty() {
            return LineType::PostScriptHead;
        }
    }
    if content.starts_with(CODE_FENCE) {
        return LineType::CodeOpen;
    }
    if content.trim_end() == HTML_OPEN {
        return LineType::HtmlOpen;
    }
    LineType::Text
}

/// Strips exactly `count` leading tabs, or returns `None` if the line has fewer.
fn strip_tabs(raw: &str, count: usize) -> Option<&str> {
    let prefix = raw.get(..count)?;
    if prefix.bytes().all(|b| b == b'\t') {
        Some(&raw[count..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_all(lines: &[&str]) -> Vec<(LineType, usize, String)> {
        let mut classifier = LineClassifier::new();
        lines
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let token = classifier.classify(i + 1, raw).expect("classify failed");
                (token.line_type, token.depth, token.content)
            })
            .collect()
    }

    #[test]
    fn test_classify_markers() {
        assert_eq!(classify_content("-- title"), LineType::SectionHead);
        assert_eq!(classify_content("--title"), LineType::Text);
        assert_eq!(classify_content("p.s. 2015-04-01"), LineType::PostScriptHead);
        assert_eq!(classify_content("p.s. "), LineType::Text);
        assert_eq!(classify_content("``` python"), LineType::CodeOpen);
        assert_eq!(classify_content("```"), LineType::CodeOpen);
        assert_eq!(classify_content("((("), LineType::HtmlOpen);
        assert_eq!(classify_content("((( x"), LineType::Text);
        assert_eq!(classify_content(")))"), LineType::Text);
        assert_eq!(classify_content("plain"), LineType::Text);
    }

    #[test]
    fn test_code_block_lines_are_verbatim() {
        let lines = classify_all(&["``` python", "\tif x:", "\t    [[y]]", "", "```", "after"]);
        assert_eq!(
            lines,
            vec![
                (LineType::CodeOpen, 0, "``` python".to_string()),
                (LineType::Verbatim, 1, "if x:".to_string()),
                (LineType::Verbatim, 1, "    [[y]]".to_string()),
                (LineType::Verbatim, 1, String::new()),
                (LineType::CodeClose, 0, "```".to_string()),
                (LineType::Text, 0, "after".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_embedded_html_closer_must_match_depth() {
        let lines = classify_all(&["\t(((", "\t\t<b>", "\t\t)))", "\t)))"]);
        assert_eq!(
            lines,
            vec![
                (LineType::HtmlOpen, 1, "(((".to_string()),
                (LineType::Verbatim, 2, "<b>".to_string()),
                (LineType::Verbatim, 2, ")))".to_string()),
                (LineType::HtmlClose, 1, ")))".to_string()),
            ]
        );
    }

    #[test]
    fn test_dedent_leaves_region_unclosed() {
        let mut classifier = LineClassifier::new();
        classifier.classify(1, "```").unwrap();
        let inside = classifier.classify(2, "\t-- kept").unwrap();
        assert_eq!(inside.line_type, LineType::Verbatim);
        let token = classifier.classify(3, "-- next").unwrap();
        assert_eq!(token.line_type, LineType::SectionHead);
        let after = classifier.classify(4, "\t-- nested").unwrap();
        assert_eq!(after.line_type, LineType::SectionHead);
    }

    #[test]
    fn test_spaces_inside_structural_run_are_rejected() {
        let mut classifier = LineClassifier::new();
        classifier.classify(1, "\t```").unwrap();
        assert_eq!(
            classifier.classify(2, "\t code"),
            Err(LexError::Indentation { line: 2, column: 2 })
        );
    }
}

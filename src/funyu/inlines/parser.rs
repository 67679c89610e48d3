use super::token::{tokenize, InlineToken};
use crate::funyu::ast::elements::{ImageLink, InlineContent, InlineSpan, Link};
use std::ops::Range;

/// Bracketed text starting with this marker is an image link.
pub const IMAGE_MARKER: &str = "IMG: ";

/// Deepest span nesting. Openers below it are literal text.
pub const MAX_INLINE_DEPTH: usize = 32;

/// Parse inline spans from a single line of text.
///
/// Never fails: delimiters without a closer are kept as literal text.
pub fn parse_inlines(text: &str) -> InlineContent {
    InlineParser::new(text, false).parse(0)
}

/// Parse the text between a link's brackets. Links are not recognized here.
fn parse_link_text(text: &str, depth: usize) -> InlineContent {
    InlineParser::new(text, true).parse(depth)
}

/// End of a link's bracketed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LinkEnd {
    /// Token holding the closing `]`.
    token: usize,
    /// Byte offset of the closing `]`.
    offset: usize,
}

struct InlineParser<'a> {
    source: &'a str,
    tokens: Vec<(InlineToken, Range<usize>)>,
    in_link: bool,
    /// Matching closer index per opener index, for the paired delimiters.
    closers: Vec<Option<usize>>,
    /// Per `[` or `[[` token: where the bracket opened by its first character closes.
    link_ends: Vec<Option<LinkEnd>>,
    /// Per token: the next `)` after it.
    next_paren_close: Vec<Option<usize>>,
}

impl<'a> InlineParser<'a> {
    fn new(source: &'a str, in_link: bool) -> Self {
        let tokens = tokenize(source);
        let closers = match_closers(&tokens);
        let link_ends = match_link_ends(&tokens, &closers);
        let next_paren_close = next_paren_closes(&tokens);
        Self {
            source,
            tokens,
            in_link,
            closers,
            link_ends,
            next_paren_close,
        }
    }

    fn parse(&self, depth: usize) -> InlineContent {
        self.parse_range(0, self.tokens.len(), depth)
    }

    /// Parse the tokens in `lo..hi`. Openers only match closers inside the same range.
    fn parse_range(&self, lo: usize, hi: usize, depth: usize) -> InlineContent {
        let mut frame = InlineFrame::default();
        let mut i = lo;
        while i < hi {
            match self.try_span(i, hi, depth) {
                Some((span, next)) => {
                    frame.push_node(span);
                    i = next;
                }
                None => {
                    frame.push_str(&self.source[self.tokens[i].1.clone()]);
                    i += 1;
                }
            }
        }
        frame.into_children()
    }

    /// Try to read a span opened at token `i`. Returns the span and the index after it.
    fn try_span(&self, i: usize, hi: usize, depth: usize) -> Option<(InlineSpan, usize)> {
        let token = self.tokens[i].0;
        if !token.is_opener() || depth >= MAX_INLINE_DEPTH {
            return None;
        }
        if !self.in_link && matches!(token, InlineToken::BracketOpen | InlineToken::KeywordOpen) {
            if let Some(found) = self.try_link(i, hi, depth) {
                return Some(found);
            }
        }
        let close = self.closer(i, hi)?;
        let span = match token {
            InlineToken::KeywordOpen => {
                InlineSpan::Keyword(self.parse_range(i + 1, close, depth + 1))
            }
            InlineToken::EmphasisOpen => {
                InlineSpan::Emphasis(self.parse_range(i + 1, close, depth + 1))
            }
            InlineToken::CodeOpen => {
                let start = self.tokens[i].1.end;
                let end = self.tokens[close].1.start;
                InlineSpan::Code(self.source[start..end].to_string())
            }
            _ => return None,
        };
        Some((span, close + 1))
    }

    fn closer(&self, i: usize, hi: usize) -> Option<usize> {
        self.closers[i].filter(|&close| close < hi)
    }

    /// `[text](uri)` or `[IMG: alt](uri)`, with the `[` at the start of token `i`.
    ///
    /// The closing `]` must be followed directly by `(`; the URI runs to the next `)`.
    fn try_link(&self, i: usize, hi: usize, depth: usize) -> Option<(InlineSpan, usize)> {
        let end = self.link_ends[i].filter(|end| end.token < hi)?;
        let paren = end.token + 1;
        if paren >= hi || self.tokens[paren].0 != InlineToken::ParenOpen {
            return None;
        }
        let paren_close = self.next_paren_close[paren].filter(|&k| k < hi)?;

        let target = &self.source[self.tokens[paren].1.end..self.tokens[paren_close].1.start];
        let text = &self.source[self.tokens[i].1.start + 1..end.offset];
        let span = match text.strip_prefix(IMAGE_MARKER) {
            Some(alt) => InlineSpan::ImageLink(ImageLink::new(target, alt)),
            None => InlineSpan::Link(Link::new(target, parse_link_text(text, depth + 1))),
        };
        Some((span, paren_close + 1))
    }
}

/// Pair every `[[`, `<<` and `{{` with its closer.
///
/// Keywords and emphasis nest, so their pairs come from a stack per kind. Code spans do not
/// nest: `{{` pairs with the next `}}`.
fn match_closers(tokens: &[(InlineToken, Range<usize>)]) -> Vec<Option<usize>> {
    let mut closers = vec![None; tokens.len()];
    let mut keywords = Vec::new();
    let mut emphases = Vec::new();
    let mut next_code_close = None;

    for (index, (token, _)) in tokens.iter().enumerate().rev() {
        match token {
            InlineToken::CodeClose => next_code_close = Some(index),
            InlineToken::CodeOpen => closers[index] = next_code_close,
            _ => {}
        }
    }

    for (index, (token, _)) in tokens.iter().enumerate() {
        match token {
            InlineToken::KeywordOpen => keywords.push(index),
            InlineToken::KeywordClose => {
                if let Some(open) = keywords.pop() {
                    closers[open] = Some(index);
                }
            }
            InlineToken::EmphasisOpen => emphases.push(index),
            InlineToken::EmphasisClose => {
                if let Some(open) = emphases.pop() {
                    closers[open] = Some(index);
                }
            }
            _ => {}
        }
    }
    closers
}

/// Find where each bracket opened by a `[` or `[[` token closes, in one pass.
///
/// Brackets are counted per character: `[[` opens two and `]]` closes two. Code spans are
/// skipped whole. A `]]` whose first character already closes a link's bracket leaves a stray
/// `]` before any `(`, so that link has no end.
fn match_link_ends(
    tokens: &[(InlineToken, Range<usize>)],
    closers: &[Option<usize>],
) -> Vec<Option<LinkEnd>> {
    let mut ends = vec![None; tokens.len()];
    // One entry per open bracket: the token it belongs to, and whether it is that token's
    // first character.
    let mut open: Vec<(usize, bool)> = Vec::new();
    let mut j = 0;
    while j < tokens.len() {
        let (token, span) = &tokens[j];
        match token {
            InlineToken::BracketOpen => open.push((j, true)),
            InlineToken::KeywordOpen => {
                open.push((j, true));
                open.push((j, false));
            }
            InlineToken::BracketClose => {
                if let Some((start, true)) = open.pop() {
                    ends[start] = Some(LinkEnd {
                        token: j,
                        offset: span.start,
                    });
                }
            }
            InlineToken::KeywordClose => {
                open.pop();
                if let Some((start, true)) = open.pop() {
                    ends[start] = Some(LinkEnd {
                        token: j,
                        offset: span.start + 1,
                    });
                }
            }
            InlineToken::CodeOpen => {
                if let Some(close) = closers[j] {
                    j = close;
                }
            }
            _ => {}
        }
        j += 1;
    }
    ends
}

/// For every token, the index of the next `)` after it.
fn next_paren_closes(tokens: &[(InlineToken, Range<usize>)]) -> Vec<Option<usize>> {
    let mut next = vec![None; tokens.len()];
    let mut found = None;
    for (index, (token, _)) in tokens.iter().enumerate().rev() {
        next[index] = found;
        if *token == InlineToken::ParenClose {
            found = Some(index);
        }
    }
    next
}

/// Collects the children of one span, merging adjacent text.
#[derive(Default)]
struct InlineFrame {
    children: InlineContent,
}

impl InlineFrame {
    fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(InlineSpan::Text(existing)) = self.children.last_mut() {
            existing.push_str(text);
        } else {
            self.children.push(InlineSpan::Text(text.to_string()));
        }
    }

    fn push_node(&mut self, node: InlineSpan) {
        match node {
            InlineSpan::Text(text) => self.push_str(&text),
            other => self.children.push(other),
        }
    }

    fn into_children(self) -> InlineContent {
        self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funyu::formats::markup::ToFunyuString;

    fn text(value: &str) -> InlineSpan {
        InlineSpan::text(value)
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_inlines("hello, world"), vec![text("hello, world")]);
        assert!(parse_inlines("").is_empty());
    }

    #[test]
    fn test_keyword_emphasis_code() {
        assert_eq!(
            parse_inlines("a [[b]] <<c>> {{d}}"),
            vec![
                text("a "),
                InlineSpan::Keyword(vec![text("b")]),
                text(" "),
                InlineSpan::Emphasis(vec![text("c")]),
                text(" "),
                InlineSpan::code("d"),
            ]
        );
    }

    #[test]
    fn test_nested_emphasis() {
        assert_eq!(
            parse_inlines("<<[[this]] <<is>> [[test]]>>"),
            vec![InlineSpan::Emphasis(vec![
                InlineSpan::Keyword(vec![text("this")]),
                text(" "),
                InlineSpan::Emphasis(vec![text("is")]),
                text(" "),
                InlineSpan::Keyword(vec![text("test")]),
            ])]
        );
    }

    #[test]
    fn test_code_is_literal() {
        assert_eq!(
            parse_inlines("{{[[x]] <<y>>}}"),
            vec![InlineSpan::code("[[x]] <<y>>")]
        );
    }

    #[test]
    fn test_unmatched_openers_are_text() {
        assert_eq!(parse_inlines("[[opened"), vec![text("[[opened")]);
        assert_eq!(parse_inlines("a << b"), vec![text("a << b")]);
        assert_eq!(
            parse_inlines("{{x [[y]]"),
            vec![text("{{x "), InlineSpan::Keyword(vec![text("y")])]
        );
    }

    #[test]
    fn test_link_and_external_link() {
        assert_eq!(
            parse_inlines("[blog](http://blanktar.jp/blog/)"),
            vec![InlineSpan::link("http://blanktar.jp/blog/", vec![text("blog")])]
        );
    }

    #[test]
    fn test_link_with_keywords_inside() {
        assert_eq!(
            parse_inlines("[[[this]] is [[link]]](test)"),
            vec![InlineSpan::link(
                "test",
                vec![
                    InlineSpan::Keyword(vec![text("this")]),
                    text(" is "),
                    InlineSpan::Keyword(vec![text("link")]),
                ]
            )]
        );
    }

    #[test]
    fn test_image_link() {
        assert_eq!(
            parse_inlines("[IMG: a [[cat]]](cat.png)"),
            vec![InlineSpan::image_link("cat.png", "a [[cat]]")]
        );
    }

    #[test]
    fn test_keyword_may_contain_link() {
        assert_eq!(
            parse_inlines("[[outer [inner](uri2)]]"),
            vec![InlineSpan::Keyword(vec![
                text("outer "),
                InlineSpan::link("uri2", vec![text("inner")]),
            ])]
        );
    }

    #[test]
    fn test_link_inside_link_is_literal() {
        assert_eq!(
            parse_inlines("[a[b](u)](v)"),
            vec![InlineSpan::link("v", vec![text("a[b](u)")])]
        );
    }

    #[test]
    fn test_bracket_without_target_is_text() {
        assert_eq!(parse_inlines("[note] (x)"), vec![text("[note] (x)")]);
        assert_eq!(parse_inlines("[open](never"), vec![text("[open](never")]);
    }

    #[test]
    fn test_empty_spans() {
        assert_eq!(parse_inlines("[[]]"), vec![InlineSpan::Keyword(vec![])]);
        assert_eq!(parse_inlines("{{}}"), vec![InlineSpan::code("")]);
    }

    #[test]
    fn test_inner_opener_limited_to_parent() {
        assert_eq!(
            parse_inlines("<<a [[b>> c]]"),
            vec![InlineSpan::Emphasis(vec![text("a [[b")]), text(" c]]")]
        );
    }

    fn nesting(spans: &[InlineSpan]) -> usize {
        spans
            .iter()
            .map(|span| span.children().map_or(0, |children| 1 + nesting(children)))
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_nesting_past_limit_is_literal() {
        let line = format!("{}x{}", "<<".repeat(100_000), ">>".repeat(100_000));
        let spans = parse_inlines(&line);

        assert_eq!(nesting(&spans), MAX_INLINE_DEPTH);
        assert_eq!(spans.to_funyu_string(), line);

        let line = format!("{}x{}", "[[".repeat(50_000), "]]".repeat(50_000));
        let spans = parse_inlines(&line);
        assert_eq!(nesting(&spans), MAX_INLINE_DEPTH);
        assert_eq!(spans.to_funyu_string(), line);
    }

    #[test]
    fn test_link_text_counts_toward_nesting() {
        let inner = format!("{}x{}", "<<".repeat(40), ">>".repeat(40));
        let line = format!("[{}](u)", inner);
        let spans = parse_inlines(&line);

        assert!(matches!(&spans[..], [InlineSpan::Link(_)]));
        assert_eq!(nesting(&spans), MAX_INLINE_DEPTH);
        assert_eq!(spans.to_funyu_string(), line);
    }

    #[test]
    fn test_many_unclosed_brackets_stay_text() {
        let line = "[".repeat(200_000);
        assert_eq!(parse_inlines(&line), vec![text(&line)]);

        let line = "[x ".repeat(50_000);
        assert_eq!(parse_inlines(&line), vec![text(&line)]);
    }

    #[test]
    fn test_stray_close_inside_double_close_ends_no_link() {
        // `]]` closes the link's bracket with its first character.
        assert_eq!(parse_inlines("[a]](u)"), vec![text("[a]](u)")]);
        assert_eq!(
            parse_inlines("[[a] b]](u)"),
            vec![InlineSpan::Keyword(vec![text("a] b")]), text("(u)")]
        );
    }
}

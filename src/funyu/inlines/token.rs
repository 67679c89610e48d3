//! Inline delimiter tokens
//!
//!     The line is cut into delimiter tokens and text runs with a logos lexer. Two-character
//!     delimiters win over their one-character prefixes (logos picks the longest match), so
//!     `[[[` lexes as `[[` followed by `[`. Single `<`, `>`, `{` and `}` never open anything
//!     and come out as Stray tokens, which the parser treats as text.
use logos::Logos;
use std::ops::Range;

/// Delimiters of the inline grammar
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineToken {
    #[token("[[")]
    KeywordOpen,
    #[token("]]")]
    KeywordClose,
    #[token("<<")]
    EmphasisOpen,
    #[token(">>")]
    EmphasisClose,
    #[token("{{")]
    CodeOpen,
    #[token("}}")]
    CodeClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,

    #[regex(r"[<>{}]")]
    Stray,

    #[regex(r"[^\[\]<>{}()]+")]
    Text,
}

impl InlineToken {
    /// Tokens that may start an inline span.
    pub fn is_opener(&self) -> bool {
        matches!(
            self,
            InlineToken::KeywordOpen
                | InlineToken::EmphasisOpen
                | InlineToken::CodeOpen
                | InlineToken::BracketOpen
        )
    }
}

/// Tokenize one line into `(token, byte span)` pairs.
///
/// Every byte of the input ends up in exactly one span.
pub fn tokenize(text: &str) -> Vec<(InlineToken, Range<usize>)> {
    InlineToken::lexer(text)
        .spanned()
        .map(|(result, span)| (result.unwrap_or(InlineToken::Text), span))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<InlineToken> {
        tokenize(text).into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn test_double_delimiters_win() {
        assert_eq!(
            kinds("[[[a]]]"),
            vec![
                InlineToken::KeywordOpen,
                InlineToken::BracketOpen,
                InlineToken::Text,
                InlineToken::KeywordClose,
                InlineToken::BracketClose,
            ]
        );
    }

    #[test]
    fn test_stray_angle_brackets() {
        assert_eq!(
            kinds("a < b"),
            vec![InlineToken::Text, InlineToken::Stray, InlineToken::Text]
        );
    }

    #[test]
    fn test_spans_cover_input() {
        let text = "see [this](http://例え.jp) {{x}}";
        let tokens = tokenize(text);
        let rebuilt: String = tokens.iter().map(|(_, span)| &text[span.clone()]).collect();
        assert_eq!(rebuilt, text);
    }
}

//! Inline content assertions used by parser tests.

use crate::funyu::ast::{InlineContent, InlineSpan, TextContent};
use crate::funyu::testing::matchers::TextMatch;

pub struct InlineAssertion {
    nodes: InlineContent,
    context: String,
}

impl InlineAssertion {
    pub fn new(content: &TextContent, context: impl Into<String>) -> Self {
        Self {
            nodes: content.inlines().to_vec(),
            context: context.into(),
        }
    }

    /// Assert that the inline list starts with the provided expectations.
    pub fn starts_with(self, expectations: &[InlineExpectation]) -> Self {
        assert!(
            self.nodes.len() >= expectations.len(),
            "{}: Inline list shorter than expected (have {}, need {})",
            self.context,
            self.nodes.len(),
            expectations.len()
        );
        for (idx, expectation) in expectations.iter().enumerate() {
            expectation.assert(&self.nodes[idx], &format!("{}:inline[{}]", self.context, idx));
        }
        self
    }

    /// Assert the whole inline list.
    pub fn exactly(self, expectations: &[InlineExpectation]) -> Self {
        let this = self.length(expectations.len());
        this.starts_with(expectations)
    }

    /// Assert the total amount of inline nodes.
    pub fn length(self, expected: usize) -> Self {
        assert_eq!(
            self.nodes.len(),
            expected,
            "{}: Expected {} inline nodes, found {}: {:?}",
            self.context,
            expected,
            self.nodes.len(),
            self.nodes
        );
        self
    }

    /// Exposes the raw inline nodes for custom assertions.
    pub fn nodes(&self) -> &[InlineSpan] {
        &self.nodes
    }
}

#[derive(Debug, Clone)]
pub struct InlineExpectation {
    kind: InlineExpectationKind,
}

#[derive(Debug, Clone)]
enum InlineExpectationKind {
    Text(TextMatch),
    Keyword(Vec<InlineExpectation>),
    Emphasis(Vec<InlineExpectation>),
    Code(TextMatch),
    Link {
        target: String,
        children: Vec<InlineExpectation>,
    },
    ImageLink {
        target: String,
        alt: String,
    },
}

impl InlineExpectation {
    pub fn text(text: impl Into<String>) -> Self {
        Self::text_match(TextMatch::Exact(text.into()))
    }

    pub fn text_match(match_kind: TextMatch) -> Self {
        Self {
            kind: InlineExpectationKind::Text(match_kind),
        }
    }

    pub fn keyword(children: Vec<InlineExpectation>) -> Self {
        Self {
            kind: InlineExpectationKind::Keyword(children),
        }
    }

    pub fn keyword_text(text: impl Into<String>) -> Self {
        Self::keyword(vec![InlineExpectation::text(text)])
    }

    pub fn emphasis(children: Vec<InlineExpectation>) -> Self {
        Self {
            kind: InlineExpectationKind::Emphasis(children),
        }
    }

    pub fn emphasis_text(text: impl Into<String>) -> Self {
        Self::emphasis(vec![InlineExpectation::text(text)])
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self {
            kind: InlineExpectationKind::Code(TextMatch::Exact(text.into())),
        }
    }

    pub fn link(target: impl Into<String>, children: Vec<InlineExpectation>) -> Self {
        Self {
            kind: InlineExpectationKind::Link {
                target: target.into(),
                children,
            },
        }
    }

    pub fn link_text(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self::link(target, vec![InlineExpectation::text(text)])
    }

    pub fn image_link(target: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            kind: InlineExpectationKind::ImageLink {
                target: target.into(),
                alt: alt.into(),
            },
        }
    }

    fn assert(&self, actual: &InlineSpan, context: &str) {
        match (&self.kind, actual) {
            (InlineExpectationKind::Text(expected), InlineSpan::Text(text)) => {
                expected.assert(text, context)
            }
            (InlineExpectationKind::Keyword(expected), InlineSpan::Keyword(children))
            | (InlineExpectationKind::Emphasis(expected), InlineSpan::Emphasis(children)) => {
                assert_children(expected, children, context)
            }
            (InlineExpectationKind::Code(expected), InlineSpan::Code(text)) => {
                expected.assert(text, context)
            }
            (InlineExpectationKind::Link { target, children }, InlineSpan::Link(link)) => {
                assert_eq!(
                    &link.target, target,
                    "{}: Expected link target '{}', found '{}'",
                    context, target, link.target
                );
                assert_children(children, &link.content, context);
            }
            (InlineExpectationKind::ImageLink { target, alt }, InlineSpan::ImageLink(image)) => {
                assert_eq!(
                    (&image.target, &image.alt),
                    (target, alt),
                    "{}: Image link differs",
                    context
                );
            }
            (expected, actual) => panic!(
                "{}: Expected {:?}, found {:?}",
                context, expected, actual
            ),
        }
    }
}

fn assert_children(expected: &[InlineExpectation], actual: &[InlineSpan], context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: Expected {} child spans, found {}: {:?}",
        context,
        expected.len(),
        actual.len(),
        actual
    );
    for (idx, (expectation, span)) in expected.iter().zip(actual).enumerate() {
        expectation.assert(span, &format!("{}>{}", context, idx));
    }
}

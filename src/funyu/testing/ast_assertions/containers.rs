//! Section and postscript assertions

use super::inlines::InlineAssertion;
use super::{assert_child, assert_child_count, BlockAssertion};
use crate::funyu::ast::{PostScript, Section};
use crate::funyu::testing::matchers::TextMatch;

pub struct SectionAssertion<'a> {
    pub(crate) section: &'a Section,
    pub(crate) context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
            .assert(self.section.title.as_string(), &self.context);
        self
    }
    pub fn title_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string())
            .assert(self.section.title.as_string(), &self.context);
        self
    }
    pub fn title_inlines<F>(self, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion),
    {
        assertion(InlineAssertion::new(
            &self.section.title,
            format!("{}::title", self.context),
        ));
        self
    }
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.section.children, expected, &self.context);
        self
    }
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert_child(&self.section.children, index, &self.context, assertion);
        self
    }
}

pub struct PostScriptAssertion<'a> {
    pub(crate) postscript: &'a PostScript,
    pub(crate) context: String,
}

impl<'a> PostScriptAssertion<'a> {
    pub fn date(self, expected: &str) -> Self {
        assert_eq!(
            self.postscript.date, expected,
            "{}: Expected postscript date '{}', found '{}'",
            self.context, expected, self.postscript.date
        );
        self
    }
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.postscript.children, expected, &self.context);
        self
    }
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert_child(&self.postscript.children, index, &self.context, assertion);
        self
    }
}

//! Document-level assertions

use super::{summarize_items, BlockAssertion};
use crate::funyu::ast::Document;

pub struct DocumentAssertion<'a> {
    pub(crate) doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level blocks
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.blocks.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize_items(&self.doc.blocks)
        );
        self
    }

    /// Assert on a specific top-level block by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.doc.blocks.len(),
            "Item index {} out of bounds (document has {} items)",
            index,
            self.doc.blocks.len()
        );

        assertion(BlockAssertion {
            block: &self.doc.blocks[index],
            context: format!("items[{}]", index),
        });
        self
    }

    pub fn metadata_count(self, expected: usize) -> Self {
        let actual = self.doc.metadata.len();
        assert_eq!(
            actual, expected,
            "Expected {} metadata entries, found {}",
            expected, actual
        );
        self
    }

    pub fn metadata_entry(self, key: &str, expected: &str) -> Self {
        let actual = self.doc.metadata.get(key);
        assert_eq!(
            actual,
            Some(expected),
            "Expected metadata '{}' to be '{}', found {:?}",
            key,
            expected,
            actual
        );
        self
    }

    /// Assert the metadata keys, in order
    pub fn metadata_keys(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.metadata.keys().collect();
        assert_eq!(actual, expected, "Unexpected metadata keys");
        self
    }

    pub fn no_metadata(self) -> Self {
        assert!(
            self.doc.metadata.is_empty(),
            "Expected no metadata, found {:?}",
            self.doc.metadata.keys().collect::<Vec<_>>()
        );
        self
    }
}

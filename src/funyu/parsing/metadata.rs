//! Metadata extraction
//!
//!     The first top-level block becomes the document's metadata when it is a paragraph and
//!     every one of its lines reads `key: value`. It is all or nothing: one line without a
//!     colon (or with an empty key) keeps the paragraph as ordinary content.

use crate::funyu::ast::{Block, Metadata, Paragraph};

/// Split a line on its first `:`. Key and value are trimmed; the key must not be empty.
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Read a paragraph as metadata, or `None` if any line does not match.
pub fn paragraph_metadata(paragraph: &Paragraph) -> Option<Metadata> {
    let mut metadata = Metadata::new();
    for line in &paragraph.lines {
        let (key, value) = split_entry(line.as_string())?;
        metadata.insert(key, value);
    }
    Some(metadata)
}

/// Take the metadata off the front of the block list.
pub fn extract_metadata(mut blocks: Vec<Block>) -> (Metadata, Vec<Block>) {
    let metadata = match blocks.first() {
        Some(Block::Paragraph(paragraph)) => paragraph_metadata(paragraph),
        _ => None,
    };
    match metadata {
        Some(metadata) => {
            blocks.remove(0);
            tracing::debug!(entries = metadata.len(), "extracted metadata");
            (metadata, blocks)
        }
        None => (Metadata::new(), blocks),
    }
}

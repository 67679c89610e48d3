//! Metadata formatters
//!
//!     The metadata is not part of any rendered body. These formatters print only the metadata:
//!     `metadata` as `key: value` lines in insertion order, `metadata-json` as a JSON object
//!     with the same order.

use super::registry::{FormatError, Formatter};
use crate::funyu::ast::{Document, Metadata};

/// `key: value` lines, one per entry.
pub fn to_metadata_lines(metadata: &Metadata) -> String {
    metadata
        .iter()
        .map(|(key, value)| format!("{key}: {value}\n"))
        .collect()
}

/// Pretty printed JSON object.
pub fn to_metadata_json(metadata: &Metadata) -> Result<String, FormatError> {
    serde_json::to_string_pretty(metadata)
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

pub struct MetadataFormatter;

impl Formatter for MetadataFormatter {
    fn name(&self) -> &str {
        "metadata"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_metadata_lines(doc.metadata()))
    }

    fn description(&self) -> &str {
        "Document metadata as key: value lines"
    }
}

pub struct MetadataJsonFormatter;

impl Formatter for MetadataJsonFormatter {
    fn name(&self) -> &str {
        "metadata-json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut json = to_metadata_json(doc.metadata())?;
        json.push('\n');
        Ok(json)
    }

    fn description(&self) -> &str {
        "Document metadata as a JSON object"
    }
}

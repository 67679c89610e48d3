//! Output formats by name
//!
//! The CLI picks a [Formatter] from a [FormatRegistry] using the `--format` flag. Registering a
//! second formatter under an existing name replaces the first, which is how the CLI swaps in an
//! html formatter built from the loaded configuration.

use crate::funyu::ast::Document;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Turns a parsed document into one output format.
pub trait Formatter: Send + Sync {
    /// Name used on the command line, e.g. "html" or "metadata-json"
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// One line shown by `--list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name, iterated in name order.
pub struct FormatRegistry {
    by_name: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            by_name: BTreeMap::new(),
        }
    }

    /// html (default options), funyu, treeviz, metadata and metadata-json
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::HtmlFormatter::default());
        registry.register(super::MarkupFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::MetadataFormatter);
        registry.register(super::MetadataJsonFormatter);
        registry
    }

    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        if self.by_name.contains_key(&name) {
            tracing::debug!("replacing formatter '{}'", name);
        }
        self.by_name.insert(name, Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.by_name.get(name).map(Box::as_ref)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.serialize(doc),
            None => Err(FormatError::FormatNotFound(format.to_string())),
        }
    }

    /// Registered formatters in name order
    pub fn formats(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.by_name.values().map(Box::as_ref)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

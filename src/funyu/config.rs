//! Configuration loader for the funyu toolchain.
//!
//! `defaults/funyu.default.yaml` is embedded into the binary so that docs and runtime behavior
//! stay in sync. User files only list the keys they change; they are layered on top of the
//! defaults before deserializing into [`FunyuConfig`].

use crate::funyu::formats::html::HtmlOptions;
use crate::funyu::parsing::ParseOptions;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_YAML: &str = include_str!("../../defaults/funyu.default.yaml");

/// Top-level configuration consumed by funyu applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunyuConfig {
    pub parse: ParseOptions,
    pub html: HtmlOptions,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FunyuConfig {
    /// The embedded defaults.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::from_yaml_layers(&[])
    }

    /// Layer a YAML file over the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_yaml_layers(&[&content])
    }

    /// Layer YAML strings over the defaults, later layers winning.
    pub fn from_yaml_layers(layers: &[&str]) -> Result<Self, ConfigError> {
        let mut merged: Value = serde_yaml::from_str(DEFAULT_YAML)?;
        for layer in layers {
            let value: Value = serde_yaml::from_str(layer)?;
            merge(&mut merged, value);
        }
        Ok(serde_yaml::from_value(merged)?)
    }
}

/// Deep merge of mappings; anything else is replaced.
fn merge(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Mapping(base), Value::Mapping(layer)) => {
            for (key, value) in layer {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        // An empty file parses as null and changes nothing.
        (_, Value::Null) => {}
        (base, layer) => *base = layer,
    }
}

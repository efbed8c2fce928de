//! Marketplace manifest (`marketplace.json`) loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::{MarketcheckError, Result};

/// One entry of the manifest's `plugins` array.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PluginDescriptor {
    /// Plugin name.
    pub name: String,
    /// Plugin directory, relative to the repository root (e.g., `./plugins/foo`).
    pub source: String,
    /// Every other field; governed by the schema, not inspected here.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl PluginDescriptor {
    /// Create a descriptor with no extra fields.
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// A loaded manifest: the raw document plus the descriptors extracted from it.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// The document as read, used for schema validation.
    pub document: Value,
    /// Descriptors in manifest order.
    pub plugins: Vec<PluginDescriptor>,
}

impl Manifest {
    /// Build a manifest from an already-parsed document.
    ///
    /// Extraction is lenient: a missing `plugins` array yields no descriptors,
    /// and entries without a string `name` and `source` are skipped. Those
    /// shapes are the schema check's job to report.
    #[must_use]
    pub fn from_value(document: Value) -> Self {
        let plugins = document
            .get("plugins")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, entry)| {
                        match PluginDescriptor::deserialize(entry) {
                            Ok(descriptor) => Some(descriptor),
                            Err(e) => {
                                debug!(index = idx, error = %e, "skipping malformed plugin entry");
                                None
                            }
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { document, plugins }
    }

    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        load_json(path).map(Self::from_value)
    }
}

/// Read a file and parse it as JSON.
pub(crate) fn load_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|source| MarketcheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| MarketcheckError::Json {
        path: path.to_path_buf(),
        source,
    })
}

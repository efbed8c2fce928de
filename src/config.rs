//! Input locations for a validation run.

use std::path::PathBuf;

use serde_json::Value;

use crate::errors::{MarketcheckError, Result};
use crate::manifest::load_json;
use crate::schema::BUILTIN_SCHEMA;

/// Default manifest location, relative to the repository root.
pub const DEFAULT_MANIFEST: &str = ".claude-plugin/marketplace.json";

/// Default plugins directory, relative to the repository root.
pub const DEFAULT_PLUGINS_DIR: &str = "plugins";

/// Where the manifest schema comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SchemaSource {
    /// The schema embedded in the crate.
    #[default]
    Builtin,
    /// A schema file, relative to the repository root unless absolute.
    File(PathBuf),
}

/// Resolved configuration for one run of the marketplace checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Repository root; plugin sources resolve against it.
    pub root: PathBuf,
    /// Manifest path, relative to `root` unless absolute.
    pub manifest: PathBuf,
    /// Schema to validate the manifest against.
    pub schema: SchemaSource,
    /// Plugins directory, relative to `root`.
    pub plugins_dir: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            schema: SchemaSource::Builtin,
            plugins_dir: PathBuf::from(DEFAULT_PLUGINS_DIR),
        }
    }
}

impl CheckConfig {
    /// Default configuration rooted at `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Absolute-or-root-relative path of the manifest.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }

    /// Load and parse the configured schema.
    ///
    /// # Errors
    ///
    /// Fails if a schema file cannot be read or the schema is not valid JSON.
    pub fn load_schema(&self) -> Result<Value> {
        match &self.schema {
            SchemaSource::Builtin => {
                serde_json::from_str(BUILTIN_SCHEMA).map_err(|source| MarketcheckError::Json {
                    path: PathBuf::from("<builtin schema>"),
                    source,
                })
            }
            SchemaSource::File(path) => load_json(&self.root.join(path)),
        }
    }
}

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod frontmatter;
mod fs_util;
pub mod manifest;
pub mod orphans;
pub mod paths;
pub mod plugin;
pub mod report;
pub mod schema;

// Re-export key types at crate root for convenience.
pub use config::{CheckConfig, SchemaSource};
pub use diagnostics::{Diagnostic, Severity};
pub use errors::{MarketcheckError, Result};
pub use frontmatter::{parse_frontmatter, Frontmatter};
pub use manifest::{Manifest, PluginDescriptor};
pub use orphans::find_orphans;
pub use paths::check_paths;
pub use plugin::{validate_plugin, validate_skill_frontmatter};
pub use report::{check_manifest, run_checks, CheckKind, CheckOutcome, Report};
pub use schema::validate_schema;

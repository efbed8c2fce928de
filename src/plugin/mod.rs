//! Per-plugin directory validation: component directories and SKILL.md
//! frontmatter.

pub mod components;
pub mod skills;

use std::path::Path;

use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::manifest::PluginDescriptor;

pub use components::{check_components, COMPONENT_DIRS};
pub use skills::{validate_skill_frontmatter, validate_skills, SKILL_FILE};

/// Validate one plugin directory, resolved as `root/<source>`.
///
/// Runs the component-directory rule and the SKILL.md rules independently.
/// A plugin whose source does not exist is skipped; the source path check
/// already reports it.
#[must_use]
pub fn validate_plugin(descriptor: &PluginDescriptor, root: &Path) -> Vec<Diagnostic> {
    let plugin_dir = root.join(&descriptor.source);
    if !plugin_dir.exists() {
        debug!(plugin = %descriptor.name, "source missing, skipping plugin checks");
        return Vec::new();
    }

    let mut diags = check_components(descriptor, &plugin_dir);
    diags.extend(validate_skills(descriptor, &plugin_dir));
    diags
}

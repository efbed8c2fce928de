//! Component directory presence check.

use std::path::Path;

use crate::diagnostics::{Diagnostic, P001};
use crate::manifest::PluginDescriptor;

/// Subdirectories that make a directory a plugin.
pub const COMPONENT_DIRS: &[&str] = &["skills", "hooks", "commands", "agents"];

/// Require at least one component directory under `plugin_dir`.
///
/// Emits exactly one `P001` diagnostic, located at the plugin name, when
/// none exists.
#[must_use]
pub fn check_components(descriptor: &PluginDescriptor, plugin_dir: &Path) -> Vec<Diagnostic> {
    if COMPONENT_DIRS.iter().any(|d| plugin_dir.join(d).is_dir()) {
        return Vec::new();
    }

    vec![Diagnostic::error(
        P001,
        descriptor.name.as_str(),
        "no component directory (needs skills/, hooks/, commands/, or agents/)",
    )
    .with_suggestion("Add at least one of skills/, hooks/, commands/, or agents/")]
}

//! Source path existence check.

use std::path::Path;

use tracing::debug;

use crate::manifest::PluginDescriptor;

/// Return the `source` of every descriptor that does not resolve to an
/// existing file or directory under `root`, in manifest order.
///
/// Symlinks are followed, so a dangling link counts as missing.
#[must_use]
pub fn check_paths(descriptors: &[PluginDescriptor], root: &Path) -> Vec<String> {
    descriptors
        .iter()
        .filter(|descriptor| {
            let exists = root.join(&descriptor.source).exists();
            if !exists {
                debug!(
                    plugin = %descriptor.name,
                    source = %descriptor.source,
                    "source path missing"
                );
            }
            !exists
        })
        .map(|descriptor| descriptor.source.clone())
        .collect()
}

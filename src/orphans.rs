//! Orphaned plugin directory detection.

use std::collections::HashSet;
use std::io;
use std::path::{Component, Path};

use tracing::debug;

use crate::fs_util::list_subdirs;
use crate::manifest::PluginDescriptor;

/// Return the subdirectories of `root/plugins_dir` that no descriptor
/// declares, sorted by name.
///
/// A descriptor declares a directory by its `source` path with the
/// `plugins_dir` prefix removed. A missing plugins directory has no orphans.
///
/// # Errors
///
/// Fails only if the plugins directory exists but cannot be listed.
pub fn find_orphans(
    descriptors: &[PluginDescriptor],
    root: &Path,
    plugins_dir: &Path,
) -> io::Result<Vec<String>> {
    let declared: HashSet<String> = descriptors
        .iter()
        .map(|d| declared_dir_name(&d.source, plugins_dir))
        .collect();

    let actual = match list_subdirs(&root.join(plugins_dir)) {
        Ok(dirs) => dirs,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %plugins_dir.display(), "plugins directory absent, no orphans");
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    Ok(actual
        .into_iter()
        .filter(|dir| !declared.contains(dir))
        .collect())
}

/// Strip the plugins directory prefix from a source path.
///
/// Comparison is per path component with `.` ignored, so `./plugins/foo`,
/// `plugins/foo` and `./plugins/foo/` all yield `foo`. A source outside the
/// plugins directory is returned whole.
fn declared_dir_name(source: &str, plugins_dir: &Path) -> String {
    let significant = |path: &Path| -> Vec<String> {
        path.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect()
    };

    let source_parts = significant(Path::new(source));
    let prefix = significant(plugins_dir);

    match source_parts.strip_prefix(prefix.as_slice()) {
        Some(rest) if !rest.is_empty() => rest.join("/"),
        _ => source.to_string(),
    }
}

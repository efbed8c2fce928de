//! Filesystem helpers shared by the orphan and skill checks.

use std::io;
use std::path::Path;

/// List the names of the immediate subdirectories of `dir`, sorted.
///
/// An entry counts only if its own file type is a directory: symlinks are
/// not followed, so a link to a directory is not listed. Names that are not
/// valid UTF-8 are converted lossily.
pub(crate) fn list_subdirs(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

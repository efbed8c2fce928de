//! SKILL.md frontmatter checks for every skill in a plugin.

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::diagnostics::{Diagnostic, E000, F001, F002, F003, F004};
use crate::frontmatter::parse_frontmatter;
use crate::fs_util::list_subdirs;
use crate::manifest::PluginDescriptor;

/// Metadata file expected in each skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// Lowercase letters, digits and hyphens, at least one character.
static KEBAB_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("kebab-case regex"));

/// Check the SKILL.md of every immediate subdirectory of `plugin_dir/skills`.
///
/// Skill directories without a SKILL.md are ignored. Diagnostics are located
/// at the SKILL.md path relative to the repository root.
#[must_use]
pub fn validate_skills(descriptor: &PluginDescriptor, plugin_dir: &Path) -> Vec<Diagnostic> {
    let skills_dir = plugin_dir.join("skills");
    if !skills_dir.is_dir() {
        return Vec::new();
    }

    let skill_names = match list_subdirs(&skills_dir) {
        Ok(names) => names,
        Err(e) => {
            return vec![Diagnostic::error(
                E000,
                format!("{}/skills", source_label(&descriptor.source)),
                format!("cannot list skills directory: {e}"),
            )];
        }
    };

    let mut diags = Vec::new();
    for skill in skill_names {
        let skill_file = skills_dir.join(&skill).join(SKILL_FILE);
        if !skill_file.is_file() {
            debug!(plugin = %descriptor.name, skill = %skill, "no SKILL.md, skipping");
            continue;
        }

        let label = format!(
            "{}/skills/{skill}/{SKILL_FILE}",
            source_label(&descriptor.source)
        );
        // Only the frontmatter matters, so invalid UTF-8 in the body is replaced.
        match std::fs::read(&skill_file) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                diags.extend(validate_skill_frontmatter(&label, &content));
            }
            Err(e) => diags.push(Diagnostic::error(
                E000,
                label,
                format!("cannot read {SKILL_FILE}: {e}"),
            )),
        }
    }
    diags
}

/// Check the frontmatter of one SKILL.md whose content is `content`.
///
/// A file without frontmatter gets a single `F001`; otherwise the name and
/// description rules are checked independently.
#[must_use]
pub fn validate_skill_frontmatter(label: &str, content: &str) -> Vec<Diagnostic> {
    let Some(fm) = parse_frontmatter(content) else {
        return vec![
            Diagnostic::error(F001, label, "missing YAML frontmatter")
                .with_suggestion(
                    "Start the file with a `---` block containing name and description",
                ),
        ];
    };

    let mut diags = Vec::new();

    match fm.name.as_deref() {
        None => diags.push(Diagnostic::error(F002, label, "missing \"name\" field")),
        Some(name) if !KEBAB_CASE_RE.is_match(name) => diags.push(
            Diagnostic::error(
                F003,
                label,
                format!("name \"{name}\" is not kebab-case (must match ^[a-z0-9-]+$)"),
            )
            .with_suggestion("Use lowercase letters, digits, and hyphens (e.g., \"my-skill\")"),
        ),
        Some(_) => {}
    }

    if fm.description.as_deref().is_none_or(|d| d.trim().is_empty()) {
        diags.push(Diagnostic::error(
            F004,
            label,
            "missing or empty \"description\" field",
        ));
    }

    diags
}

/// Render a source path with `.` components removed and `/` separators.
fn source_label(source: &str) -> String {
    Path::new(source)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

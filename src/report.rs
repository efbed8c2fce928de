//! Runs every marketplace check and aggregates the results.
//!
//! Checks run in a fixed order (schema, source paths, orphans, plugin
//! contents) and each runs to completion regardless of the others. The run
//! passes only if every check produced no diagnostics.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::CheckConfig;
use crate::diagnostics::{Diagnostic, Severity, E000, M002, M003};
use crate::errors::Result;
use crate::manifest::Manifest;
use crate::orphans::find_orphans;
use crate::paths::check_paths;
use crate::plugin::validate_plugin;
use crate::schema::validate_schema;

/// The check categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Manifest conformance to the JSON Schema.
    Schema,
    /// Every declared source exists.
    SourcePaths,
    /// No undeclared directories under the plugins directory.
    Orphans,
    /// Component directories and SKILL.md frontmatter of each plugin.
    SkillFrontmatter,
}

/// Diagnostics produced by one check category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckOutcome {
    /// A category passes when it found nothing.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Result of a full validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Manifest file name, for the report header.
    pub manifest_name: String,
    /// Number of plugin descriptors checked.
    pub plugin_count: usize,
    /// One outcome per category, in [`CheckKind`] order.
    pub checks: Vec<CheckOutcome>,
}

impl Report {
    /// `true` when every category passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckOutcome::passed)
    }

    /// Process exit code for this report: 0 on pass, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.passed())
    }

    /// Total number of diagnostics across all categories.
    #[must_use]
    pub fn diagnostic_count(&self) -> usize {
        self.checks.iter().map(|c| c.diagnostics.len()).sum()
    }

    /// The outcome of one category.
    #[must_use]
    pub fn check(&self, kind: CheckKind) -> Option<&CheckOutcome> {
        self.checks.iter().find(|c| c.kind == kind)
    }

    /// Machine-readable form of the report.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let checks: Vec<Value> = self
            .checks
            .iter()
            .map(|c| {
                serde_json::json!({
                    "check": c.kind,
                    "passed": c.passed(),
                    "diagnostics": c.diagnostics,
                })
            })
            .collect();
        serde_json::json!({
            "manifest": self.manifest_name,
            "passed": self.passed(),
            "plugin_count": self.plugin_count,
            "checks": checks,
        })
    }
}

/// Load the configured manifest and schema, then run every check.
///
/// # Errors
///
/// Fails only if the manifest or the schema cannot be read or parsed; no
/// check can run without them.
pub fn run_checks(config: &CheckConfig) -> Result<Report> {
    let manifest = Manifest::load(&config.manifest_path())?;
    let schema = config.load_schema()?;
    Ok(check_manifest(&manifest, &schema, config))
}

/// Run every check against an already-loaded manifest and schema.
#[must_use]
pub fn check_manifest(manifest: &Manifest, schema: &Value, config: &CheckConfig) -> Report {
    let schema_diags = validate_schema(schema, &manifest.document);
    info!(violations = schema_diags.len(), "schema check done");

    let path_diags: Vec<Diagnostic> = check_paths(&manifest.plugins, &config.root)
        .into_iter()
        .map(|source| Diagnostic::error(M002, source, "source path does not exist"))
        .collect();
    info!(missing = path_diags.len(), "source path check done");

    let orphan_diags = match find_orphans(&manifest.plugins, &config.root, &config.plugins_dir) {
        Ok(orphans) => orphans
            .into_iter()
            .map(|dir| {
                Diagnostic::new(
                    Severity::Warning,
                    M003,
                    dir,
                    "directory is not declared in the manifest",
                )
                .with_suggestion("Add a plugin entry for it or remove the directory")
            })
            .collect(),
        Err(e) => vec![Diagnostic::error(
            E000,
            config.plugins_dir.display().to_string(),
            format!("cannot list plugins directory: {e}"),
        )],
    };
    info!(orphans = orphan_diags.len(), "orphan check done");

    let plugin_diags: Vec<Diagnostic> = manifest
        .plugins
        .iter()
        .flat_map(|descriptor| validate_plugin(descriptor, &config.root))
        .collect();
    info!(issues = plugin_diags.len(), "plugin content check done");

    let manifest_name = config
        .manifest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.manifest.display().to_string());

    Report {
        manifest_name,
        plugin_count: manifest.plugins.len(),
        checks: vec![
            CheckOutcome {
                kind: CheckKind::Schema,
                diagnostics: schema_diags,
            },
            CheckOutcome {
                kind: CheckKind::SourcePaths,
                diagnostics: path_diags,
            },
            CheckOutcome {
                kind: CheckKind::Orphans,
                diagnostics: orphan_diags,
            },
            CheckOutcome {
                kind: CheckKind::SkillFrontmatter,
                diagnostics: plugin_diags,
            },
        ],
    }
}

fn write_bullets<'a>(
    f: &mut fmt::Formatter<'_>,
    lines: impl IntoIterator<Item = &'a Diagnostic>,
    location_only: bool,
) -> fmt::Result {
    for d in lines {
        if location_only {
            writeln!(f, "    - {}", d.location)?;
        } else {
            writeln!(f, "    - {d}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validating {}...", self.manifest_name)?;

        for check in &self.checks {
            let diags = &check.diagnostics;
            match (check.kind, check.passed()) {
                (CheckKind::Schema, true) => writeln!(f, "  ✓ Schema validation passed")?,
                (CheckKind::Schema, false) => {
                    writeln!(f, "  ✗ Schema validation failed:")?;
                    write_bullets(f, diags, false)?;
                }
                (CheckKind::SourcePaths, true) => {
                    writeln!(f, "  ✓ All {} source paths exist", self.plugin_count)?;
                }
                (CheckKind::SourcePaths, false) => {
                    writeln!(f, "  ✗ Source path missing:")?;
                    write_bullets(f, diags, true)?;
                }
                (CheckKind::Orphans, true) => writeln!(f, "  ✓ No orphaned plugin directories")?,
                (CheckKind::Orphans, false) if diags.iter().all(Diagnostic::is_warning) => {
                    let dirs: Vec<&str> = diags.iter().map(|d| d.location.as_str()).collect();
                    writeln!(f, "  ⚠ Orphaned directories: {}", dirs.join(", "))?;
                }
                (CheckKind::Orphans, false) => {
                    writeln!(f, "  ✗ Orphan check failed:")?;
                    write_bullets(f, diags, false)?;
                }
                (CheckKind::SkillFrontmatter, true) => {
                    writeln!(f, "  ✓ SKILL.md frontmatter valid")?;
                }
                (CheckKind::SkillFrontmatter, false) => {
                    writeln!(f, "  ✗ SKILL.md frontmatter issues:")?;
                    write_bullets(f, diags, false)?;
                }
            }
        }

        if self.passed() {
            write!(f, "All checks passed.")
        } else {
            write!(f, "{} error(s) found.", self.diagnostic_count())
        }
    }
}

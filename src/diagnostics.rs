//! Structured diagnostics produced by every marketplace check.
//!
//! A diagnostic is one violation: where it was found, what is wrong, and a
//! stable code. Diagnostics are built once and never mutated afterwards.

use std::fmt;

use serde::Serialize;

/// Severity of a diagnostic message.
///
/// Both severities fail a run; severity only changes how a check is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A rule violation.
    Error,
    /// Something suspicious that still needs fixing (e.g., an orphaned directory).
    Warning,
}

/// A single violation found by one of the checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Stable code (e.g., `"M001"`, `"F003"`).
    pub code: &'static str,
    /// Where the problem is: a JSON pointer, a source path, a plugin name,
    /// or a file path relative to the repository root.
    pub location: String,
    /// Human-readable message.
    pub message: String,
    /// Suggested fix (actionable text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    #[must_use]
    pub fn new(
        severity: Severity,
        code: &'static str,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code,
            location: location.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Shorthand for an error-severity diagnostic.
    #[must_use]
    pub fn error(
        code: &'static str,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, code, location, message)
    }

    /// Set a suggested fix for this diagnostic.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Returns `true` if this diagnostic is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Renders as `location: message`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

// ── Codes ───────────────────────────────────────────────────────────────

/// Infrastructure problem inside a check (unreadable file or directory).
pub const E000: &str = "E000";

// Manifest-level checks (M000–M003)

/// Schema could not be compiled.
pub const M000: &str = "M000";
/// Manifest violates the schema.
pub const M001: &str = "M001";
/// Declared plugin source does not exist.
pub const M002: &str = "M002";
/// Directory under the plugins root is not declared in the manifest.
pub const M003: &str = "M003";

// Plugin-level checks (P001)

/// Plugin has none of the recognized component directories.
pub const P001: &str = "P001";

// SKILL.md frontmatter checks (F001–F004)

/// SKILL.md has no frontmatter block.
pub const F001: &str = "F001";
/// Frontmatter has no `name`.
pub const F002: &str = "F002";
/// Frontmatter `name` is not kebab-case.
pub const F003: &str = "F003";
/// Frontmatter `description` is missing or empty.
pub const F004: &str = "F004";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_location_and_message() {
        let d = Diagnostic::error(M001, "/plugins/0", "\"source\" is a required property");
        assert_eq!(d.to_string(), "/plugins/0: \"source\" is a required property");
    }

    #[test]
    fn error_constructor_sets_severity() {
        let d = Diagnostic::error(F002, "a/SKILL.md", "missing \"name\" field");
        assert_eq!(d.severity, Severity::Error);
        assert!(!d.is_warning());
        assert!(d.suggestion.is_none());
    }

    #[test]
    fn warning_is_warning() {
        let d = Diagnostic::new(Severity::Warning, M003, "stray", "not declared in manifest");
        assert!(d.is_warning());
    }

    #[test]
    fn with_suggestion_sets_suggestion() {
        let d = Diagnostic::error(F003, "x", "bad name").with_suggestion("Use my-skill");
        assert_eq!(d.suggestion.as_deref(), Some("Use my-skill"));
    }

    #[test]
    fn serialize_json_omits_missing_suggestion() {
        let d = Diagnostic::error(M002, "./plugins/gone", "source path does not exist");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["code"], "M002");
        assert_eq!(json["location"], "./plugins/gone");
        assert!(json.get("suggestion").is_none());
    }

    #[test]
    fn codes_are_unique() {
        let codes = [E000, M000, M001, M002, M003, P001, F001, F002, F003, F004];
        let mut seen = std::collections::HashSet::new();
        for code in &codes {
            assert!(seen.insert(code), "duplicate code: {code}");
        }
    }
}

//! Lightweight SKILL.md frontmatter extraction.
//!
//! This is deliberately not a YAML parser. It pulls exactly two fields,
//! `name` and `description`, out of the leading `---` block using a fixed set
//! of line patterns. The description is tried in a strict priority order:
//!
//! 1. inline quoted: `description: "text"` or `description: 'text'`
//! 2. inline unquoted: `description: text`
//! 3. block scalar: `description: >` / `|` (optionally `>-` / `|-`) followed
//!    by indented lines
//!
//! The first pattern that matches wins, even if a later one would also match.
//!
//! Quoted values are not unescaped. `description: "say \"hi\""` yields
//! `say \"hi\"` verbatim.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Leading `---` block. The closing delimiter must end its line.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\n(.*?)\n---(?:\n|\z)").expect("frontmatter block regex")
});

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^name:[ \t]*["']?([^"'\n]+)["']?[ \t]*$"#).expect("name regex")
});

static QUOTED_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^description:[ \t]*["'](.+?)["'][ \t]*$"#)
        .expect("quoted description regex")
});

// First character may not be whitespace, otherwise `description: >` would
// match here with the space as the first value character.
static UNQUOTED_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^description:[ \t]*([^>|"'\s].*)$"#).expect("unquoted description regex")
});

static BLOCK_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^description:[ \t]*[>|]-?[ \t]*\n((?:[ \t]+.+\n?|[ \t]*\n)+)")
        .expect("block description regex")
});

/// The fields extracted from a frontmatter block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Frontmatter {
    /// Skill name, trimmed. `None` when absent or blank.
    pub name: Option<String>,
    /// Skill description, trimmed. `description: ""` gives `None`; a quoted
    /// whitespace-only value such as `"   "` gives `Some("")`.
    pub description: Option<String>,
}

/// Extract `name` and `description` from the leading frontmatter block.
///
/// Returns `None` when `content` does not start with a `---` line followed by
/// a closing `---` line. `\r\n` line endings are accepted.
#[must_use]
pub fn parse_frontmatter(content: &str) -> Option<Frontmatter> {
    let normalized = content.replace("\r\n", "\n");
    let block = BLOCK_RE.captures(&normalized)?.get(1)?.as_str();

    Some(Frontmatter {
        name: extract_name(block),
        description: extract_description(block),
    })
}

fn extract_name(block: &str) -> Option<String> {
    let name = NAME_RE.captures(block)?.get(1)?.as_str().trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn extract_description(block: &str) -> Option<String> {
    if let Some(caps) = QUOTED_DESCRIPTION_RE.captures(block) {
        return Some(caps[1].trim().to_string());
    }
    if let Some(caps) = UNQUOTED_DESCRIPTION_RE.captures(block) {
        return Some(caps[1].trim().to_string());
    }
    if let Some(caps) = BLOCK_DESCRIPTION_RE.captures(block) {
        let folded = caps[1]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        return Some(folded);
    }
    None
}

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Return a `Command` for the `marketcheck` binary built by Cargo.
fn marketcheck() -> Command {
    cargo_bin_cmd!("marketcheck")
}

/// Write a marketplace.json under `root/.claude-plugin/`.
fn write_manifest(root: &Path, plugins: &str) {
    let dir = root.join(".claude-plugin");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("marketplace.json"),
        format!(
            r#"{{ "name": "test-market", "owner": {{ "name": "Tests" }}, "plugins": {plugins} }}"#
        ),
    )
    .unwrap();
}

fn write_skill(root: &Path, plugin: &str, skill: &str, content: &str) {
    let dir = root.join("plugins").join(plugin).join("skills").join(skill);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("SKILL.md"), content).unwrap();
}

/// A repository where every check passes.
fn valid_repo() -> TempDir {
    let root = tempdir().unwrap();
    write_manifest(
        root.path(),
        r#"[
            { "name": "pdf-tools", "source": "./plugins/pdf-tools" },
            { "name": "git-hooks", "source": "./plugins/git-hooks" }
        ]"#,
    );
    write_skill(
        root.path(),
        "pdf-tools",
        "pdf-merge",
        "---\nname: pdf-merge\ndescription: Merges PDF files.\n---\n# PDF merge\n",
    );
    write_skill(
        root.path(),
        "pdf-tools",
        "pdf-split",
        "---\nname: 'pdf-split'\ndescription: >-\n  Splits PDF files\n  page by page.\n---\n",
    );
    fs::create_dir_all(root.path().join("plugins/git-hooks/hooks")).unwrap();
    root
}

fn root_arg(root: &TempDir) -> &str {
    root.path().to_str().unwrap()
}

// ── Global flags ────────────────────────────────────────────────────

#[test]
fn help_flag() {
    marketcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("marketplace"));
}

#[test]
fn version_flag() {
    marketcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn about_flag() {
    marketcheck()
        .arg("--about")
        .assert()
        .success()
        .stdout(predicate::str::contains("marketcheck:"))
        .stdout(predicate::str::contains("licence:"));
}

#[test]
fn no_args_shows_usage() {
    marketcheck()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ── validate ────────────────────────────────────────────────────────

#[test]
fn validate_valid_repo() {
    let root = valid_repo();
    marketcheck()
        .args(["validate", "--root", root_arg(&root)])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Validating marketplace.json..."))
        .stdout(predicate::str::contains("✓ Schema validation passed"))
        .stdout(predicate::str::contains("✓ All 2 source paths exist"))
        .stdout(predicate::str::contains("✓ No orphaned plugin directories"))
        .stdout(predicate::str::contains("✓ SKILL.md frontmatter valid"))
        .stdout(predicate::str::contains("All checks passed."));
}

#[test]
fn check_alias() {
    let root = valid_repo();
    marketcheck()
        .args(["check", "--root", root_arg(&root)])
        .assert()
        .success();
}

#[test]
fn validate_missing_source_fails() {
    let root = valid_repo();
    write_manifest(
        root.path(),
        r#"[
            { "name": "pdf-tools", "source": "./plugins/pdf-tools" },
            { "name": "git-hooks", "source": "./plugins/git-hooks" },
            { "name": "vanished", "source": "./plugins/vanished" }
        ]"#,
    );
    marketcheck()
        .args(["validate", "--root", root_arg(&root)])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ Source path missing:"))
        .stdout(predicate::str::contains("    - ./plugins/vanished\n"))
        .stdout(predicate::str::contains("1 error(s) found."));
}

#[test]
fn validate_orphan_fails() {
    let root = valid_repo();
    fs::create_dir_all(root.path().join("plugins/forgotten/commands")).unwrap();
    marketcheck()
        .args(["validate", "--root", root_arg(&root)])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("⚠ Orphaned directories: forgotten"));
}

#[test]
fn validate_bad_skill_name_fails() {
    let root = valid_repo();
    write_skill(
        root.path(),
        "pdf-tools",
        "bad",
        "---\nname: \"My_Skill\"\ndescription: \"Bad name.\"\n---\n",
    );
    marketcheck()
        .args(["validate", "--root", root_arg(&root)])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ SKILL.md frontmatter issues:"))
        .stdout(predicate::str::contains(
            "plugins/pdf-tools/skills/bad/SKILL.md: name \"My_Skill\" is not kebab-case",
        ));
}

#[test]
fn validate_schema_violation_fails() {
    let root = valid_repo();
    write_manifest(
        root.path(),
        r#"[
            { "name": "Pdf Tools", "source": "./plugins/pdf-tools" },
            { "name": "git-hooks", "source": "./plugins/git-hooks" }
        ]"#,
    );
    marketcheck()
        .args(["validate", "--root", root_arg(&root)])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ Schema validation failed:"))
        .stdout(predicate::str::contains("    - /plugins/0/name: "));
}

#[test]
fn validate_custom_schema() {
    let root = valid_repo();
    fs::write(
        root.path().join("strict.schema.json"),
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "$id": "https://example.com/strict.schema.json",
            "type": "object",
            "required": ["metadata"]
        }"#,
    )
    .unwrap();
    marketcheck()
        .args(["validate", "--root", root_arg(&root), "--schema", "strict.schema.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("    - /: "))
        .stdout(predicate::str::contains("metadata"));
}

#[test]
fn validate_custom_paths() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join("meta")).unwrap();
    fs::write(
        root.path().join("meta/market.json"),
        r#"{ "plugins": [ { "name": "one", "source": "./ext/one" } ] }"#,
    )
    .unwrap();
    fs::write(root.path().join("open.schema.json"), "{}").unwrap();
    fs::create_dir_all(root.path().join("ext/one/agents")).unwrap();
    marketcheck()
        .args([
            "validate",
            "--root",
            root_arg(&root),
            "--manifest",
            "meta/market.json",
            "--schema",
            "open.schema.json",
            "--plugins-dir",
            "ext",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Validating market.json..."));
}

#[test]
fn validate_json_format() {
    let root = valid_repo();
    fs::create_dir_all(root.path().join("plugins/forgotten")).unwrap();
    let output = marketcheck()
        .args(["validate", "--root", root_arg(&root), "--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["plugin_count"], 2);
    assert_eq!(json["checks"][2]["check"], "orphans");
    assert_eq!(json["checks"][2]["diagnostics"][0]["location"], "forgotten");
    assert_eq!(json["checks"][2]["diagnostics"][0]["severity"], "warning");
}

#[test]
fn validate_missing_manifest_is_fatal() {
    let root = tempdir().unwrap();
    marketcheck()
        .args(["validate", "--root", root_arg(&root)])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: cannot read"));
}

#[test]
fn validate_malformed_manifest_is_fatal() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join(".claude-plugin")).unwrap();
    fs::write(root.path().join(".claude-plugin/marketplace.json"), "{ plugins: [").unwrap();
    marketcheck()
        .args(["validate", "--root", root_arg(&root)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: invalid JSON"));
}

#[test]
fn validate_is_idempotent() {
    let root = valid_repo();
    write_skill(root.path(), "pdf-tools", "broken", "no frontmatter\n");
    let first = marketcheck()
        .args(["validate", "--root", root_arg(&root)])
        .output()
        .unwrap();
    let second = marketcheck()
        .args(["validate", "--root", root_arg(&root)])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.status.code(), Some(1));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let root = valid_repo();
    marketcheck()
        .env_remove("RUST_LOG")
        .args(["-v", "validate", "--root", root_arg(&root)])
        .assert()
        .success()
        .stderr(predicate::str::contains("schema check done"))
        .stdout(predicate::str::contains("schema check done").not());
}

// ── frontmatter ─────────────────────────────────────────────────────

#[test]
fn frontmatter_prints_json() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("SKILL.md");
    fs::write(&file, "---\nname: foo\ndescription: |\n  line one\n  line two\n---\nbody\n").unwrap();
    let output = marketcheck()
        .args(["frontmatter", file.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["name"], "foo");
    assert_eq!(json["description"], "line one line two");
}

#[test]
fn frontmatter_missing_block_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("SKILL.md");
    fs::write(&file, "# Just a heading\n").unwrap();
    marketcheck()
        .args(["frontmatter", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing YAML frontmatter"));
}

#[test]
fn frontmatter_unreadable_file_fails() {
    marketcheck()
        .args(["frontmatter", "/nonexistent/SKILL.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

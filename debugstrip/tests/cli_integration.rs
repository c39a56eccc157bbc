#![cfg(feature = "cli")]
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use braces::{brace_paths, BraceConfig};
use insta::assert_snapshot;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const AGENT_GO: &str = r#"package internal

func Run(id string) {
	log.Debug("starting")
	log.WithField("id", id).
		Debug("running")
	log.Info("run")
}
"#;

const AGENT_GO_STRIPPED: &str = r#"package internal

func Run(id string) {
	log.Info("run")
}
"#;

const CLEAN_GO: &str = "package internal\n\nfunc Clean() {}\n";

const NOTES_GO: &str = "package internal\n\n// log.Debug(\"kept\")\nfunc Notes() {}\n";

fn to_braces(paths: &[&str]) -> String {
    let braces_config = BraceConfig::default();
    brace_paths(paths, &braces_config).expect("Brace error")
}

fn collect_all_files(root: &Path) -> Vec<String> {
    let mut files = Vec::new();
    collect_files_recursive(root, root, &mut files);
    files.sort();
    files
}

fn collect_files_recursive(root: &Path, current: &Path, files: &mut Vec<String>) {
    if let Ok(entries) = fs::read_dir(current) {
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() {
                if let Ok(relative) = path.strip_prefix(root) {
                    files.push(relative.to_str().unwrap().to_string());
                }
            } else if path.is_dir() {
                collect_files_recursive(root, &path, files);
            }
        }
    }
}

fn setup_test_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let internal = temp.path().join("internal");
    fs::create_dir(&internal).unwrap();
    fs::write(internal.join("agent.go"), AGENT_GO).unwrap();
    fs::write(internal.join("clean.go"), CLEAN_GO).unwrap();
    fs::write(internal.join("notes.go"), NOTES_GO).unwrap();
    temp
}

fn debugstrip(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("debugstrip");
    cmd.current_dir(dir).env("DEBUGSTRIP_DEBUG", "0");
    cmd
}

fn stderr_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().clone();
    String::from_utf8(output.stderr).unwrap()
}

#[test]
fn cli_strips_debug_statements_in_place() {
    let temp = setup_test_project();

    let stderr = stderr_of(debugstrip(temp.path()).arg("."));
    assert_snapshot!(stderr, @r"
    Removing debug logging statements...

      ✓ internal/agent.go

    === Strip Summary ===
    Scanned 3 file(s)
    Files modified: 1
    Removed 2 statement(s) (3 line(s))
    Left debug markers in 1 file(s) (comments or unterminated calls)
    ");

    let internal = temp.path().join("internal");
    assert_eq!(
        fs::read_to_string(internal.join("agent.go")).unwrap(),
        AGENT_GO_STRIPPED
    );
    assert_eq!(fs::read_to_string(internal.join("clean.go")).unwrap(), CLEAN_GO);
    assert_eq!(fs::read_to_string(internal.join("notes.go")).unwrap(), NOTES_GO);
}

#[test]
fn cli_dry_run_does_not_modify_filesystem() {
    let temp = setup_test_project();

    // Snapshot initial file structure
    let initial_files = collect_all_files(temp.path());
    let initial_refs: Vec<&str> = initial_files.iter().map(|s| s.as_str()).collect();
    assert_snapshot!(to_braces(&initial_refs), @"internal/{agent,clean,notes}.go");

    let stderr = stderr_of(debugstrip(temp.path()).args(["--dry-run", "internal"]));
    assert!(stderr.contains("=== Dry Run Summary ==="));
    assert!(stderr.contains("Would modify 1 file(s)"));

    let after_files = collect_all_files(temp.path());
    assert_eq!(
        initial_files, after_files,
        "Dry run should not create or delete any files!"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("internal/agent.go")).unwrap(),
        AGENT_GO,
        "Dry run modified a file!"
    );
}

#[test]
fn cli_second_run_is_a_no_op() {
    let temp = setup_test_project();

    debugstrip(temp.path()).assert().success();
    let stderr = stderr_of(&mut debugstrip(temp.path()));

    assert!(stderr.contains("Files modified: 0"));
    assert!(!stderr.contains("✓"));
}

#[test]
fn cli_unreadable_file_does_not_stop_the_batch() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.go"), AGENT_GO).unwrap();
    fs::write(temp.path().join("bad.go"), [0xffu8, 0xfe]).unwrap();

    let output = debugstrip(temp.path())
        .assert()
        .failure()
        .get_output()
        .clone();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(stderr.contains("  ✓ a.go"));
    assert!(stderr.contains("Errors: 1"));
    assert!(stderr.contains("failed to read"));
    assert!(stderr.contains("bad.go"));
    assert_eq!(
        fs::read_to_string(temp.path().join("a.go")).unwrap(),
        AGENT_GO_STRIPPED
    );
    assert_eq!(fs::read(temp.path().join("bad.go")).unwrap(), [0xffu8, 0xfe]);
}

#[test]
fn cli_uses_config_file_and_extension() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("strip.toml"),
        "[debugstrip]\ndebug-call = \"log::debug!(\"\ncall-close = \");\"\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("lib.rs"),
        "fn f() {\n    log::debug!(\"x\");\n    g();\n}\n",
    )
    .unwrap();

    debugstrip(temp.path())
        .args(["--config", "strip.toml", "--ext", "rs"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("lib.rs")).unwrap(),
        "fn f() {\n    g();\n}\n"
    );
}

#[test]
fn cli_rejects_invalid_config() {
    let temp = setup_test_project();
    fs::write(
        temp.path().join(".debugstrip.toml"),
        "[debugstrip]\nunterminated = \"sometimes\"\n",
    )
    .unwrap();

    debugstrip(temp.path()).assert().failure();
    assert_eq!(
        fs::read_to_string(temp.path().join("internal/agent.go")).unwrap(),
        AGENT_GO
    );
}

#[test]
fn cli_missing_source_fails() {
    let temp = TempDir::new().unwrap();

    let output = debugstrip(temp.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .get_output()
        .clone();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Source path does not exist: does-not-exist"));
}

#[test]
fn cli_help_prints_usage() {
    let temp = TempDir::new().unwrap();

    let output = debugstrip(temp.path())
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Usage: debugstrip"));
}

// crates/warmwalrus/tests/integration_cleanmarkers.rs

use assert_cmd::Command;
use filetime::{set_file_mtime, FileTime};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

const MARKED: &str = ".......... START ..........\nkeep me\n.......... END ..........\ndrop me\n";

fn write_file(dir: &Path, rel: &str, contents: &str) -> PathBuf {
    let p = dir.join(rel);
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&p, contents).unwrap();
    p
}

fn warmwalrus() -> Command {
    let mut cmd = Command::cargo_bin("warmwalrus").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// --- Test: Marker extraction ---
#[test]
fn test_cleanmarkers_extracts_marked_content() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "notes.md", MARKED);

    warmwalrus()
        .args(["cleanmarkers", "-v"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed:"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "keep me\n");
}

/// --- Test: Dry run ---
/// Dry runs report would-be changes and leave every file as it was.
#[test]
fn test_cleanmarkers_dry_run_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let marked = write_file(dir.path(), "marked.md", MARKED);
    let plain = write_file(dir.path(), "plain.md", "nothing to do\n");

    warmwalrus()
        .args(["cleanmarkers", "--dry-run", "-v"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Would process: {}", marked.display())))
        .stdout(predicate::str::contains(format!(
            "Would skip (no markers): {}",
            plain.display()
        )));

    assert_eq!(fs::read_to_string(&marked).unwrap(), MARKED);
    assert_eq!(fs::read_to_string(&plain).unwrap(), "nothing to do\n");
}

/// --- Test: Renaming ---
#[test]
fn test_cleanmarkers_renames_from_title() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "export.md", "CLAUDE_THREAD_TITLE: My Title\nbody\n");

    warmwalrus()
        .args(["cleanmarkers", "--strategies", "file_renamer", "--no-claude-url"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(!file.exists());
    assert_eq!(fs::read_to_string(dir.path().join("My Title.md")).unwrap(), "body\n");
}

/// --- Test: No overwrite ---
#[test]
fn test_cleanmarkers_no_overwrite_keeps_existing_target() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "export.md", "CLAUDE_THREAD_TITLE: Taken\nbody\n");
    let taken = write_file(dir.path(), "Taken.md", "precious\n");

    warmwalrus()
        .args(["cleanmarkers", "--no-overwrite", "--no-claude-url"])
        .arg(&file)
        .assert()
        .success();

    assert!(file.exists());
    assert_eq!(fs::read_to_string(&taken).unwrap(), "precious\n");
}

/// --- Test: Default excludes ---
#[test]
fn test_cleanmarkers_skips_git_directories_by_default() {
    let dir = TempDir::new().unwrap();
    let hidden = write_file(dir.path(), ".git/info.md", MARKED);
    let visible = write_file(dir.path(), "docs/info.md", MARKED);

    warmwalrus()
        .arg("cleanmarkers")
        .arg(dir.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&hidden).unwrap(), MARKED);
    assert_eq!(fs::read_to_string(&visible).unwrap(), "keep me\n");
}

/// --- Test: Age filter ---
#[test]
fn test_cleanmarkers_age_filter_skips_old_files() {
    let dir = TempDir::new().unwrap();
    let old = write_file(dir.path(), "old.md", MARKED);
    let fresh = write_file(dir.path(), "fresh.md", MARKED);
    let long_ago = SystemTime::now() - Duration::from_secs(3 * 86_400);
    set_file_mtime(&old, FileTime::from_system_time(long_ago)).unwrap();

    warmwalrus()
        .args(["cleanmarkers", "--age", "1d"])
        .arg(dir.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&old).unwrap(), MARKED);
    assert_eq!(fs::read_to_string(&fresh).unwrap(), "keep me\n");
}

/// --- Test: Bad age ---
/// Configuration errors stop the run before any file is touched.
#[test]
fn test_cleanmarkers_rejects_bad_age() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "notes.md", MARKED);

    warmwalrus()
        .args(["cleanmarkers", "--age", "bogus"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid age format"));

    assert_eq!(fs::read_to_string(&file).unwrap(), MARKED);
}

/// --- Test: Per-file failure ---
/// A file that cannot be decoded aborts the run with its path in the message.
#[test]
fn test_cleanmarkers_aborts_on_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.md");
    fs::write(&bad, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    warmwalrus()
        .arg("cleanmarkers")
        .arg(&bad)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("Error processing {}", bad.display())));
}

/// The same file in a dry run is only logged and counted as unchanged.
#[test]
fn test_cleanmarkers_dry_run_tolerates_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.md");
    fs::write(&bad, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    warmwalrus()
        .args(["cleanmarkers", "--dry-run"])
        .arg(&bad)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would process").not());
}

/// --- Test: Unknown strategies ---
#[test]
fn test_cleanmarkers_warns_about_unknown_strategies() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "notes.md", MARKED);

    warmwalrus()
        .args(["cleanmarkers", "--strategies", "bogus", "--no-claude-url"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown strategies ignored: bogus"));
}

/// --- Test: Empty discovery ---
#[test]
fn test_cleanmarkers_reports_when_nothing_found() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "notes.txt", MARKED);

    warmwalrus()
        .args(["cleanmarkers", "-v"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No files found to process"));
}

/// --- Test: Missing subcommand ---
#[test]
fn test_missing_subcommand_prints_help_and_fails() {
    warmwalrus()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("cleanmarkers"));
}

/// --- Test: Version ---
#[test]
fn test_version_subcommand() {
    warmwalrus()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("warmwalrus {}", env!("CARGO_PKG_VERSION"))));
}

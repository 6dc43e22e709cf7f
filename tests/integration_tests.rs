mod common;

use std::fs;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use common::{write_file, write_global_config};
use predicates::prelude::*;
use tempfile::tempdir;

const GLOBAL_CONFIG: &str = r#"{"author": "A", "email": "a@example.com"}"#;

/// Builds the binary command isolated from the caller's home and config.
fn signature_cmd(cwd: &Path, home: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("add-signatures")?;
  cmd
    .current_dir(cwd)
    .env("HOME", home)
    .env_remove("SIGNATURE_CONFIG")
    .env_remove("RUST_LOG")
    .arg("--colors=never");
  Ok(cmd)
}

#[test]
fn test_signs_current_directory_by_default() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  write_file(home.path(), ".signature.json", GLOBAL_CONFIG)?;
  let hello = write_file(project.path(), "hello.py", "print(\"hi\")\n")?;

  signature_cmd(project.path(), home.path())?
    .assert()
    .success()
    .stdout(predicate::str::contains("Processing "))
    .stdout(predicate::str::contains("Results:"))
    .stdout(predicate::str::contains("  Processed: 1 file\n"))
    .stdout(predicate::str::contains("  Skipped:   0 files\n"));

  let content = fs::read_to_string(&hello)?;
  assert!(content.starts_with("# ====="));
  assert!(content.contains("# Email: a@example.com\n"));

  Ok(())
}

#[test]
fn test_second_run_skips_signed_file() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  let config = write_global_config(home.path(), GLOBAL_CONFIG)?;
  write_file(project.path(), "hello.py", "print(\"hi\")\n")?;

  signature_cmd(project.path(), home.path())?
    .env("SIGNATURE_CONFIG", &config)
    .assert()
    .success();

  signature_cmd(project.path(), home.path())?
    .env("SIGNATURE_CONFIG", &config)
    .assert()
    .success()
    .stdout(predicate::str::contains("  Processed: 0 files\n"))
    .stdout(predicate::str::contains("  Skipped:   1 file\n"));

  Ok(())
}

#[test]
fn test_missing_global_config_exits_with_error() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  let hello = write_file(project.path(), "hello.py", "print(\"hi\")\n")?;

  signature_cmd(project.path(), home.path())?
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Configuration error"))
    .stderr(predicate::str::contains("Global configuration not found"))
    .stderr(predicate::str::contains("\"author\""));

  assert_eq!(fs::read_to_string(&hello)?, "print(\"hi\")\n");

  Ok(())
}

#[test]
fn test_missing_required_field_exits_with_error() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  let config = write_global_config(home.path(), r#"{"author": "A"}"#)?;

  signature_cmd(project.path(), home.path())?
    .arg("--config")
    .arg(&config)
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Missing required fields in configuration: email"));

  Ok(())
}

#[test]
fn test_invalid_json_config_exits_with_error() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  let config = write_global_config(home.path(), "{ not json")?;

  signature_cmd(project.path(), home.path())?
    .arg("--config")
    .arg(&config)
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Invalid JSON"));

  Ok(())
}

#[test]
fn test_local_config_overrides_global_keys() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  write_file(home.path(), ".signature.json", r#"{"author": "Global", "email": "g@example.com", "title": "Dev"}"#)?;
  write_file(project.path(), ".signature.json", r#"{"author": "Local"}"#)?;
  let lib = write_file(project.path(), "lib.rs", "fn main() {}\n")?;

  signature_cmd(project.path(), home.path())?.assert().success();

  let content = fs::read_to_string(&lib)?;
  assert!(content.contains("// Author: Local\n"));
  assert!(content.contains("// Title: Dev\n"));
  assert!(content.contains("// Email: g@example.com\n"));

  Ok(())
}

#[test]
fn test_toml_config_file() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  let config = write_file(home.path(), "signature.toml", "author = \"T\"\nemail = \"t@example.com\"\n")?;
  let page = write_file(project.path(), "page.html", "<p>hi</p>\n")?;

  signature_cmd(project.path(), home.path())?
    .arg("--config")
    .arg(&config)
    .assert()
    .success();

  let content = fs::read_to_string(&page)?;
  assert!(content.starts_with("<!--\n====="));
  assert!(content.contains("Email: t@example.com\n"));

  Ok(())
}

#[test]
fn test_path_not_found_exits_with_error() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  write_file(home.path(), ".signature.json", GLOBAL_CONFIG)?;

  signature_cmd(project.path(), home.path())?
    .arg("--path")
    .arg(project.path().join("missing"))
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Error: Path not found:"));

  Ok(())
}

#[test]
fn test_dry_run_prints_hint_and_keeps_files() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  write_file(home.path(), ".signature.json", GLOBAL_CONFIG)?;
  let app = write_file(project.path(), "src/app.ts", "export {};\n")?;

  signature_cmd(project.path(), home.path())?
    .arg("--dry-run")
    .arg("--path")
    .arg(project.path().join("src"))
    .assert()
    .success()
    .stdout(predicate::str::contains("[DRY RUN] Processing "))
    .stdout(predicate::str::contains("  Processed: 1 file\n"))
    .stdout(predicate::str::contains("Run without --dry-run to apply changes"));

  assert_eq!(fs::read_to_string(&app)?, "export {};\n");

  Ok(())
}

#[test]
fn test_dry_run_without_candidates_has_no_hint() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  write_file(home.path(), ".signature.json", GLOBAL_CONFIG)?;
  write_file(project.path(), "data.bin", "x\n")?;

  signature_cmd(project.path(), home.path())?
    .arg("--dry-run")
    .assert()
    .success()
    .stdout(predicate::str::contains("Run without --dry-run").not());

  Ok(())
}

#[test]
fn test_verbose_lists_modified_files() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  write_file(home.path(), ".signature.json", GLOBAL_CONFIG)?;
  write_file(project.path(), "a.py", "x = 1\n")?;
  write_file(project.path(), "nested/b.go", "package main\n")?;

  signature_cmd(project.path(), home.path())?
    .arg("--verbose")
    .arg("--path")
    .arg(project.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Modified files:"))
    .stdout(predicate::str::contains("a.py"))
    .stdout(predicate::str::contains("nested/b.go"));

  Ok(())
}

#[test]
fn test_force_replaces_existing_signature() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  write_file(home.path(), ".signature.json", GLOBAL_CONFIG)?;
  let old_block = format!("# {}\n# Author: A\n# Email: a@example.com\n# Created: 2020-01-01\n# {}\n\n", "=".repeat(80), "=".repeat(80));
  let script = write_file(project.path(), "run.sh", &format!("#!/bin/sh\n\n{old_block}echo hi\n"))?;

  signature_cmd(project.path(), home.path())?
    .arg("--force")
    .assert()
    .success()
    .stdout(predicate::str::contains("  Processed: 1 file\n"));

  let content = fs::read_to_string(&script)?;
  assert!(content.starts_with("#!/bin/sh\n\n# ====="));
  assert!(!content.contains("2020-01-01"));
  assert!(content.ends_with("\n\necho hi\n"));
  assert_eq!(content.matches("Email: a@example.com").count(), 1);

  Ok(())
}

#[test]
fn test_single_file_path() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  write_file(home.path(), ".signature.json", GLOBAL_CONFIG)?;
  let single = write_file(project.path(), "one.css", "a { }\n")?;
  let other = write_file(project.path(), "two.css", "b { }\n")?;

  signature_cmd(project.path(), home.path())?
    .arg("--path")
    .arg(&single)
    .assert()
    .success()
    .stdout(predicate::str::contains("  Processed: 1 file\n"));

  assert!(fs::read_to_string(&single)?.starts_with("/*\n"));
  assert_eq!(fs::read_to_string(&other)?, "b { }\n");

  Ok(())
}

#[test]
fn test_report_json() -> Result<()> {
  let home = tempdir()?;
  let project = tempdir()?;
  let reports = tempdir()?;
  write_file(home.path(), ".signature.json", GLOBAL_CONFIG)?;
  write_file(project.path(), "a.py", "x = 1\n")?;
  write_file(project.path(), "notes.txt", "plain\n")?;
  let report_path = reports.path().join("report.json");

  signature_cmd(project.path(), home.path())?
    .arg("--report-json")
    .arg(&report_path)
    .assert()
    .success();

  let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report_path)?)?;
  assert_eq!(report["processed"], 1);
  assert_eq!(report["skipped"], 1);
  assert_eq!(report["dry_run"], false);
  assert_eq!(report["force"], false);
  assert_eq!(report["files"].as_array().map(Vec::len), Some(1));

  Ok(())
}

#[test]
fn test_help_lists_flags() -> Result<()> {
  Command::cargo_bin("add-signatures")?
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("--dry-run"))
    .stdout(predicate::str::contains("--force"))
    .stdout(predicate::str::contains("--path"));

  Ok(())
}

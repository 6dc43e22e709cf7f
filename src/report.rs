//! # Report Module
//!
//! This module holds the statistics gathered during a run and can write them
//! out as a JSON report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

/// Counters and modified paths accumulated over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
  /// Files that were signed (or would be, in dry-run mode)
  pub processed: usize,
  /// Files that were considered but left untouched
  pub skipped: usize,
  /// Paths of the signed files, in processing order
  #[serde(serialize_with = "path_serialization::serialize_all")]
  pub files: Vec<PathBuf>,
  /// Set when the requested root did not exist
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub not_found: bool,
}

impl ProcessingStats {
  /// Empty stats for a root that resolved to neither a file nor a directory.
  pub fn not_found() -> Self {
    Self {
      not_found: true,
      ..Self::default()
    }
  }

  /// Records the result for one file.
  pub fn record(&mut self, path: &Path, modified: bool) {
    if modified {
      self.processed += 1;
      self.files.push(path.to_path_buf());
    } else {
      self.skipped += 1;
    }
  }

  /// Total number of files considered.
  pub const fn total(&self) -> usize {
    self.processed + self.skipped
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  generated_at: String,
  root: String,
  dry_run: bool,
  force: bool,
  #[serde(flatten)]
  stats: &'a ProcessingStats,
}

/// Writes `stats` as a pretty-printed JSON report to `output_path`.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized or written.
pub fn write_json_report(
  stats: &ProcessingStats,
  root: &Path,
  dry_run: bool,
  force: bool,
  output_path: &Path,
) -> Result<()> {
  let report = JsonReport {
    generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    root: root.to_string_lossy().to_string(),
    dry_run,
    force,
    stats,
  };

  let json = serde_json::to_string_pretty(&report).with_context(|| "Failed to serialize report to JSON")?;
  fs::write(output_path, json).with_context(|| format!("Failed to write JSON report to {}", output_path.display()))
}

/// Helper module for serializing paths as plain strings
mod path_serialization {
  use std::path::PathBuf;

  use serde::Serializer;
  use serde::ser::SerializeSeq;

  pub fn serialize_all<S>(paths: &[PathBuf], serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut seq = serializer.serialize_seq(Some(paths.len()))?;
    for path in paths {
      seq.serialize_element(&path.to_string_lossy())?;
    }
    seq.end()
  }
}

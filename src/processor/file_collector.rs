//! # File Collector Module
//!
//! This module walks a directory tree and collects candidate files, pruning
//! tool, cache and dependency directories and a fixed list of file names.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Directory names that are never descended into.
pub const SKIP_DIRS: &[&str] = &[
  ".git",
  ".venv",
  "venv",
  "env",
  "__pycache__",
  "node_modules",
  ".pytest_cache",
  ".mypy_cache",
  "dist",
  "build",
  ".egg-info",
  ".tox",
  "htmlcov",
  ".coverage",
  ".idea",
  ".vscode",
];

/// File names that are never read or written.
pub const SKIP_FILES: &[&str] = &[
  ".gitignore",
  ".dockerignore",
  "LICENSE",
  "CHANGELOG",
  "requirements.txt",
  "package-lock.json",
  "yarn.lock",
  "poetry.lock",
];

/// Returns `true` if a directory with this name is excluded from traversal.
pub fn is_skipped_dir(name: &OsStr) -> bool {
  name.to_str().is_some_and(|name| SKIP_DIRS.contains(&name))
}

/// Returns `true` if a file with this name is excluded from processing.
pub fn is_skipped_file(name: &OsStr) -> bool {
  name.to_str().is_some_and(|name| SKIP_FILES.contains(&name))
}

/// File collector for directory traversal.
#[derive(Debug, Default)]
pub struct FileCollector;

impl FileCollector {
  /// Creates a new FileCollector.
  pub const fn new() -> Self {
    Self
  }

  /// Traverses `dir` recursively and returns every candidate file.
  ///
  /// Excluded directories are pruned before descent, so nothing below them is
  /// ever visited. The root itself is never pruned. Symlinks are listed as
  /// files unless they point to a directory; symlinked directories are not
  /// followed. Entries that cannot be read are logged and skipped.
  ///
  /// Files are returned in a stable, name-sorted depth-first order.
  pub fn traverse_directory(&self, dir: &Path) -> Vec<PathBuf> {
    debug!("Scanning directory: {}", dir.display());
    let start_time = std::time::Instant::now();

    let walker = WalkDir::new(dir)
      .follow_links(false)
      .sort_by_file_name()
      .into_iter()
      .filter_entry(|entry| !is_pruned_dir(entry));

    let mut files = Vec::new();
    for entry in walker {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          debug!("Error walking directory {}: {}", dir.display(), e);
          continue;
        }
      };

      if !is_candidate_file(&entry) {
        continue;
      }

      if is_skipped_file(entry.file_name()) {
        trace!("Skipping: {} (excluded file name)", entry.path().display());
        continue;
      }

      files.push(entry.into_path());
    }

    debug!("Found {} files in {}ms", files.len(), start_time.elapsed().as_millis());

    files
  }
}

fn is_pruned_dir(entry: &DirEntry) -> bool {
  let pruned = entry.depth() > 0 && entry.file_type().is_dir() && is_skipped_dir(entry.file_name());
  if pruned {
    trace!("Skipping: {} (excluded directory)", entry.path().display());
  }
  pruned
}

fn is_candidate_file(entry: &DirEntry) -> bool {
  let file_type = entry.file_type();
  file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

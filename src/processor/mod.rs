//! # Processor Module
//!
//! This module contains the core functionality for signing files and walking
//! directories.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - Whole-file reading and writing
//! - [`content_transformer`] - Signature detection, shebang handling and old signature removal
//! - [`file_collector`] - Directory traversal with fixed exclusion sets
//!
//! The [`Processor`] struct is the main entry point, deciding per file whether
//! to skip it, insert a signature or replace an existing one.

mod content_transformer;
mod file_collector;
mod file_io;

use std::fmt;
use std::path::{Path, PathBuf};

pub use content_transformer::{CLOSING_MARKER_WINDOW, ContentTransformer, SIGNATURE_SCAN_LINES};
pub use file_collector::{FileCollector, SKIP_DIRS, SKIP_FILES, is_skipped_dir, is_skipped_file};
pub use file_io::{FileIO, FileIoError};
use tracing::{debug, trace};

use crate::config::SignatureConfig;
use crate::report::ProcessingStats;
use crate::signature::{SignatureGenerator, extension_of, is_supported_extension};
use crate::warn_log;

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
  /// The extension has no comment style.
  UnsupportedExtension,
  /// The path is not a regular file.
  NotAFile,
  /// The content is not UTF-8 text or could not be read.
  Unreadable,
  /// The configured email is already present and `force` is off.
  AlreadySigned,
  /// Writing the new content failed.
  WriteFailed,
}

impl fmt::Display for SkipReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let reason = match self {
      SkipReason::UnsupportedExtension => "unsupported extension",
      SkipReason::NotAFile => "not a regular file",
      SkipReason::Unreadable => "unreadable",
      SkipReason::AlreadySigned => "already signed",
      SkipReason::WriteFailed => "write failed",
    };
    f.write_str(reason)
  }
}

/// Outcome of processing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
  /// A signature was added to an unsigned file.
  Inserted,
  /// An existing signature was replaced (`force` mode).
  Replaced,
  /// The file was not modified.
  Skipped(SkipReason),
}

impl FileOutcome {
  /// Returns `true` if the file was signed, or would be in dry-run mode.
  pub const fn is_modified(self) -> bool {
    matches!(self, FileOutcome::Inserted | FileOutcome::Replaced)
  }
}

/// Processor for adding signatures to files.
///
/// The `Processor` is responsible for:
/// - Deciding per file whether to skip, insert or replace a signature
/// - Keeping interpreter directives on the first line
/// - Writing the result back in place (unless in dry-run mode)
/// - Walking directories and aggregating [`ProcessingStats`]
///
/// Individual file failures never abort a run; they are counted as skips.
pub struct Processor<'a> {
  /// Author identity rendered into each signature
  config: &'a SignatureConfig,

  /// Compute decisions without writing files
  dry_run: bool,

  /// Replace existing signatures instead of skipping signed files
  force: bool,

  /// Fixed `Created:` date; today's date when `None`
  date: Option<String>,

  /// Detection and splicing of signature blocks
  content_transformer: ContentTransformer,

  /// Directory traversal
  file_collector: FileCollector,
}

impl<'a> Processor<'a> {
  /// Creates a new processor.
  ///
  /// # Parameters
  ///
  /// * `config` - Author identity to sign files with
  /// * `dry_run` - When `true`, no file is written
  /// * `force` - When `true`, already signed files get a fresh signature
  pub fn new(config: &'a SignatureConfig, dry_run: bool, force: bool) -> Self {
    Self {
      config,
      dry_run,
      force,
      date: None,
      content_transformer: ContentTransformer::new(config.email.clone()),
      file_collector: FileCollector::new(),
    }
  }

  /// Pins the `Created:` date instead of using today's date.
  pub fn with_date(mut self, date: impl Into<String>) -> Self {
    self.date = Some(date.into());
    self
  }

  /// Checks if the content already carries this author's signature.
  pub fn has_signature(&self, content: &str) -> bool {
    self.content_transformer.has_signature(content)
  }

  /// Processes a single file.
  ///
  /// The decision order is: supported extension, regular file, readable
  /// text, already signed (skipped unless `force`), then render and splice
  /// the signature and write it back.
  pub fn process_file(&self, path: &Path) -> FileOutcome {
    let outcome = self.decide_and_apply(path);
    match outcome {
      FileOutcome::Skipped(reason) => trace!("Skipping: {} ({})", path.display(), reason),
      FileOutcome::Inserted => debug!("Signed: {}", path.display()),
      FileOutcome::Replaced => debug!("Re-signed: {}", path.display()),
    }
    outcome
  }

  fn decide_and_apply(&self, path: &Path) -> FileOutcome {
    let Some(extension) = extension_of(path).filter(|ext| is_supported_extension(ext)) else {
      return FileOutcome::Skipped(SkipReason::UnsupportedExtension);
    };

    if !path.is_file() {
      return FileOutcome::Skipped(SkipReason::NotAFile);
    }

    let content = match FileIO::read_text(path) {
      Ok(content) => content,
      Err(e) => {
        trace!("{}", e);
        return FileOutcome::Skipped(SkipReason::Unreadable);
      }
    };

    let already_signed = self.has_signature(&content);
    if already_signed && !self.force {
      return FileOutcome::Skipped(SkipReason::AlreadySigned);
    }

    let signature = match SignatureGenerator::new(self.config).generate(&extension, self.date.as_deref()) {
      Ok(signature) => signature,
      Err(e) => {
        trace!("{}", e);
        return FileOutcome::Skipped(SkipReason::UnsupportedExtension);
      }
    };

    let new_content = self
      .content_transformer
      .apply_signature(&content, &signature, self.force);

    if !self.dry_run
      && let Err(e) = FileIO::write_file(path, &new_content)
    {
      warn_log!("{}", e);
      return FileOutcome::Skipped(SkipReason::WriteFailed);
    }

    if already_signed {
      FileOutcome::Replaced
    } else {
      FileOutcome::Inserted
    }
  }

  /// Processes a file or a directory tree.
  ///
  /// - A file is processed directly.
  /// - A directory is walked recursively, skipping excluded directories and
  ///   file names.
  /// - Anything else yields empty stats flagged as not found.
  pub fn process_path(&self, root: &Path) -> ProcessingStats {
    if root.is_file() {
      let mut stats = ProcessingStats::default();
      stats.record(root, self.process_file(root).is_modified());
      return stats;
    }

    if root.is_dir() {
      let files = self.file_collector.traverse_directory(root);
      return self.process_files(&files);
    }

    debug!("Path not found: {}", root.display());
    ProcessingStats::not_found()
  }

  /// Processes an explicit list of files, without applying the traversal
  /// exclusion sets.
  pub fn process_files(&self, files: &[PathBuf]) -> ProcessingStats {
    let start = std::time::Instant::now();
    let mut stats = ProcessingStats::default();

    for path in files {
      stats.record(path, self.process_file(path).is_modified());
    }

    debug!(
      "Processed {} files ({} signed, {} skipped) in {}ms",
      stats.total(),
      stats.processed,
      stats.skipped,
      start.elapsed().as_millis()
    );

    stats
  }
}

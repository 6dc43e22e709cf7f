//! # File I/O Module
//!
//! This module provides the whole-file read and write operations used by the
//! processor, classifying failures so the caller can turn them into skips.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Failures while reading or writing a candidate file.
///
/// None of these abort a run; the processor records the file as skipped.
#[derive(Debug, thiserror::Error)]
pub enum FileIoError {
  /// Binary (non UTF-8) content, permission denied, or any other read failure.
  #[error("Failed to read file {}: {source}", path.display())]
  Unreadable { path: PathBuf, source: std::io::Error },

  /// The file could not be opened for writing due to permissions.
  #[error("No permission to write {}", path.display())]
  WritePermissionDenied { path: PathBuf, source: std::io::Error },

  /// Any other write failure.
  #[error("Failed to write {}: {source}", path.display())]
  WriteFailed { path: PathBuf, source: std::io::Error },
}

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Read the full file content as UTF-8 text.
  ///
  /// # Errors
  ///
  /// Returns [`FileIoError::Unreadable`] when the file cannot be opened or its
  /// content is not valid UTF-8.
  pub fn read_text(path: &Path) -> Result<String, FileIoError> {
    std::fs::read_to_string(path).map_err(|e| FileIoError::Unreadable {
      path: path.to_path_buf(),
      source: e,
    })
  }

  /// Overwrite the file in place with `content`.
  ///
  /// The write is not atomic: an interrupted write can leave a partial file.
  ///
  /// # Errors
  ///
  /// Returns [`FileIoError::WritePermissionDenied`] for permission failures
  /// and [`FileIoError::WriteFailed`] for anything else.
  pub fn write_file(path: &Path, content: &str) -> Result<(), FileIoError> {
    std::fs::write(path, content).map_err(|e| {
      let path = path.to_path_buf();
      if e.kind() == ErrorKind::PermissionDenied {
        FileIoError::WritePermissionDenied { path, source: e }
      } else {
        FileIoError::WriteFailed { path, source: e }
      }
    })
  }
}

//! # Output Module
//!
//! This module centralizes all user-facing output for the signature tool.
//! It provides consistent formatting and colors for terminal output.
//!
//! - Results go to stdout so they can be piped.
//! - Errors and warnings go to stderr.
//! - `-q` silences everything except errors and warnings; `-v` adds the list
//!   of modified files.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::config::DEFAULT_CONFIG_FILENAME;
use crate::logging::{is_quiet, is_verbose};
use crate::report::ProcessingStats;

/// Symbols used in output
pub mod symbols {
  /// Signature added
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Fatal error
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print the initial "Processing <path>..." message.
pub fn print_start_message(path: &Path, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let prefix = if dry_run {
    format!("{} ", "[DRY RUN]".if_supports_color(Stream::Stdout, |s| s.cyan()))
  } else {
    String::new()
  };

  println!("{}Processing {}...", prefix, path.display());
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the processed/skipped counters.
pub fn print_results(stats: &ProcessingStats) {
  if is_quiet() {
    return;
  }

  println!("Results:");
  println!(
    "  Processed: {} {}",
    stats.processed.if_supports_color(Stream::Stdout, |s| s.green()),
    files_word(stats.processed)
  );
  println!(
    "  Skipped:   {} {}",
    stats.skipped.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    files_word(stats.skipped)
  );
}

/// Print the modified files (verbose mode only).
///
/// Paths are shown relative to `root` when possible.
pub fn print_modified_files(stats: &ProcessingStats, root: &Path) {
  if is_quiet() || !is_verbose() || stats.files.is_empty() {
    return;
  }

  println!("Modified files:");
  for file in &stats.files {
    println!(
      "  {} {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      make_relative_path(file, root)
    );
  }
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Print a fatal error to stderr.
pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    message
  );
}

/// Print instructions for creating a configuration file.
pub fn print_config_help(global_path: &Path) {
  eprintln!();
  eprintln!("Create {} with at least:", global_path.display());
  eprintln!("  {{\"author\": \"Your Name\", \"email\": \"your@email.com\"}}");
  eprintln!();
  eprintln!(
    "Optional keys: title, website, upwork. A {} in the current directory overrides individual keys.",
    DEFAULT_CONFIG_FILENAME
  );
}

const fn files_word(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

/// Formats `path` relative to `root`, falling back to the path as given.
fn make_relative_path(path: &Path, root: &Path) -> String {
  if root.is_file() {
    return path.to_string_lossy().to_string();
  }

  match pathdiff::diff_paths(path, root) {
    Some(relative) if !relative.as_os_str().is_empty() && !relative.starts_with("..") => {
      relative.to_string_lossy().to_string()
    }
    _ => path.to_string_lossy().to_string(),
  }
}

//! # Content Transformer Module
//!
//! This module provides the text operations behind signing a file:
//! detecting an existing signature, splitting off an interpreter directive
//! (`#!...`) and removing an old signature block before it is replaced.
//!
//! Detection is a plain substring search for the configured email in the
//! first [`SIGNATURE_SCAN_LINES`] lines. An email that happens to appear in
//! ordinary code near the top of a file is a false positive.

use std::sync::LazyLock;

use regex::Regex;

/// Number of leading lines searched for the configured email.
pub const SIGNATURE_SCAN_LINES: usize = 20;

/// Number of lines, starting at the email line, searched for the end of an
/// old signature block.
pub const CLOSING_MARKER_WINDOW: usize = 5;

/// A separator run, or the closing delimiter of an HTML or CSS block comment.
static CLOSING_MARKER: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"={5,}|-->|\*/").expect("closing marker regex must compile"));

/// A line holding only a block comment closing delimiter.
static BLOCK_CLOSE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\s*(-->|\*/)\s*$").expect("block close regex must compile"));

/// Content transformation utilities for signature processing.
pub struct ContentTransformer {
  /// The configured email address that marks a file as signed
  email: String,
}

impl ContentTransformer {
  /// Creates a new ContentTransformer for the given email.
  pub fn new(email: impl Into<String>) -> Self {
    Self { email: email.into() }
  }

  /// Returns `true` if the email occurs in one of the first
  /// [`SIGNATURE_SCAN_LINES`] lines of `content`.
  pub fn has_signature(&self, content: &str) -> bool {
    content
      .split('\n')
      .take(SIGNATURE_SCAN_LINES)
      .any(|line| line.contains(&self.email))
  }

  /// Splits an interpreter directive off the start of `content`.
  ///
  /// Returns the directive line without its newline, and the rest of the
  /// content after that newline. Returns `None` if the content does not start
  /// with `#!`.
  pub fn split_shebang<'a>(&self, content: &'a str) -> Option<(&'a str, &'a str)> {
    if !content.starts_with("#!") {
      return None;
    }

    Some(content.split_once('\n').unwrap_or((content, "")))
  }

  /// Removes a previously inserted signature block from the top of `content`.
  ///
  /// Finds the first line among the first [`SIGNATURE_SCAN_LINES`] containing
  /// the email, then looks at that line and the following lines, up to
  /// [`CLOSING_MARKER_WINDOW`] lines in total, for a closing marker. Everything
  /// up to and including the marker is dropped, along with a block comment
  /// closing line right after it and any blank lines that follow.
  ///
  /// Without an email line or a closing marker, only leading blank lines are
  /// dropped.
  pub fn remove_old_signature(&self, content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();

    let mut boundary = lines
      .iter()
      .take(SIGNATURE_SCAN_LINES)
      .position(|line| line.contains(&self.email))
      .and_then(|email_line| {
        let window_end = (email_line + CLOSING_MARKER_WINDOW).min(lines.len());
        (email_line..window_end).find(|&idx| CLOSING_MARKER.is_match(lines[idx]))
      })
      .map_or(0, |marker_line| marker_line + 1);

    // Block styles close the separator with `-->` or `*/` on the next line.
    if boundary > 0 && boundary < lines.len() && BLOCK_CLOSE.is_match(lines[boundary]) {
      boundary += 1;
    }

    while boundary < lines.len() && lines[boundary].trim().is_empty() {
      boundary += 1;
    }

    lines[boundary..].join("\n")
  }

  /// Builds the new file content with `signature` at the top.
  ///
  /// An interpreter directive stays on the first line, followed by a blank
  /// line and the signature. With `force`, an existing signature is removed
  /// first.
  pub fn apply_signature(&self, content: &str, signature: &str, force: bool) -> String {
    if let Some((shebang, rest)) = self.split_shebang(content) {
      let rest = if force && self.has_signature(rest) {
        self.remove_old_signature(rest)
      } else {
        rest.to_string()
      };

      return format!("{shebang}\n\n{signature}{rest}");
    }

    if force && self.has_signature(content) {
      let body = self.remove_old_signature(content);
      return format!("{signature}{body}");
    }

    format!("{signature}{content}")
  }
}

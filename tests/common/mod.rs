#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use signature_tool::config::SignatureConfig;

pub const EMAIL: &str = "a@example.com";

/// The minimal configuration used across the tests.
pub fn test_config() -> SignatureConfig {
  SignatureConfig::new("A", EMAIL)
}

/// A configuration with every optional field set.
pub fn full_config() -> SignatureConfig {
  SignatureConfig {
    author: "Jane Doe".to_string(),
    email: "jane@example.com".to_string(),
    title: Some("AI Engineer".to_string()),
    website: Some("https://jane.dev".to_string()),
    upwork: Some("https://www.upwork.com/freelancers/jane".to_string()),
  }
}

/// Writes a file, creating parent directories as needed.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<PathBuf> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// Writes a global JSON config file into `dir` and returns its path.
pub fn write_global_config(dir: &Path, json: &str) -> Result<PathBuf> {
  write_file(dir, "global-signature.json", json)
}

/// Counts complete signature blocks by their email line.
pub fn count_email_lines(content: &str, email: &str) -> usize {
  content
    .lines()
    .filter(|line| line.contains(&format!("Email: {email}")))
    .count()
}

//! # Signature Module
//!
//! This module renders author signature blocks and formats them with the
//! comment syntax appropriate for a file type.
//!
//! The module includes:
//! - [`CommentStyle`] for the four supported comment families
//! - [`SignatureGenerator`] for building the attribution lines and wrapping
//!   them in comments
//! - [`render`] as a one-shot convenience over the generator
//!
//! ## Example
//!
//! ```rust
//! use signature_tool::config::SignatureConfig;
//! use signature_tool::signature::render;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = SignatureConfig::new("Jane Doe", "jane@example.com");
//!
//! let block = render(&config, ".py", Some("2025-01-01"))?;
//! assert!(block.starts_with("# ===="));
//! assert!(block.contains("# Email: jane@example.com\n"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use chrono::Local;

use crate::config::SignatureConfig;
use crate::verbose_log;

/// Default width of the `=` separator line.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 80;

/// Format used for the `Created:` line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while rendering a signature.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
  /// The extension has no entry in the comment style table.
  #[error("Unsupported file extension: {0}")]
  UnsupportedExtension(String),
}

/// The comment syntax family used to wrap a signature block.
///
/// Line styles prefix every line (separators included). Block styles open and
/// close the comment with delimiters on their own lines and leave the content
/// lines bare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
  /// `# ` line comments (Python, shell, YAML, ...)
  Hash,
  /// `// ` line comments (C family, JavaScript, Rust, ...)
  DoubleSlash,
  /// `<!-- ... -->` block comments (HTML, XML, Markdown, SVG)
  HtmlBlock,
  /// `/* ... */` block comments (CSS and its preprocessors)
  CssBlock,
}

impl CommentStyle {
  /// Prefix applied to each line for line styles.
  pub const fn line_prefix(self) -> Option<&'static str> {
    match self {
      Self::Hash => Some("# "),
      Self::DoubleSlash => Some("// "),
      Self::HtmlBlock | Self::CssBlock => None,
    }
  }

  /// Opening and closing delimiters for block styles.
  pub const fn delimiters(self) -> Option<(&'static str, &'static str)> {
    match self {
      Self::Hash | Self::DoubleSlash => None,
      Self::HtmlBlock => Some(("<!--", "-->")),
      Self::CssBlock => Some(("/*", "*/")),
    }
  }
}

/// Every supported extension, in table order.
const SUPPORTED_EXTENSIONS: &[&str] = &[
  ".py", ".rb", ".sh", ".bash", ".yaml", ".yml", ".r", ".perl", ".pl", ".js", ".ts", ".jsx", ".tsx", ".java", ".cpp",
  ".c", ".h", ".hpp", ".go", ".rs", ".swift", ".kt", ".scala", ".php", ".html", ".xml", ".md", ".svg", ".css", ".scss",
  ".sass", ".less",
];

/// Looks up the comment style for an extension such as `.py`.
///
/// The lookup is case-insensitive; the leading dot is required.
pub fn comment_style_for_extension(extension: &str) -> Option<CommentStyle> {
  match extension.to_ascii_lowercase().as_str() {
    ".py" | ".rb" | ".sh" | ".bash" | ".yaml" | ".yml" | ".r" | ".perl" | ".pl" => Some(CommentStyle::Hash),
    ".js" | ".ts" | ".jsx" | ".tsx" | ".java" | ".cpp" | ".c" | ".h" | ".hpp" | ".go" | ".rs" | ".swift" | ".kt"
    | ".scala" | ".php" => Some(CommentStyle::DoubleSlash),
    ".html" | ".xml" | ".md" | ".svg" => Some(CommentStyle::HtmlBlock),
    ".css" | ".scss" | ".sass" | ".less" => Some(CommentStyle::CssBlock),
    _ => None,
  }
}

/// Returns `true` if the extension has a comment style.
pub fn is_supported_extension(extension: &str) -> bool {
  comment_style_for_extension(extension).is_some()
}

/// Lists all supported extensions.
pub fn supported_extensions() -> &'static [&'static str] {
  SUPPORTED_EXTENSIONS
}

/// Returns the extension of `path` including the leading dot.
///
/// Hidden files without a further extension (e.g. `.bashrc`) have none.
pub fn extension_of(path: &Path) -> Option<String> {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .map(|ext| format!(".{ext}"))
}

/// Renders signature blocks for a given configuration.
///
/// # Examples
///
/// ```rust
/// use signature_tool::config::SignatureConfig;
/// use signature_tool::signature::SignatureGenerator;
///
/// # fn main() -> anyhow::Result<()> {
/// let config = SignatureConfig::new("Jane Doe", "jane@example.com");
/// let generator = SignatureGenerator::new(&config).with_width(10);
///
/// let block = generator.generate(".css", Some("2025-01-01"))?;
/// assert!(block.starts_with("/*\n==========\nAuthor: Jane Doe\n"));
/// # Ok(())
/// # }
/// ```
pub struct SignatureGenerator<'a> {
  /// Author identity to render
  config: &'a SignatureConfig,
  /// Width of the separator line
  width: usize,
}

impl<'a> SignatureGenerator<'a> {
  /// Creates a generator with the default separator width.
  pub const fn new(config: &'a SignatureConfig) -> Self {
    Self {
      config,
      width: DEFAULT_SEPARATOR_WIDTH,
    }
  }

  /// Overrides the separator width.
  pub const fn with_width(mut self, width: usize) -> Self {
    self.width = width;
    self
  }

  /// Generates the signature block for a file extension.
  ///
  /// # Parameters
  ///
  /// * `extension` - File extension including the leading dot (e.g. `.rs`)
  /// * `date` - Value for the `Created:` line; today's date when `None`
  ///
  /// # Errors
  ///
  /// Returns [`SignatureError::UnsupportedExtension`] if the extension is not
  /// in the comment style table.
  pub fn generate(&self, extension: &str, date: Option<&str>) -> Result<String, SignatureError> {
    let style = comment_style_for_extension(extension)
      .ok_or_else(|| SignatureError::UnsupportedExtension(extension.to_string()))?;

    let date = date.map_or_else(today, str::to_string);
    verbose_log!("Rendering {:?} signature for {} dated {}", style, extension, date);

    Ok(format_with_comment_style(&self.attribution_lines(&date), style, self.width))
  }

  /// Builds the attribution lines in their fixed order.
  fn attribution_lines(&self, date: &str) -> Vec<String> {
    let config = self.config;
    let mut lines = vec![format!("Author: {}", config.author)];

    if let Some(title) = &config.title {
      lines.push(format!("Title: {title}"));
    }
    if let Some(website) = &config.website {
      lines.push(format!("Website: {website}"));
    }

    lines.push(format!("Email: {}", config.email));

    if let Some(upwork) = &config.upwork {
      lines.push(format!("Upwork: {upwork}"));
    }

    lines.push(format!("Created: {date}"));
    lines
  }
}

/// Renders a signature block for `extension`.
///
/// Shorthand for [`SignatureGenerator::generate`] with the default width.
pub fn render(config: &SignatureConfig, extension: &str, date: Option<&str>) -> Result<String, SignatureError> {
  SignatureGenerator::new(config).generate(extension, date)
}

/// Today's date in [`DATE_FORMAT`].
pub fn today() -> String {
  Local::now().format(DATE_FORMAT).to_string()
}

/// Wraps attribution lines with the given comment style.
///
/// The result ends with a blank line so that file content placed after it is
/// visually separated from the signature.
fn format_with_comment_style(lines: &[String], style: CommentStyle, width: usize) -> String {
  let separator = "=".repeat(width);
  let mut result = String::new();

  if let Some(prefix) = style.line_prefix() {
    push_line(&mut result, &format!("{prefix}{separator}"));
    for line in lines {
      push_line(&mut result, &format!("{prefix}{line}"));
    }
    push_line(&mut result, &format!("{prefix}{separator}"));
  } else if let Some((open, close)) = style.delimiters() {
    push_line(&mut result, open);
    push_line(&mut result, &separator);
    for line in lines {
      push_line(&mut result, line);
    }
    push_line(&mut result, &separator);
    push_line(&mut result, close);
  }

  result.push('\n');
  result
}

fn push_line(buf: &mut String, line: &str) {
  buf.push_str(line);
  buf.push('\n');
}

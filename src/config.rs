//! # Configuration Module
//!
//! This module loads the author identity that goes into every signature.
//!
//! Configuration comes from two JSON files:
//! - a global file, `~/.signature.json` by default (overridable with the
//!   `SIGNATURE_CONFIG` environment variable or `--config`)
//! - an optional local file, `.signature.json` in the current directory
//!
//! Keys from the local file override keys from the global file one by one.
//! A config path ending in `.toml` is read as TOML instead of JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::verbose_log;

/// The default config file name, used for both the global and local file.
pub const DEFAULT_CONFIG_FILENAME: &str = ".signature.json";

/// Environment variable for specifying the global config file path.
pub const CONFIG_ENV_VAR: &str = "SIGNATURE_CONFIG";

/// Keys that must be present in the merged configuration.
pub const REQUIRED_FIELDS: &[&str] = &["author", "email"];

/// Author identity rendered into signature blocks.
///
/// Immutable once loaded; passed by reference to the generator and processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureConfig {
  /// Author name (required)
  pub author: String,

  /// Contact email (required). Also the marker used to recognise signed files.
  pub email: String,

  /// Job title or tagline
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  /// Personal website
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub website: Option<String>,

  /// Upwork (or other freelance profile) link
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub upwork: Option<String>,
}

impl SignatureConfig {
  /// Create a config with only the required fields set.
  pub fn new(author: impl Into<String>, email: impl Into<String>) -> Self {
    Self {
      author: author.into(),
      email: email.into(),
      title: None,
      website: None,
      upwork: None,
    }
  }

  /// Build a config from an already merged key/value object.
  ///
  /// # Errors
  ///
  /// Returns an error if a required field is missing or empty, or if a field
  /// has the wrong type.
  pub fn from_map(map: Map<String, Value>, source: &Path) -> Result<Self, ConfigError> {
    let missing: Vec<String> = REQUIRED_FIELDS
      .iter()
      .filter(|field| !map.contains_key(**field))
      .map(|field| field.to_string())
      .collect();

    if !missing.is_empty() {
      return Err(ConfigError::MissingFields {
        fields: missing,
        path: source.to_path_buf(),
      });
    }

    let config: Self = serde_json::from_value(Value::Object(map)).map_err(|e| ConfigError::Invalid {
      message: e.to_string(),
    })?;

    config.validate()?;
    Ok(config)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    if self.author.trim().is_empty() {
      return Err(ConfigError::Invalid {
        message: "author cannot be empty".to_string(),
      });
    }

    if self.email.trim().is_empty() {
      return Err(ConfigError::Invalid {
        message: "email cannot be empty".to_string(),
      });
    }

    Ok(())
  }
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The global config file does not exist.
  #[error("Global configuration not found at {}", path.display())]
  GlobalNotFound { path: PathBuf },

  /// No home directory could be determined for the default global path.
  #[error("Could not determine the home directory for the global configuration")]
  NoHomeDir,

  /// The config file could not be read.
  #[error("Failed to read config file '{}': {source}", path.display())]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid JSON.
  #[error("Invalid JSON in {}: {source}", path.display())]
  ParseJson { path: PathBuf, source: serde_json::Error },

  /// The config file contains invalid TOML.
  #[error("Invalid TOML in {}: {source}", path.display())]
  ParseToml { path: PathBuf, source: toml::de::Error },

  /// The config file is valid but its top level is not an object.
  #[error("Configuration in {} must be an object of key/value pairs", path.display())]
  NotAnObject { path: PathBuf },

  /// Required keys are absent after merging.
  #[error("Missing required fields in configuration: {}\nPlease update {}", fields.join(", "), path.display())]
  MissingFields { fields: Vec<String>, path: PathBuf },

  /// A field has an unusable value.
  #[error("Invalid configuration: {message}")]
  Invalid { message: String },
}

/// Resolved locations of the config files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
  /// Global config (must exist)
  pub global: PathBuf,
  /// Local config (optional)
  pub local: PathBuf,
}

impl ConfigPaths {
  /// Discover the config file paths.
  ///
  /// The global path is taken from, in order:
  /// 1. `explicit_global` (the `--config` flag)
  /// 2. the `SIGNATURE_CONFIG` environment variable
  /// 3. `~/.signature.json`
  ///
  /// The local path is always `.signature.json` under `current_dir`.
  pub fn discover(explicit_global: Option<&Path>, current_dir: &Path) -> Result<Self, ConfigError> {
    let global = if let Some(path) = explicit_global {
      verbose_log!("Using config from --config flag: {}", path.display());
      path.to_path_buf()
    } else if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR)
      && !env_path.is_empty()
    {
      verbose_log!("Using config from {} env var: {}", CONFIG_ENV_VAR, env_path);
      PathBuf::from(env_path)
    } else {
      dirs::home_dir()
        .ok_or(ConfigError::NoHomeDir)?
        .join(DEFAULT_CONFIG_FILENAME)
    };

    Ok(Self {
      global,
      local: current_dir.join(DEFAULT_CONFIG_FILENAME),
    })
  }
}

/// Load and merge the global and local configuration files.
///
/// # Errors
///
/// Returns an error if the global file is missing, either file cannot be read
/// or parsed, or required fields are missing after the merge.
pub fn load_config(paths: &ConfigPaths) -> Result<SignatureConfig, ConfigError> {
  if !paths.global.is_file() {
    return Err(ConfigError::GlobalNotFound {
      path: paths.global.clone(),
    });
  }

  let mut merged = read_config_map(&paths.global)?;

  if paths.local.is_file() && paths.local != paths.global {
    verbose_log!("Merging local config from: {}", paths.local.display());
    let local = read_config_map(&paths.local)?;
    merge_into(&mut merged, local);
  }

  SignatureConfig::from_map(merged, &paths.global)
}

/// Overlay `overrides` onto `base`, key by key.
pub fn merge_into(base: &mut Map<String, Value>, overrides: Map<String, Value>) {
  for (key, value) in overrides {
    base.insert(key, value);
  }
}

/// Read one config file into a key/value object.
fn read_config_map(path: &Path) -> Result<Map<String, Value>, ConfigError> {
  verbose_log!("Loading config from: {}", path.display());

  let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
    path: path.to_path_buf(),
    source: e,
  })?;

  let is_toml = path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

  let value: Value = if is_toml {
    toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
      path: path.to_path_buf(),
      source: e,
    })?
  } else {
    serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
      path: path.to_path_buf(),
      source: e,
    })?
  };

  match value {
    Value::Object(map) => Ok(map),
    _ => Err(ConfigError::NotAnObject {
      path: path.to_path_buf(),
    }),
  }
}

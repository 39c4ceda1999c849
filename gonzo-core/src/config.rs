//! # Configuration Management
//!
//! Locates gonzo's configuration directory (XDG base directory aware) and
//! loads the optional `config.toml` settings file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_REMOTE, DEFAULT_TIMEOUT_SECS, SETTINGS_FILE};

/// Represents the configuration directories for gonzo
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("dev", "", "gonzo").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the path to the settings file
  pub fn settings_path(&self) -> PathBuf {
    self.config_dir.join(SETTINGS_FILE)
  }

  /// Load settings from the settings file, or defaults when it is absent.
  pub fn load_settings(&self) -> Result<Settings> {
    Settings::load_from(self.settings_path())
  }
}

/// User settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Remote that `pu`/`pushf` publish to.
  pub remote: String,
  /// Ceiling for delegated commands, in seconds.
  pub timeout_secs: u64,
  /// Formatter argv run before every commit.
  pub format_command: Option<Vec<String>>,
  /// User segment of ticket branch names.
  pub branch_user: Option<String>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      remote: DEFAULT_REMOTE.to_string(),
      timeout_secs: DEFAULT_TIMEOUT_SECS,
      format_command: None,
      branch_user: None,
    }
  }
}

impl Settings {
  pub fn from_toml_str(content: &str) -> Result<Self> {
    toml::from_str(content).context("Failed to parse settings")
  }

  /// Load settings from `path`. A missing file yields the defaults.
  pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No settings file at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read settings from {}", path.display()))?;
    let settings =
      Self::from_toml_str(&content).with_context(|| format!("Failed to load settings from {}", path.display()))?;
    debug!("Loaded settings from {}", path.display());
    Ok(settings)
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

  /// User segment for ticket branches: the configured value, else `USER`,
  /// else `USERNAME`.
  pub fn resolve_branch_user(&self) -> Option<String> {
    self
      .branch_user
      .clone()
      .filter(|user| !user.is_empty())
      .or_else(|| std::env::var("USER").ok().filter(|user| !user.is_empty()))
      .or_else(|| std::env::var("USERNAME").ok().filter(|user| !user.is_empty()))
  }
}

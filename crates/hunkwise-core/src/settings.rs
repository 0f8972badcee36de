// Rust guideline compliant 2026-10-14

//! File and environment backed settings.

use crate::config::{
    with_diff_tag_prefix, with_diff_unified, with_enable_amend, with_exclude_list, ConfigOption,
    DEFAULT_DIFF_UNIFIED,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file name looked up at the repository root.
pub const SETTINGS_FILE: &str = ".hunkwise.toml";

/// Persistent defaults for a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Context lines for the full diff.
    #[serde(default = "default_diff_unified")]
    pub diff_unified: i32,

    /// Extra exclusion patterns on top of the built-in lock files.
    #[serde(default)]
    pub exclude_list: Vec<String>,

    /// Tag prefix for tag-range diffs. Empty disables tag mode.
    #[serde(default)]
    pub diff_tag_prefix: String,

    /// Whether to diff and commit in amend mode.
    #[serde(default)]
    pub amend: bool,
}

fn default_diff_unified() -> i32 {
    DEFAULT_DIFF_UNIFIED
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            diff_unified: default_diff_unified(),
            exclude_list: Vec::new(),
            diff_tag_prefix: String::new(),
            amend: false,
        }
    }
}

impl Settings {
    /// Loads settings from `<repo_root>/.hunkwise.toml` and the environment.
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. The settings file, if present
    /// 3. `HUNKWISE_` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings file exists but cannot be read
    /// - The settings file contains invalid TOML
    /// - An environment override cannot be parsed
    pub fn load(repo_root: &Path) -> Result<Self> {
        Self::load_file(&repo_root.join(SETTINGS_FILE))
    }

    /// Like [`Settings::load`], with an explicit settings file path.
    ///
    /// # Errors
    ///
    /// See [`Settings::load`].
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut settings: Self = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| {
                Error::InvalidConfig(format!("{}: {}", path.display(), e))
            })?
        } else {
            Self::default()
        };

        settings.apply_env_overrides()?;
        Ok(settings)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `HUNKWISE_DIFF_UNIFIED` - Context lines (integer)
    /// - `HUNKWISE_EXCLUDE_LIST` - Comma separated exclusion patterns
    /// - `HUNKWISE_DIFF_TAG_PREFIX` - Tag prefix
    /// - `HUNKWISE_AMEND` - Amend mode (true/false)
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HUNKWISE_DIFF_UNIFIED") {
            self.diff_unified = val.trim().parse().map_err(|_| {
                Error::InvalidConfig("HUNKWISE_DIFF_UNIFIED must be an integer".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("HUNKWISE_EXCLUDE_LIST") {
            self.exclude_list = val
                .split(',')
                .map(str::trim)
                .filter(|pattern| !pattern.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Ok(val) = std::env::var("HUNKWISE_DIFF_TAG_PREFIX") {
            self.diff_tag_prefix = val;
        }

        if let Ok(val) = std::env::var("HUNKWISE_AMEND") {
            self.amend = val.trim().parse().map_err(|_| {
                Error::InvalidConfig("HUNKWISE_AMEND must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Writes the settings to `<repo_root>/.hunkwise.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, repo_root: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(repo_root.join(SETTINGS_FILE), content)?;
        Ok(())
    }

    /// Converts the settings into configuration options.
    ///
    /// Callers append their own options afterwards so that they win.
    #[must_use]
    pub fn options(&self) -> Vec<ConfigOption> {
        vec![
            with_diff_unified(self.diff_unified),
            with_exclude_list(self.exclude_list.clone()),
            with_diff_tag_prefix(self.diff_tag_prefix.clone()),
            with_enable_amend(self.amend),
        ]
    }
}

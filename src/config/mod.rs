// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for the `dotload` binary.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. dotload.toml (cwd, optional)
//! 3. --config FILE
//! 4. DOTLOAD_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! DOTLOAD_LOG__LEVEL=4            → log.level = 4
//! DOTLOAD_LOAD__FILES=a.env,b.env → load.files = ["a.env", "b.env"]
//! DOTLOAD_LOAD__FILE_NAME=app.env → load.file_name = "app.env"
//! ```
//!
//! The library API (`loader::load`) does not read any of this.

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::loader::{DEFAULT_FILE_NAME, EnvLoader};
use crate::logging::LogLevel;

use loader::ConfigLoader;

/// Complete binary configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Logging options.
    pub log: LogSettings,
    /// Which env files to load.
    pub load: LoadSettings,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Console level (0-6).
    pub level: LogLevel,
    /// File level, falls back to `level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_level: Option<LogLevel>,
    /// Log file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// `[load]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadSettings {
    /// Files loaded in order; empty means the default file.
    pub files: Vec<PathBuf>,
    /// Directory holding the default file (current directory if unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    /// Name of the default file.
    pub file_name: String,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            base_dir: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dotload::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("dotload.toml")
    ///     .with_env_prefix("DOTLOAD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `load.file_name` is empty or
    /// contains a path separator.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let name = self.load.file_name.as_str();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                section: "load".to_string(),
                key: "file_name".to_string(),
                message: format!("expected a bare file name, got '{name}'"),
            });
        }
        Ok(())
    }

    /// Builds an [`EnvLoader`] from the `[load]` section.
    ///
    /// `files` replaces `load.files` when non-empty.
    #[must_use]
    pub fn env_loader(&self, files: &[PathBuf]) -> EnvLoader {
        let files = if files.is_empty() {
            self.load.files.as_slice()
        } else {
            files
        };

        let loader = EnvLoader::new()
            .add_files(files)
            .with_default_file_name(self.load.file_name.clone());
        match &self.load.base_dir {
            Some(dir) => loader.with_base_dir(dir),
            None => loader,
        }
    }

    /// Flattened `section.key = value` lines, ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("log.level", u8::from(self.log.level).to_string());
        options.insert(
            "log.file_level",
            u8::from(self.log.file_level.unwrap_or(self.log.level)).to_string(),
        );
        options.insert(
            "log.file",
            self.log
                .file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "load.files",
            self.load
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
        options.insert(
            "load.base_dir",
            self.load
                .base_dir
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("load.file_name", self.load.file_name.clone());

        options
            .into_iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect()
    }
}

// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("dotload.toml")
//!   .add_toml_file(--config)
//!   .with_env_prefix("DOTLOAD")
//!   .set("log.level", 4)
//!        |
//!        v
//!    build() --> Settings (validated)
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Settings;
use crate::error::{ConfigError, Result};

/// Settings that may be set from the environment, as `section.key`.
const ENV_KEYS: &[&str] = &[
    "log.level",
    "log.file_level",
    "log.file",
    "load.files",
    "load.base_dir",
    "load.file_name",
];

/// Builder for loading settings from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    required: Vec<PathBuf>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            required: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.required.push(p.to_path_buf());
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables.
    ///
    /// Only names of known settings are read. Other variables sharing the
    /// prefix are ignored.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required configuration file is missing.
    /// - A configuration file has invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into `Settings`.
    /// - A value fails validation.
    pub fn build(self) -> Result<Settings> {
        if let Some(missing) = self.required.iter().find(|p| !p.exists()) {
            return Err(ConfigError::NotFound(missing.display().to_string()).into());
        }

        let sources = self.describe_sources();
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("load.files")
                    .try_parsing(true)
                    .source(Some(settings_vars(prefix, std::env::vars_os()))),
            ),
            None => self.builder,
        };

        let settings = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Settings>())
            .map_err(|e| ConfigError::ParseError {
                path: sources,
                message: e.to_string(),
            })?;
        settings.validate()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    fn describe_sources(&self) -> String {
        let mut sources: Vec<String> = self
            .files
            .iter()
            .map(|(_, path)| path.display().to_string())
            .collect();
        if let Some(prefix) = &self.env_prefix {
            sources.push(format!("{prefix}_* variables"));
        }
        if sources.is_empty() {
            return "<defaults>".to_string();
        }
        sources.join(", ")
    }
}

/// Picks the variables named `<PREFIX>_<SECTION>__<KEY>` for a key in
/// [`ENV_KEYS`]. Names match case-insensitively.
fn settings_vars<I>(prefix: &str, vars: I) -> config::Map<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let head = format!("{}_", prefix.to_lowercase());
    vars.into_iter()
        .filter_map(|(name, value)| {
            let name = name.into_string().ok()?;
            let lower = name.to_lowercase();
            let key = lower.strip_prefix(head.as_str())?.replace("__", ".");
            if !ENV_KEYS.contains(&key.as_str()) {
                debug!(var = %name, "ignoring unknown settings variable");
                return None;
            }
            Some((name, value.into_string().ok()?))
        })
        .collect()
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

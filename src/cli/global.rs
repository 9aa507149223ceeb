// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Settings file (in addition to ./dotload.toml)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← log.file override
//! --base-dir DIR    ← load.base_dir override
//! --file-name NAME  ← load.file_name override
//!
//! Precedence: CLI flags > DOTLOAD_* > --config > dotload.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to a TOML settings file.
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory searched for the default env file instead of the current one.
    #[arg(short = 'C', long = "base-dir", value_name = "DIR", global = true)]
    pub base_dir: Option<PathBuf>,

    /// Name of the default env file.
    #[arg(long = "file-name", value_name = "NAME", global = true)]
    pub file_name: Option<String>,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` settings overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("log.level", level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("log.file_level", level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("log.file", path.display().to_string()));
        }

        if let Some(ref dir) = self.base_dir {
            overrides.push(("load.base_dir", dir.display().to_string()));
        }

        if let Some(ref name) = self.file_name {
            overrides.push(("load.file_name", name.clone()));
        }

        overrides
    }
}

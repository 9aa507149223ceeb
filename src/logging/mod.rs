// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tracing subscriber setup for the binary.
//!
//! ```text
//! Settings.log --> LogConfig --> init_logging
//!                                  |
//!                   +--------------+---------------+
//!                   v                              v
//!             stderr layer                file layer (log.file)
//!        filter: console_level        filter: file_level, no ANSI
//!                                     tracing_appender::non_blocking
//!                                              |
//!                                              v
//!                                   LogGuard (flushes on drop)
//! ```
//!
//! Levels 1-5 only let `dotload` events through; 6 opens every target.

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ConfigError, Result};

/// Verbosity from 0 (silent) to 6 (everything, dependencies included).
///
/// Warnings report entries the environment refused. Debug adds a line per
/// env file, trace one per assignment and skipped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LogLevel(u8);

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    const MAX: u8 = 6;

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "dotload=error",
            2 => "dotload=warn",
            3 => "dotload=info",
            4 => "dotload=debug",
            5 => "dotload=trace",
            _ => "trace",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::new(self.to_filter_string())
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> std::result::Result<Self, ConfigError> {
        if level > Self::MAX {
            return Err(ConfigError::InvalidValue {
                section: "log".to_string(),
                key: "level".to_string(),
                message: format!("log level must be 0-{}, got {level}", Self::MAX),
            });
        }
        Ok(Self(level))
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}

/// Keeps the file writer alive; pending lines are flushed when it drops.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// Hold the returned guard until the program exits.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
///
/// # Example
///
/// ```no_run
/// use dotload::logging::{LogConfig, LogLevel, init_logging};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::WARN)
///     .with_log_file("dotload.log".to_string())
///     .build();
/// let _guard = init_logging(&config)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    // stdout is reserved for `show`, `check` and child output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(config.console_level().filter());

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = open_log_file(Path::new(path))?;
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(config.file_level().filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn open_log_file(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(file))
}

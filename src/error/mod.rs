// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          DotloadError (16 bytes)
//!                  |
//!       +----------+----------+
//!       |          |          |
//!       v          v          v
//!     Load      Config     Process
//!     Box        Box        Box
//!
//! Sub-errors (unboxed internally):
//!   Load     NotFound, Open, Read, CurrentDir
//!   Config   ParseError, InvalidValue, NotFound
//!   Process  MissingCommand, SpawnFailed, Terminated
//! ```
//!
//! Malformed lines are never errors; only I/O failures reach `LoadError`.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum pointer-sized plus a tag.
#[derive(Debug, Error)]
pub enum DotloadError {
    /// Loading an env file failed.
    #[error("load error: {0}")]
    Load(#[from] Box<LoadError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Child process error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DotloadError {
                fn from(err: $error) -> Self {
                    DotloadError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    LoadError => Load,
    ConfigError => Config,
    ProcessError => Process,
}

// --- Load Errors ---

/// Errors surfaced while loading env files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The default env file does not exist.
    #[error("env file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// An env file could not be opened.
    #[error("failed to open env file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an env file failed part way through.
    #[error("failed to read env file '{}' at line {line}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// The working directory could not be determined for the default file.
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

impl LoadError {
    /// Returns true if the error means a file did not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Open { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::Read { .. } | Self::CurrentDir(_) => false,
        }
    }

    /// Path of the file involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotFound { path } | Self::Open { path, .. } | Self::Read { path, .. } => {
                Some(path.as_path())
            }
            Self::CurrentDir(_) => None,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Errors from the command launched by `dotload run`.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// No command was given.
    #[error("no command given")]
    MissingCommand,

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process ended without an exit code (killed by a signal).
    #[error("process '{command}' terminated by signal")]
    Terminated { command: String },
}

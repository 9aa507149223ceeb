// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for dotload using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! dotload [global options] <command>
//! run   [-f FILE]... -- CMD [ARGS]...
//! show  [-f FILE]... [--json]
//! check [-f FILE]...
//! options
//! version
//! ```

pub mod files;
pub mod global;


use crate::cli::files::{CheckArgs, RunArgs, ShowArgs};
use crate::cli::global::GlobalOptions;
use crate::error::Result;
use anyhow::Context;
use clap::{Parser, Subcommand};

/// Load `.env` files into the environment
#[derive(Debug, Parser)]
#[command(
    name = "dotload",
    author,
    version,
    about = "Load .env files into the environment",
    long_about = "Reads KEY=VALUE lines from .env files and applies them to the\n\
                  environment. Later lines and files overwrite earlier ones.\n\n\
                  Without -f, the file `.env` in the current directory (or\n\
                  --base-dir) is used and must exist.",
    after_help = "FILE FORMAT:\n\n\
                  One KEY=VALUE per line, split at the first '='. Whitespace\n\
                  around key and value is trimmed. Lines starting with '#' and\n\
                  blank lines are ignored, as are lines without '='. A value of\n\
                  exactly `null` becomes the empty string. No quoting, escaping,\n\
                  interpolation or multi-line values."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists the effective settings.
    Options,

    /// Loads env files, then runs a command with the resulting environment.
    Run(RunArgs),

    /// Prints the variables env files would set, without applying them.
    Show(ShowArgs),

    /// Reports per-file line statistics and malformed lines.
    Check(CheckArgs),
}

impl Cli {
    /// The command to run.
    ///
    /// # Errors
    ///
    /// Returns an error when no command was given.
    pub fn require_command(&self) -> Result<&Command> {
        self.command
            .as_ref()
            .context("no command specified, use --help for usage information")
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

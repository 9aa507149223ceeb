// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the commands that read env files.

use clap::{ArgAction, Args};
use std::path::PathBuf;

/// Env files to load, in order.
#[derive(Debug, Clone, Default, Args)]
pub struct FileArgs {
    /// Env file to load; repeat for more. Defaults to `.env`.
    #[arg(short = 'f', long = "file", value_name = "FILE", action = ArgAction::Append)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub files: FileArgs,

    /// Command to run, followed by its arguments.
    #[arg(value_name = "COMMAND", required = true, num_args = 1.., last = true)]
    pub command: Vec<String>,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub files: FileArgs,

    /// Print a JSON object instead of KEY=VALUE lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub files: FileArgs,
}

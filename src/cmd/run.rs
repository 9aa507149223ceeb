// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `run`: load env files into this process, then spawn a command.
//!
//! ```text
//! EnvLoader --> ProcessEnv (set_var)
//!     |
//!     v
//! tokio::process::Command (inherits environment)
//!     |
//!     v
//! child exit code --> dotload exit code
//! ```

use tracing::{debug, trace};

use crate::cli::files::RunArgs;
use crate::config::Settings;
use crate::env::ProcessEnv;
use crate::error::{DotloadError, ProcessError, Result};

/// Main handler for the run command.
///
/// Returns the child's exit code.
///
/// # Errors
///
/// Returns an error if loading fails, the command cannot be spawned, or the
/// child is terminated by a signal.
pub async fn run_run_command(args: &RunArgs, settings: &Settings) -> Result<i32> {
    settings
        .env_loader(&args.files.files)
        .load_into(&mut ProcessEnv::new())
        .map_err(DotloadError::from)?;

    let (program, rest) = args
        .command
        .split_first()
        .ok_or(ProcessError::MissingCommand)?;

    debug!(cmd = %args.command.join(" "), "exec");
    let status = tokio::process::Command::new(program)
        .args(rest)
        .status()
        .await
        .map_err(|source| ProcessError::SpawnFailed {
            command: program.clone(),
            source,
        })?;

    let Some(code) = status.code() else {
        return Err(ProcessError::Terminated {
            command: program.clone(),
        }
        .into());
    };
    trace!(process = %program, exit_code = code, "completed");
    Ok(code)
}

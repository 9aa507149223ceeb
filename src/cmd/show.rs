// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `show`: print what env files would set, without touching the process.

use crate::cli::files::ShowArgs;
use crate::config::Settings;
use crate::env::MemoryEnv;
use crate::error::{DotloadError, Result};

/// Main handler for the show command.
///
/// # Errors
///
/// Returns an error if loading fails or JSON serialization fails.
pub fn run_show_command(args: &ShowArgs, settings: &Settings) -> Result<()> {
    let mut env = MemoryEnv::new();
    settings
        .env_loader(&args.files.files)
        .load_into(&mut env)
        .map_err(DotloadError::from)?;

    print!("{}", render_env(&env, args.json)?);
    Ok(())
}

/// Renders variables as sorted `KEY=VALUE` lines or a JSON object.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_env(env: &MemoryEnv, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(env.to_map())?;
        out.push('\n');
        return Ok(out);
    }

    Ok(env
        .iter()
        .map(|(key, value)| format!("{key}={value}\n"))
        .collect())
}

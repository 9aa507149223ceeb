// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Command Dispatch
//!   Run | Show | Check | Options | Version
//! ```

use std::process::ExitCode;

use dotload::cli::global::GlobalOptions;
use dotload::cli::{self, Command};
use dotload::cmd::check::run_check_command;
use dotload::cmd::config::run_options_command;
use dotload::cmd::run::run_run_command;
use dotload::cmd::show::run_show_command;
use dotload::config::Settings;
use dotload::config::loader::ConfigLoader;
use dotload::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Settings file picked up from the current directory when present.
const LOCAL_SETTINGS_FILE: &str = "dotload.toml";

/// Prefix of the environment variables that override settings.
const ENV_PREFIX: &str = "DOTLOAD";

// Single-threaded runtime: `run` writes the process environment before
// spawning, and no other thread may read it meanwhile.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let config_files = loader.loaded_files();
    let settings = match loader.build() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&settings)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &settings, &config_files).await
}

fn build_log_config(settings: &Settings) -> LogConfig {
    let console_level = settings.log.level;
    let file_level = settings.log.file_level.unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(settings.log.file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn build_config_loader(global: &GlobalOptions) -> dotload::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(LOCAL_SETTINGS_FILE);
    if let Some(path) = &global.config {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

async fn dispatch_command(
    cli: &cli::Cli,
    settings: &Settings,
    config_files: &[(String, std::path::PathBuf)],
) -> ExitCode {
    let result = match cli.require_command() {
        Ok(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Ok(Command::Options) => {
            run_options_command(settings, config_files);
            Ok(())
        }
        Ok(Command::Run(args)) => match run_run_command(args, settings).await {
            Ok(code) => return exit_code(code),
            Err(e) => Err(e),
        },
        Ok(Command::Show(args)) => run_show_command(args, settings),
        Ok(Command::Check(args)) => run_check_command(args, settings),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Maps a child exit code onto ours; codes outside 0-255 become 1.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

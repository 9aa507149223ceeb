// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use dotload::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Commands
// =============================================================================

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["dotload"]).unwrap();
    assert!(cli.command.is_none());

    let err = cli.require_command().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no command specified, use --help for usage information");
}

#[test]
fn cli_options_command() {
    let cli = Cli::try_parse_from(["dotload", "options"]).unwrap();
    assert!(matches!(cli.require_command(), Ok(Command::Options)));
}

#[test]
fn cli_run_with_default_file() {
    let cli = Cli::try_parse_from(["dotload", "run", "--", "env"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert!(args.files.files.is_empty());
    assert_eq!(args.command, ["env"]);
}

#[test]
fn cli_run_keeps_command_flags() {
    let cli = Cli::try_parse_from([
        "dotload", "run", "--file", "prod.env", "--", "server", "--port", "8080", "-v",
    ])
    .unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.files.files, [PathBuf::from("prod.env")]);
    assert_eq!(args.command, ["server", "--port", "8080", "-v"]);
}

#[test]
fn cli_check_multiple_files() {
    let cli = Cli::try_parse_from(["dotload", "check", "-f", "a.env", "-f", "b.env"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(
        args.files.files,
        [PathBuf::from("a.env"), PathBuf::from("b.env")]
    );
}

// =============================================================================
// Global options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "dotload",
        "-c",
        "ci/dotload.toml",
        "--file-log-level",
        "5",
        "--file-name",
        "ci.env",
        "show",
    ])
    .unwrap();

    assert_eq!(cli.global.config, Some(PathBuf::from("ci/dotload.toml")));
    assert_eq!(cli.global.file_log_level, Some(5));
    assert_eq!(cli.global.log_level, None);
    assert_eq!(cli.global.file_name.as_deref(), Some("ci.env"));
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["dotload", "export"]).is_err());
}

// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{ConfigLoader, LogSettings, Settings};
use crate::logging::LogLevel;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    insta::assert_json_snapshot!(settings, @r#"
    {
      "log": {
        "level": 3
      },
      "load": {
        "files": [],
        "file_name": ".env"
      }
    }
    "#);
}

#[test]
fn test_parse_full() {
    let settings = Settings::parse(
        r#"
[log]
level = 4
file = "logs/dotload.log"

[load]
files = ["base.env", "local.env"]
base_dir = "/srv/app"
file_name = "app.env"
"#,
    )
    .unwrap();

    assert_eq!(settings.log.level, LogLevel::DEBUG);
    assert_eq!(settings.log.file, Some(PathBuf::from("logs/dotload.log")));
    assert_eq!(
        settings.load.files,
        vec![PathBuf::from("base.env"), PathBuf::from("local.env")]
    );
    assert_eq!(settings.load.base_dir, Some(PathBuf::from("/srv/app")));
    assert_eq!(settings.load.file_name, "app.env");
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(Settings::parse("[load]\nfilez = []").is_err());
    assert!(Settings::parse("[global]\ndry = true").is_err());
}

#[test]
fn test_parse_rejects_bad_log_level() {
    assert!(Settings::parse("[log]\nlevel = 9").is_err());
}

#[test]
fn test_validate_file_name() {
    let err = Settings::parse("[load]\nfile_name = \"conf/.env\"").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'file_name' in section '[load]': expected a bare file name, got 'conf/.env'"
    );
    assert!(Settings::parse("[load]\nfile_name = \"\"").is_err());
}

#[test]
fn test_env_loader_from_settings() {
    let settings = Settings::parse(
        r#"
[load]
files = ["from-config.env"]
base_dir = "/srv/app"
"#,
    )
    .unwrap();

    let loader = settings.env_loader(&[]);
    assert_eq!(loader.files(), [PathBuf::from("from-config.env")]);

    let loader = settings.env_loader(&[PathBuf::from("from-cli.env")]);
    assert_eq!(loader.files(), [PathBuf::from("from-cli.env")]);

    let loader = Settings::default().env_loader(&[]);
    assert!(loader.files().is_empty());
    assert_eq!(loader.default_file_name(), ".env");
}

#[test]
fn test_format_options() {
    let settings = Settings::parse("[load]\nfiles = [\"a.env\", \"b.env\"]").unwrap();
    insta::assert_debug_snapshot!(settings.format_options(), @r#"
    [
        "load.base_dir = ",
        "load.file_name = .env",
        "load.files = a.env, b.env",
        "log.file = ",
        "log.file_level = 3",
        "log.level = 3",
    ]
    "#);
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[log]\nlevel = 1").expect("failed to write temp file");

    let settings = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");

    assert_eq!(settings.log.level, LogLevel::ERROR);
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let err = ConfigLoader::new()
        .add_toml_file("/nonexistent/path/to/dotload.toml")
        .build()
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"config file not found: /nonexistent/path/to/dotload.toml");
}

#[test]
fn test_config_loader_optional_file_missing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/dotload.toml");
    assert!(loader.loaded_files().is_empty());
    assert_eq!(loader.build().unwrap(), Settings::default());
}

#[test]
fn test_config_loader_invalid_toml() {
    let err = ConfigLoader::new()
        .add_toml_str("this is not valid toml {{{{")
        .build()
        .unwrap_err();
    assert!(err.to_string().starts_with("failed to parse config file '<string>'"));
}

#[test]
fn test_config_loader_overrides_win() {
    let settings = ConfigLoader::new()
        .add_toml_str("[log]\nlevel = 1\n[load]\nfile_name = \"a.env\"")
        .set("log.level", 5_i64)
        .unwrap()
        .set("load.file_name", "b.env")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.log.level, LogLevel::TRACE);
    assert_eq!(settings.load.file_name, "b.env");
    assert_eq!(settings.load.base_dir, None);
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the prefix is unique to this test, nothing else reads these variables
    unsafe {
        std::env::set_var("DOTLOADCFGTEST_LOG__LEVEL", "4");
        std::env::set_var("DOTLOADCFGTEST_LOAD__FILES", "one.env,two.env");
        std::env::set_var("DOTLOADCFGTEST_LOAD__FILE_NAME", "app.env");
    }

    let settings = ConfigLoader::new()
        .add_toml_str("[log]\nlevel = 2")
        .with_env_prefix("DOTLOADCFGTEST")
        .build()
        .unwrap();

    assert_eq!(settings.log.level, LogLevel::DEBUG);
    assert_eq!(
        settings.load.files,
        vec![PathBuf::from("one.env"), PathBuf::from("two.env")]
    );
    assert_eq!(settings.load.file_name, "app.env");
}

#[test]
fn test_config_loader_ignores_unrelated_prefixed_vars() {
    // SAFETY: the prefix is unique to this test, nothing else reads these variables
    unsafe {
        std::env::set_var("DOTLOADSTRAYTEST_HOME", "/opt/app");
        std::env::set_var("DOTLOADSTRAYTEST_LOG__COLOR", "always");
        std::env::set_var("DOTLOADSTRAYTEST_LOG__LEVEL", "5");
    }

    let settings = ConfigLoader::new()
        .with_env_prefix("DOTLOADSTRAYTEST")
        .build()
        .unwrap();

    let expected = Settings {
        log: LogSettings {
            level: LogLevel::TRACE,
            ..LogSettings::default()
        },
        ..Settings::default()
    };
    assert_eq!(settings, expected);
}

#[test]
fn test_config_loader_env_error_names_variables() {
    // SAFETY: the prefix is unique to this test, nothing else reads these variables
    unsafe {
        std::env::set_var("DOTLOADBADENVTEST_LOG__LEVEL", "9");
    }

    let err = ConfigLoader::new()
        .with_env_prefix("DOTLOADBADENVTEST")
        .build()
        .unwrap_err();

    assert!(
        err.to_string()
            .starts_with("failed to parse config file 'DOTLOADBADENVTEST_* variables'"),
        "{err}"
    );
}

// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings-related commands.

use std::path::PathBuf;

use crate::config::Settings;

/// Display effective settings and the files they came from.
pub fn run_options_command(settings: &Settings, config_files: &[(String, PathBuf)]) {
    for line in settings.format_options() {
        println!("{line}");
    }

    if config_files.is_empty() {
        println!("# no settings files loaded");
    } else {
        for (i, (source, path)) in config_files.iter().enumerate() {
            println!("# {}. [{}] {}", i + 1, source, path.display());
        }
    }
}

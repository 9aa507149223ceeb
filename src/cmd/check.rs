// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `check`: per-file line statistics.
//!
//! Malformed lines are reported but do not fail the command; only I/O
//! errors do.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::cli::files::CheckArgs;
use crate::config::Settings;
use crate::error::{DotloadError, Result};
use crate::loader::{EnvLoader, LineVisitor};
use crate::parser::ParsedLine;

/// Line counts for one env file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub entries: usize,
    pub comments: usize,
    pub blank: usize,
    /// Line numbers of lines without `=`.
    pub malformed: Vec<usize>,
}

/// Main handler for the check command.
///
/// # Errors
///
/// Returns an error if a file cannot be opened or read.
pub fn run_check_command(args: &CheckArgs, settings: &Settings) -> Result<()> {
    let reports = collect_reports(&settings.env_loader(&args.files.files))?;
    print!("{}", render_reports(&reports));
    Ok(())
}

/// Walks every source and counts its lines by kind.
///
/// # Errors
///
/// Returns an error on the first I/O failure.
pub fn collect_reports(loader: &EnvLoader) -> Result<Vec<FileReport>> {
    let mut reports = Reports::default();
    loader.visit(&mut reports).map_err(DotloadError::from)?;
    Ok(reports.0)
}

#[derive(Default)]
struct Reports(Vec<FileReport>);

impl LineVisitor for Reports {
    fn file_start(&mut self, path: &Path) {
        self.0.push(FileReport {
            path: path.to_path_buf(),
            ..FileReport::default()
        });
    }

    fn line(&mut self, _path: &Path, line: usize, parsed: &ParsedLine) {
        let Some(report) = self.0.last_mut() else {
            return;
        };
        match parsed {
            ParsedLine::Entry(_) => report.entries += 1,
            ParsedLine::Comment => report.comments += 1,
            ParsedLine::Blank => report.blank += 1,
            ParsedLine::Malformed => report.malformed.push(line),
        }
    }
}

/// Formats reports as one block per file.
#[must_use]
pub fn render_reports(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(
            out,
            "{}: {} entries, {} comments, {} blank, {} malformed",
            report.path.display(),
            report.entries,
            report.comments,
            report.blank,
            report.malformed.len()
        );
        for line in &report.malformed {
            let _ = writeln!(out, "  line {line}: no '=' separator, ignored");
        }
    }
    out
}

// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loading env files into an environment sink.
//!
//! # Loader Pipeline
//!
//! ```text
//! EnvLoader::new()
//!   .add_file(a) .add_file(b)      (none -> <base_dir|cwd>/.env)
//!   .with_base_dir() .with_default_file_name()
//!        |
//!        v
//!   for each file, in order:             (LineVisitor drives the walk)
//!     open  --err--> LoadError (abort, earlier writes stay)
//!     Lines --err--> LoadError::Read
//!     Entry --> sink.set() immediately (rejection = warn + skip)
//!     close
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::env::{EnvSink, ProcessEnv};
use crate::error::LoadError;
use crate::parser::{Lines, ParsedLine};

/// File name used when no paths are given.
pub const DEFAULT_FILE_NAME: &str = ".env";

/// Loads the given files into the process environment.
///
/// With no paths, `<current directory>/.env` is loaded and its absence is an
/// error. The first file that cannot be opened or read aborts the load;
/// entries from files before it stay applied.
///
/// # Errors
///
/// Returns a [`LoadError`] on the first I/O failure.
///
/// # Example
///
/// ```no_run
/// dotload::loader::load::<&str>(&[]).expect("missing .env");
/// dotload::loader::load(&["base.env", "local.env"]).expect("failed to load env");
/// ```
pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<(), LoadError> {
    EnvLoader::new()
        .add_files(paths)
        .load_into(&mut ProcessEnv::new())
}

/// Resolves the default env file path.
///
/// # Errors
///
/// Returns [`LoadError::CurrentDir`] if `base_dir` is `None` and the current
/// directory cannot be determined.
pub fn resolve_default_path(
    base_dir: Option<&Path>,
    file_name: &str,
) -> Result<PathBuf, LoadError> {
    match base_dir {
        Some(dir) => Ok(dir.join(file_name)),
        None => std::env::current_dir()
            .map(|dir| dir.join(file_name))
            .map_err(LoadError::CurrentDir),
    }
}

/// Builder describing which env files to load.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    files: Vec<PathBuf>,
    base_dir: Option<PathBuf>,
    file_name: Option<String>,
}

impl EnvLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file. Files are loaded in the order they are added.
    #[must_use]
    pub fn add_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn add_files<P: AsRef<Path>>(mut self, paths: &[P]) -> Self {
        self.files.extend(paths.iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Directory searched for the default file instead of the current one.
    #[must_use]
    pub fn with_base_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.base_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Name of the default file (`.env` unless set).
    #[must_use]
    pub fn with_default_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    #[must_use]
    pub fn default_file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    /// Files that a load would read, in order.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::CurrentDir`] if the default path cannot be resolved.
    pub fn sources(&self) -> Result<Vec<PathBuf>, LoadError> {
        if self.files.is_empty() {
            let path = resolve_default_path(self.base_dir.as_deref(), self.default_file_name())?;
            Ok(vec![path])
        } else {
            Ok(self.files.clone())
        }
    }

    /// Loads every source into `sink`.
    ///
    /// Each entry is written as soon as its line is parsed, so later lines
    /// and files overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] on the first I/O failure.
    pub fn load_into<S: EnvSink + ?Sized>(&self, sink: &mut S) -> Result<(), LoadError> {
        self.for_each_line(|path, line, parsed| {
            if let ParsedLine::Entry(entry) = parsed {
                if sink.set(&entry.key, &entry.value) {
                    trace!(key = %entry.key, line, "set");
                } else {
                    warn!(
                        path = %path.display(),
                        line,
                        key = %entry.key,
                        "entry rejected by environment, skipped"
                    );
                }
            }
        })
    }

    /// Walks every line of every source in order.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] on the first I/O failure.
    pub fn for_each_line<F>(&self, visit: F) -> Result<(), LoadError>
    where
        F: FnMut(&Path, usize, &ParsedLine),
    {
        self.visit(&mut FnVisitor(visit))
    }

    /// Drives `visitor` over every source in order.
    ///
    /// Each file is open only while its lines are visited.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] on the first I/O failure.
    pub fn visit<V: LineVisitor + ?Sized>(&self, visitor: &mut V) -> Result<(), LoadError> {
        let default = self.files.is_empty();
        for path in self.sources()? {
            let reader = open_source(&path, default)?;
            debug!(path = %path.display(), "loading env file");
            visitor.file_start(&path);

            let mut lines = Lines::new(reader);
            let mut entries = 0usize;
            while let Some(item) = lines.next() {
                let (line, parsed) = item.map_err(|source| LoadError::Read {
                    path: path.clone(),
                    line: lines.line_number(),
                    source,
                })?;
                match &parsed {
                    ParsedLine::Entry(_) => entries += 1,
                    ParsedLine::Malformed => {
                        trace!(path = %path.display(), line, "no '=' separator, skipped");
                    }
                    ParsedLine::Blank | ParsedLine::Comment => {}
                }
                visitor.line(&path, line, &parsed);
            }
            debug!(
                path = %path.display(),
                entries,
                lines = lines.line_number(),
                "env file loaded"
            );
        }
        Ok(())
    }
}

/// Receives the lines of each source as a load walks them.
pub trait LineVisitor {
    /// Called once per source after it was opened, before its first line.
    fn file_start(&mut self, _path: &Path) {}

    /// Called for every line, including blank and comment lines.
    fn line(&mut self, path: &Path, line: usize, parsed: &ParsedLine);
}

struct FnVisitor<F>(F);

impl<F: FnMut(&Path, usize, &ParsedLine)> LineVisitor for FnVisitor<F> {
    fn line(&mut self, path: &Path, line: usize, parsed: &ParsedLine) {
        (self.0)(path, line, parsed);
    }
}

fn open_source(path: &Path, default: bool) -> Result<BufReader<File>, LoadError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if default && e.kind() == std::io::ErrorKind::NotFound => {
            Err(LoadError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(LoadError::Open {
            path: path.to_path_buf(),
            source,
        }),
    }
}

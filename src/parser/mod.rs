// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line parser for the dotenv format.
//!
//! ```text
//! raw line
//!    |
//!    +-- trim() empty ........... Blank
//!    +-- first non-ws is '#' .... Comment
//!    +-- no '=' ................. Malformed
//!    +-- split at first '='
//!          key.trim() / value.trim()
//!          value == "null" -> ""
//!          ........................ Entry
//! ```
//!
//! No quoting, escaping, interpolation or multi-line values. Everything
//! after the first `=` belongs to the value.

use std::io::BufRead;

/// Literal value that collapses to an empty string.
pub const NULL_VALUE: &str = "null";

/// A single `KEY=VALUE` pair parsed from one line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    /// Creates an entry from already-trimmed parts.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Classification of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Empty or whitespace-only.
    Blank,
    /// Full-line `#` comment.
    Comment,
    /// Non-blank line without a `=` separator.
    Malformed,
    /// A key/value pair.
    Entry(Entry),
}

impl ParsedLine {
    /// Consumes the line, returning the entry if there is one.
    #[must_use]
    pub fn into_entry(self) -> Option<Entry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Blank | Self::Comment | Self::Malformed => None,
        }
    }
}

/// Parses a single line (without its terminator).
#[must_use]
pub fn parse_line(line: &str) -> ParsedLine {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ParsedLine::Blank;
    }
    if trimmed.starts_with('#') {
        return ParsedLine::Comment;
    }

    let Some((key, value)) = line.split_once('=') else {
        return ParsedLine::Malformed;
    };

    let value = value.trim();
    let value = if value == NULL_VALUE { "" } else { value };

    ParsedLine::Entry(Entry::new(key.trim(), value))
}

/// Parses in-memory content, keeping only the entries.
#[must_use]
pub fn parse_str(content: &str) -> Vec<Entry> {
    content
        .lines()
        .filter_map(|line| parse_line(line).into_entry())
        .collect()
}

/// Iterator over the parsed lines of a reader.
///
/// Yields `(line_number, ParsedLine)` with 1-based line numbers. `\n` and
/// `\r\n` terminators are stripped. Content that is not valid UTF-8 yields
/// an `InvalidData` error.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line: 0,
        }
    }

    /// Number of the last line read, or of the line that failed to read.
    ///
    /// Zero before the first call to `next`. End of input does not advance it.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = std::io::Result<(usize, ParsedLine)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let result = self.reader.read_line(&mut self.buf);
        if !matches!(result, Ok(0)) {
            self.line += 1;
        }
        match result {
            Ok(0) => None,
            Ok(_) => {
                let text = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
                let text = text.strip_suffix('\r').unwrap_or(text);
                Some(Ok((self.line, parse_line(text))))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests;

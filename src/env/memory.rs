// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory environment table.
//!
//! ```text
//! MemoryEnv: BTreeMap<String, String>, deterministic order
//! Sources: MemoryEnv::new(), MemoryEnv::from_map()
//! ```

use std::collections::BTreeMap;

use super::{EnvSink, is_assignable};

/// An environment table that lives only in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Gets a variable value.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns an iterator over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub const fn to_map(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl EnvSink for MemoryEnv {
    fn set(&mut self, key: &str, value: &str) -> bool {
        if !is_assignable(key, value) {
            return false;
        }
        self.vars.insert(key.to_owned(), value.to_owned());
        true
    }

    fn get(&self, key: &str) -> Option<String> {
        self.value(key).map(str::to_owned)
    }
}

// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment sinks.
//!
//! # Architecture
//!
//! ```text
//! EnvSink (set / get)
//!   ProcessEnv  -> std::env (process-wide table)
//!   MemoryEnv   -> BTreeMap<String, String>
//! ```
//!
//! - **Best effort**: `set` returns `false` instead of failing
//! - **Same rules everywhere**: both sinks reject what the OS would reject

pub mod memory;
pub mod process;


pub use memory::MemoryEnv;
pub use process::ProcessEnv;

/// Destination for parsed entries.
pub trait EnvSink {
    /// Assigns `value` to `key`, overwriting any existing value.
    ///
    /// Returns `false` if the pair was rejected. Never panics.
    fn set(&mut self, key: &str, value: &str) -> bool;

    /// Reads the current value of `key`.
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: EnvSink + ?Sized> EnvSink for &mut S {
    fn set(&mut self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Whether the pair can be stored in an environment table.
///
/// Keys must be non-empty and free of `=` and NUL; values must be free of NUL.
#[must_use]
pub fn is_assignable(key: &str, value: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
}

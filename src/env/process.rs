// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sink backed by the real process environment.

use super::{EnvSink, is_assignable};

/// Writes entries into the process-wide environment table.
///
/// The table is shared by every thread of the process. Callers must make
/// sure no other thread reads or writes the environment while loading.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EnvSink for ProcessEnv {
    fn set(&mut self, key: &str, value: &str) -> bool {
        if !is_assignable(key, value) {
            return false;
        }
        // SAFETY: no other thread touches the environment during a load. The
        // binary's runtime is single-threaded and the log writer thread never
        // reads the environment.
        unsafe {
            std::env::set_var(key, value);
        }
        true
    }

    fn get(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var(key).ok()
    }
}

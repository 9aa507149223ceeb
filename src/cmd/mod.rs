// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   run, show, check, options
//! ```

pub mod check;
pub mod config;
pub mod run;
pub mod show;

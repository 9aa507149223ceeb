// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! Loads `KEY=VALUE` lines from `.env` files into the process environment.
//!
//! ```no_run
//! // ./.env must exist
//! dotload::load::<&str>(&[]).expect("failed to load .env");
//! let url = std::env::var("DATABASE_URL");
//! ```
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |           run / show / check
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  dotload.toml, DOTLOAD_*  |
//!              '-------------+-------------'
//!                            v
//!                  loader (EnvLoader, load)
//!                     |             |
//!                     v             v
//!                  parser          env
//!              line -> Entry   ProcessEnv / MemoryEnv
//!
//!   +-----------------------------------------+
//!   |  foundation        error, logging       |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod loader;
pub mod logging;
pub mod parser;

pub use env::{EnvSink, MemoryEnv, ProcessEnv};
pub use error::LoadError;
pub use loader::{EnvLoader, load};
pub use parser::{Entry, ParsedLine, parse_line};

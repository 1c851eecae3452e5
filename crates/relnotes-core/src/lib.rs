//! relnotes Core - Core library for changelog generation
//!
//! This crate provides the error types and configuration shared by the
//! changelog engine and the `relnotes` CLI.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Config, EntryCase};
pub use error::{ChangelogError, ConfigError, RelnotesError, Result};

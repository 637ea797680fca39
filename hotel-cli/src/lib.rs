//! Library exports for hotel-cli.
//!
//! This module exports the CLI structure so that the binary and the
//! integration tests share one definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;

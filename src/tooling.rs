//! Tooling Layer
//!
//! Command-line interface over the inventory store, including the
//! interactive menu shell.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, LoggingOverrides};

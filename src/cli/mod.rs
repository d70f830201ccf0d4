//! CLI module for the trivia API
//!
//! Provides command-line interface for:
//! - serve: Open the store and run the HTTP API
//! - check-config: Validate and print the effective configuration

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, open_store, run, run_command, serve};
pub use config::{Config, DATABASE_URL_ENV, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};

//! CLI argument definitions using clap
//!
//! Commands:
//! - trivia serve [--config <path>] [--port <port>]
//! - trivia check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// trivia - HTTP backend for a trivia game
#[derive(Parser, Debug)]
#[command(name = "trivia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the trivia HTTP API
    Serve {
        /// Path to configuration file (default: ./trivia.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overrides the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate configuration and print the effective settings
    CheckConfig {
        /// Path to configuration file (default: ./trivia.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

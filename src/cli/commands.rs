//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::{MemoryStore, PgStore, Seed, SharedStore};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Start the HTTP API
///
/// 1. Resolve configuration
/// 2. Initialize logging
/// 3. Open the store
/// 4. Serve until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::resolve(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    init_logging(&config.log_level, config.json_logs)
        .map_err(|e| CliError::boot_failed(format!("Failed to initialize logging: {}", e)))?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = open_store(&config).await?;
        let server = HttpServer::with_config(config.http_config(), store);

        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Open the store selected by `config`
pub async fn open_store(config: &Config) -> CliResult<SharedStore> {
    match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url, config.max_connections).await?;
            Ok(Arc::new(store))
        }
        None => {
            let seed = match &config.seed_file {
                Some(path) => Seed::from_file(path)?,
                None => Seed::standard(),
            };
            let store = MemoryStore::from_seed(seed)?;
            tracing::warn!("no database_url configured, serving from an in-memory store");
            Ok(Arc::new(store))
        }
    }
}

/// Print the effective configuration as JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    let rendered = serde_json::to_string_pretty(&config.redacted())?;
    writeln!(io::stdout().lock(), "{}", rendered)?;
    Ok(())
}

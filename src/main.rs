//! Record log HTTP server binary entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use recordlog::server::{CliArgs, LogServer, ServerConfig};
use recordlog::RecordLog;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();
    let server_config = ServerConfig::from(&args);

    // The log is created empty and lives for the process lifetime
    let log = Arc::new(RecordLog::new());
    tracing::info!("Opened empty record log");

    // Create and run the server
    let server = LogServer::new(log, server_config);
    server.run().await;
}

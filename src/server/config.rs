//! Configuration for the log server.

use clap::Parser;

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "recordlog")]
#[command(about = "Append-only record log with a JSON HTTP API")]
pub struct CliArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "RECORDLOG_PORT")]
    pub port: u16,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl From<&CliArgs> for ServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self { port: args.port }
    }
}

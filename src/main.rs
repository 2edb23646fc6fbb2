//! tibra-server binary entry point
//!
//! Usage:
//!   tibra-server                         # defaults, DATABASE_URL from env/.env
//!   tibra-server --port 9000 --bind 0.0.0.0
//!   RUST_LOG=tibra_server=debug tibra-server

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tibra_server::ServerConfig;

/// Server command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tibra-server", version, about)]
struct ServerArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// PostgreSQL connection string (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Origin allowed for credentialed cross-origin requests
    #[arg(long)]
    cors_origin: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the config reads the environment
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let args = ServerArgs::parse();

    let defaults = ServerConfig::default();
    let config = ServerConfig {
        host: args.bind,
        port: args.port,
        database_url: args.database_url.unwrap_or(defaults.database_url),
        cors_origin: args.cors_origin.unwrap_or(defaults.cors_origin),
        timeout_secs: args.timeout,
    };

    tibra_server::serve(config).await?;
    Ok(())
}

//! Tic-tac-toe server CLI.

use anyhow::Result;
use clap::Parser;
use tictactoe_server::{Cli, Command, ServerConfig, run_local, serve};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { config, host, port } => {
            let config = ServerConfig::load(config.as_deref())?.with_overrides(host, port);
            info!(addr = %config.bind_addr(), "Starting tic-tac-toe server");
            serve(config).await
        }
        Command::Play => run_local(std::io::stdin().lock(), std::io::stdout()),
    }
}

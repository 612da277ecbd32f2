//! signup-gate - Entry Point
//!
//! Loads `config.toml` (plus `SIGNUP_GATE_*` overrides) and serves the account protocol.

use log::{error, info};
use std::process::ExitCode;

use signup_gate::{Server, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Launching signup-gate...");

    let server = match Server::bind(config).await {
        Ok(server) => server,
        Err(e) => {
            error!("Server startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    server.start().await;

    ExitCode::SUCCESS
}

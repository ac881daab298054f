//! RAX Clip Server - Entry Point
//!
//! Lets a browser push text, images and files to this host.

use clap::Parser;
use log::{error, info};

use rax_clip_server::Server;
use rax_clip_server::config::{Args, ServerConfig};
use rax_clip_server::utils::logging::setup_logging;

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();
    let config = match ServerConfig::load(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Launching clipboard server...");

    let server = match Server::new(config).await {
        Ok(server) => server,
        Err(e) => {
            error!("Server startup failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.start().await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

//! Main entry point for the relay server.
//!
//! Parses the command line, initializes logging, loads `.env` and the relay
//! configuration, then serves the chat routes until Ctrl-C.

use clap::Parser;
use std::net::SocketAddr;
use std::process::ExitCode;
use tracing::{error, info, warn};
use webhook_relay::relay::RelayHandler;
use webhook_relay::{api, cli, config, utils};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let config = match config::load_relay_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if config.webhook_url.as_deref().map_or(true, |u| u.trim().is_empty()) {
        warn!("No webhook URL configured, chat requests will fail until it is set");
    }
    info!(
        "Credential policy: {:?}, chatSettings forwarded: {}, timeout: {}",
        config.credentials,
        config.include_chat_settings,
        humantime::format_duration(config.request_timeout)
    );

    let addr: SocketAddr = match format!("{}:{}", cli.host, cli.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid listen address {}:{}: {}", cli.host, cli.port, e);
            return ExitCode::FAILURE;
        }
    };

    let relay = match RelayHandler::from_config(config) {
        Ok(relay) => relay,
        Err(e) => {
            error!("Failed to create relay handler: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = api::server::launch_server(addr, relay).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

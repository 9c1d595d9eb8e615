//! Serve command - run the HTTP API.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Args;
use tracing::info;

use receipt_core::{MistralClient, ReceiptParser, ReceiptService};
use receipt_server::{start_server, AppState};

use super::load_config;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(short, long)]
    bind: Option<String>,

    /// Vendor OCR endpoint (overrides config)
    #[arg(long)]
    endpoint: Option<String>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;

    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(endpoint) = args.endpoint {
        config.vendor.endpoint = endpoint;
    }

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", config.server.bind, e))?;

    let vendor = MistralClient::new(&config.vendor)?;
    let parser = ReceiptParser::from_config(&config.extraction);
    let service = ReceiptService::new(Arc::new(vendor), Arc::new(parser));

    info!(endpoint = %config.vendor.endpoint, "Using OCR vendor");

    start_server(addr, AppState::new(service), &config.server).await?;

    Ok(())
}

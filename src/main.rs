// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::env;

use anyhow::Result;
use ghibli_relay::{api, config::RelayConfig, relay::GhibliRelay, version};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; real environments set variables directly
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("Starting {}", version::get_version_string());

    let config = RelayConfig::from_env()?;
    tracing::info!(
        "Upstream base: {}, listening on port {}",
        config.api_base,
        config.port
    );

    let relay = GhibliRelay::new(&config)?;

    api::start_server(relay, config.port)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}

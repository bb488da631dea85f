// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use medwiki_qa::{
    api::{start_server, AppState},
    wiki::{WikiConfig, WikiQaService},
};
use std::{env, net::SocketAddr};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("Starting medwiki-qa...\n");
    println!("BUILD VERSION: {}", medwiki_qa::version::VERSION);
    println!("Build Date: {}", medwiki_qa::version::BUILD_DATE);
    println!();

    let config = WikiConfig::from_env();
    if let Err(e) = config.validate() {
        anyhow::bail!("Invalid encyclopedia configuration: {}", e);
    }
    tracing::info!(
        "Encyclopedia endpoints: api={} rest={} (timeout {}ms)",
        config.api_url,
        config.rest_base,
        config.request_timeout_ms
    );

    let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let api_port = env::var("API_PORT").unwrap_or_else(|_| "8080".to_string());
    let addr: SocketAddr = format!("{}:{}", api_host, api_port)
        .parse()
        .with_context(|| format!("Invalid API address {}:{}", api_host, api_port))?;

    let service = WikiQaService::new(config)?;
    let state = AppState::new(service);

    println!("API server: http://{}", addr);
    println!("  POST /v1/ask");
    println!("  GET  /health");
    println!();

    tokio::select! {
        result = start_server(addr, state) => result?,
        _ = tokio::signal::ctrl_c() => {
            println!("\nShutting down...");
        }
    }

    Ok(())
}

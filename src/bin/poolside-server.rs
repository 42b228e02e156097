// ABOUTME: Server binary: configuration, logging, corpus load, HTTP serve
// ABOUTME: One-shot synchronous startup, then the axum request loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! # Poolside Analytics Server Binary
//!
//! Loads configuration from the environment, ingests the race-log corpus
//! once, and serves the analysis API until shut down.

use anyhow::Result;
use clap::Parser;
use poolside_server::{
    config::ServerConfig, corpus, logging, resources::ServerResources, routes::AnalysisRoutes,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "poolside-server")]
#[command(about = "Poolside Analytics - Swim race-log analysis API for coaches")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the race-log directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment, then apply flag overrides
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    logging::init_from_env()?;

    info!("Starting Poolside Analytics API");
    info!("{}", config.summary());

    // One-shot, blocking corpus load; the records are immutable afterwards
    let corpus = corpus::load_corpus(&config.data_dir)?;
    info!(
        records = corpus.len(),
        swimmers = corpus.swimmers().len(),
        "corpus ready"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let resources = Arc::new(ServerResources::new(config, corpus));
    let app = AnalysisRoutes::routes(resources);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when the process receives an interrupt
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

// ABOUTME: Server binary for the BodyRecomp coaching backend
// ABOUTME: Loads environment configuration, initializes logging, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! # BodyRecomp Coach Server Binary
//!
//! Starts the HTTP relay that performs schema-constrained plan generation
//! and coach conversation turns against Google Gemini.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use recomp_coach_server::{
    config::environment::ServerConfig,
    logging,
    server::{self, ServerResources},
};
use tracing::info;

#[derive(Parser)]
#[command(name = "recomp-coach-server")]
#[command(about = "BodyRecomp coaching backend - plan generation and AI coach chat")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting BodyRecomp Coach Server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_env(config));
    server::serve(resources).await
}

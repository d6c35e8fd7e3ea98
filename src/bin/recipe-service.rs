// ABOUTME: Recipe service binary: loads configuration, initializes logging, and serves the API
// ABOUTME: Command-line flags override the bind host and HTTP port from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recipe Service Binary
//!
//! ```bash
//! RUST_LOG=debug LOG_FORMAT=json recipe-service --http-port 8080
//! ```

use anyhow::Result;
use clap::Parser;
use recipe_service::{config::environment::ServerConfig, logging, server::RecipeServer};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-service")]
#[command(about = "Recipe Microservice - scale, edit, and manage favorite recipes")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());
    display_available_endpoints(&config);

    let server = RecipeServer::with_seed_data(config);
    if let Err(e) = server.run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("   Service info:     GET  {base}/");
    info!("   List recipes:     GET  {base}/recipes?favorite=<bool>");
    info!("   Get recipe:       GET  {base}/recipes/{{recipe_id}}");
    info!("   Scale recipe:     POST {base}/scale-recipe");
    info!("   Edit recipe:      POST {base}/edit-recipe");
    info!("   Favorite recipe:  POST {base}/favorite-recipe");
    info!("   Health:           GET  {base}/health");
    info!("   Readiness:        GET  {base}/ready");
    info!("=== End of Endpoint List ===");
}

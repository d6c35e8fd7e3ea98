// ABOUTME: HTTP server assembly for the recipe service: middleware stack, bind, and shutdown
// ABOUTME: Owns the shared recipe store and serves the router until a shutdown signal arrives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recipe Server
//!
//! [`build_router`] wraps the API routes in the middleware stack, outermost
//! first:
//!
//! 1. `SetRequestIdLayer`: assign `x-request-id` when the caller sent none
//! 2. `TraceLayer`: one `http_request` span per request
//! 3. `PropagateRequestIdLayer`: echo the ID on the response
//! 4. CORS
//! 5. `TimeoutLayer`: 408 after `REQUEST_TIMEOUT_SECS`
//! 6. `RequestBodyLimitLayer`: 413 above `MAX_REQUEST_BODY_BYTES`

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::middleware::{make_request_span, record_response, setup_cors, RecipeRequestId};
use crate::recipes::RecipeStore;
use crate::routes::api_routes;

/// Build the full application router with every middleware layer applied
pub fn build_router(store: Arc<RecipeStore>, config: &ServerConfig) -> Router {
    api_routes(store)
        .layer(RequestBodyLimitLayer::new(config.http.max_request_body_bytes))
        .layer(TimeoutLayer::new(config.http.request_timeout()))
        .layer(setup_cors(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(record_response),
        )
        .layer(SetRequestIdLayer::x_request_id(RecipeRequestId))
}

/// Recipe HTTP server
pub struct RecipeServer {
    config: ServerConfig,
    store: Arc<RecipeStore>,
}

impl RecipeServer {
    /// Create a server over an existing store
    #[must_use]
    pub const fn new(config: ServerConfig, store: Arc<RecipeStore>) -> Self {
        Self { config, store }
    }

    /// Create a server over the seeded reference store
    #[must_use]
    pub fn with_seed_data(config: ServerConfig) -> Self {
        Self::new(config, Arc::new(RecipeStore::seeded()))
    }

    /// Shared handle to the store this server serves
    #[must_use]
    pub fn store(&self) -> Arc<RecipeStore> {
        Arc::clone(&self.store)
    }

    /// Layered router for this server
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.store), &self.config)
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails while accepting connections
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_address = listener
            .local_addr()
            .context("Failed to read listener address")?;
        info!(
            address = %local_address,
            recipes = self.store.len(),
            "Recipe service listening on http://{local_address}"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server error")?;

        info!("Recipe service shut down");
        Ok(())
    }
}

/// Resolve on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

// ABOUTME: Main library entry point for the recipe microservice
// ABOUTME: Exposes the recipe store, scaler, HTTP routes, server, and API client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Recipe Service
//!
//! A small HTTP/JSON service that stores recipes in memory, rescales
//! ingredient quantities between servings counts, applies partial edits and
//! tracks favorites.
//!
//! ## Architecture
//!
//! - **Models / errors**: shared types from the `recipe-core` crate
//! - **Recipes**: the concurrent [`recipes::RecipeStore`] and the pure scaler
//! - **Routes**: thin axum handlers over the store
//! - **Server**: middleware stack, bind and graceful shutdown
//! - **Client**: `reqwest` wrapper used by the demo binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_service::config::environment::ServerConfig;
//! use recipe_service::server::RecipeServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Recipe service configured on port {}", config.http_port);
//!
//!     RecipeServer::with_seed_data(config).run().await
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────

/// API client for the recipe service
pub mod client;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// CORS and request tracing middleware
pub mod middleware;

/// Recipe store, scaling and seed data
pub mod recipes;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

pub use recipe_core::{constants, errors, models};

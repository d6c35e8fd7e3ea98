// ABOUTME: Configuration module for server settings loaded from the environment
// ABOUTME: Re-exports ServerConfig and its typed sub-settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for the recipe service
//!
//! Configuration is environment-only; see [`environment::ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, HttpLimits, LogLevel, ServerConfig};

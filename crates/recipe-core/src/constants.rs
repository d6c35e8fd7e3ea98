// ABOUTME: Service identity and configuration defaults for the recipe service
// ABOUTME: Shared by the config loader, logging setup, and the service descriptor endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Service identity reported in logs and by the descriptor endpoint
pub mod service {
    /// Service name used for structured logging
    pub const SERVICE_NAME: &str = "recipe-service";

    /// Human-readable title
    pub const SERVICE_TITLE: &str = "Recipe Microservice";

    /// One-line description
    pub const SERVICE_DESCRIPTION: &str =
        "A microservice to scale, edit, and manage favorite recipes.";

    /// API version advertised by the descriptor endpoint
    pub const API_VERSION: &str = "1.0.0";
}

/// Defaults applied when the corresponding environment variable is unset
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "0.0.0.0";

    /// HTTP port
    pub const HTTP_PORT: u16 = 5001;

    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request body limit (1 MiB)
    pub const MAX_REQUEST_BODY_BYTES: usize = 1_048_576;

    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";

    /// Base URL the demonstration client talks to
    pub const CLIENT_BASE_URL: &str = "http://127.0.0.1:5001";
}

/// Header used for request correlation
pub const REQUEST_ID_HEADER: &str = "x-request-id";

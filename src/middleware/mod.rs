// ABOUTME: HTTP middleware for the recipe service: CORS and request tracing
// ABOUTME: Layers are assembled by the router; this module only builds them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// CORS configuration
pub mod cors;
/// Request ID generation and per-request spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{
    create_request_span, generate_request_id, make_request_span, record_response,
    RecipeRequestId, RequestContext,
};

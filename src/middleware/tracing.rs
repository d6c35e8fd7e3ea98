// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates request IDs, opens a span per HTTP request, and exposes the ID to handlers

use std::convert::Infallible;
use std::time::Duration;

use axum::async_trait;
use axum::body::Body;
use axum::extract::FromRequestParts;
use http::request::Parts;
use http::{HeaderValue, Request, Response};
use recipe_core::constants::REQUEST_ID_HEADER;
use recipe_core::errors::AppError;
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Generate a fresh request identifier in the `req_<uuid>` form
#[must_use]
pub fn generate_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// `MakeRequestId` used by `SetRequestIdLayer` when the caller sent no ID
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeRequestId;

impl MakeRequestId for RecipeRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&generate_request_id())
            .ok()
            .map(RequestId::new)
    }
}

/// Request identifier as seen by a handler
///
/// Reads the ID `SetRequestIdLayer` placed in the request extensions and
/// falls back to the raw header. Never rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Correlation ID, if one was assigned
    pub request_id: Option<String>,
}

impl RequestContext {
    /// Stamp this request's ID onto an outgoing error
    #[must_use]
    pub fn attach(&self, error: impl Into<AppError>) -> AppError {
        let error = error.into();
        match &self.request_id {
            Some(request_id) => error.with_request_id(request_id.clone()),
            None => error,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .map(RequestId::header_value)
            .or_else(|| parts.headers.get(REQUEST_ID_HEADER))
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Ok(Self { request_id })
    }
}

/// Create a tracing span for an HTTP request
pub fn create_request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = tracing::field::Empty,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// `TraceLayer` span factory: one `http_request` span carrying the request ID
pub fn make_request_span(request: &Request<Body>) -> Span {
    let span = create_request_span(request.method().as_str(), request.uri().path());
    if let Some(request_id) = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        span.record("request_id", request_id);
    }
    span
}

/// `TraceLayer` response hook: records status and latency on the request span
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let duration_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
    span.record("status_code", response.status().as_u16());
    span.record("duration_ms", duration_ms);
    tracing::debug!(
        status_code = response.status().as_u16(),
        duration_ms,
        "Request completed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let first = generate_request_id();
        let second = generate_request_id();

        assert!(first.starts_with("req_"));
        assert_eq!(first.len(), "req_".len() + 32);
        assert_ne!(first, second);
    }

    #[test]
    fn test_make_request_id_produces_header_value() {
        let request = Request::builder().uri("/").body(()).unwrap();
        let id = RecipeRequestId.make_request_id(&request).unwrap();
        assert!(id.header_value().to_str().unwrap().starts_with("req_"));
    }
}

//! Request/response logging middleware
//!
//! Buffers both bodies so they can be logged, then hands back equivalent
//! request and response values.

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Largest request body the middleware will buffer
pub const MAX_LOGGED_BODY: usize = 1024 * 1024;

/// Message returned when the request body cannot be buffered
pub const UNREADABLE_BODY: &str = "Could not read request body";

/// Log method, URI and body of the request, then status and body of the response
pub async fn log_exchange(req: Request<Body>, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to buffer request body: {}", e);
            return (StatusCode::BAD_REQUEST, UNREADABLE_BODY).into_response();
        }
    };

    tracing::info!(
        "Request: {} {}, Body: {}",
        parts.method,
        parts.uri,
        String::from_utf8_lossy(&bytes)
    );

    let response = next
        .run(Request::from_parts(parts, Body::from(bytes)))
        .await;

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to buffer response body: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    tracing::info!(
        "Response: {}, Body: {}",
        parts.status.as_u16(),
        String::from_utf8_lossy(&bytes)
    );

    Response::from_parts(parts, Body::from(bytes))
}

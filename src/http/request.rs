//! Request identification.
//!
//! IDs are assigned by tower-http's `SetRequestIdLayer` before the handler
//! runs and echoed back on the response by `PropagateRequestIdLayer`.

use axum::http::HeaderMap;

pub const X_REQUEST_ID: &str = "x-request-id";

/// The request ID assigned by the middleware, or `"unknown"`.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

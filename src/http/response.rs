//! Response relay from upstream to client.
//!
//! # Responsibilities
//! - Copy upstream status and headers
//! - Drop hop-by-hop headers, force `access-control-allow-origin: *`
//! - Stream the upstream body without buffering
//!
//! # Design Decisions
//! - The body is never read into memory, so release tarballs of any size pass through
//! - Backpressure from the client throttles the upstream read

use axum::body::Body;
use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::response::Response;

/// Headers that describe a single connection and must not be relayed.
const HOP_BY_HOP: [&str; 7] = [
    "connection",
    "keep-alive",
    "proxy-connection",
    "transfer-encoding",
    "upgrade",
    "te",
    "trailer",
];

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy upstream headers for the client, with the CORS header overwritten.
pub fn relay_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(upstream.len() + 1);
    for (name, value) in upstream {
        if !is_hop_by_hop(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers
}

/// Turn an upstream response into the client response.
pub fn relay(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let headers = relay_headers(upstream.headers());

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

//! Request-level error taxonomy.
//!
//! Every failure while handling a request ends up as one of these variants
//! and is rendered by [`IntoResponse`]; nothing escapes to the caller as a
//! dropped connection.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::usage;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// Access or routing prefix missing. Rendered as an ordinary 404.
    #[error("access denied")]
    AccessDenied,

    #[error("no route shape matched")]
    RouteUnmatched,

    /// The release asset probe returned a non-2xx status.
    #[error("upstream asset missing (probe status {status})")]
    UpstreamMissing { status: StatusCode },

    #[error("upstream fetch failed: {0}")]
    UpstreamFault(#[from] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::AccessDenied | ProxyError::UpstreamMissing { .. } => StatusCode::NOT_FOUND,
            ProxyError::RouteUnmatched => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::AccessDenied => "access_denied",
            ProxyError::RouteUnmatched => "route_unmatched",
            ProxyError::UpstreamMissing { .. } => "upstream_missing",
            ProxyError::UpstreamFault(_) => "upstream_fault",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ProxyError::AccessDenied => (status, "404 Not Found").into_response(),
            ProxyError::RouteUnmatched => (status, usage::render()).into_response(),
            ProxyError::UpstreamMissing { .. } => (status, "File not found").into_response(),
            ProxyError::UpstreamFault(_) => (status, "Internal Server Error").into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ProxyError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_access_denied_looks_like_not_found() {
        let (status, body) = body_of(ProxyError::AccessDenied).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "404 Not Found");
    }

    #[tokio::test]
    async fn test_route_unmatched_returns_usage_guide() {
        let response = ProxyError::RouteUnmatched.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers()[axum::http::header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let (_, body) = body_of(ProxyError::RouteUnmatched).await;
        assert!(body.contains("Usage Guide"));
    }

    #[tokio::test]
    async fn test_upstream_missing() {
        let (status, body) = body_of(ProxyError::UpstreamMissing {
            status: StatusCode::NOT_FOUND,
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "File not found");
    }
}

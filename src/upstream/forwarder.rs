//! Upstream forwarding.
//!
//! # Responsibilities
//! - Issue the outbound GET for a resolved upstream URL
//! - Apply the per-shape probe policy (release assets are existence-checked)
//! - Convert every network failure into `ProxyError::UpstreamFault`
//!
//! # Design Decisions
//! - Only the URL drives the fetch; inbound method, headers and body are not forwarded
//! - Redirects follow reqwest's default policy (GitHub release assets redirect to a CDN)
//! - No timeouts or retries: one failed fetch is one terminal error

use axum::response::Response;

use crate::config::schema::UpstreamConfig;
use crate::error::ProxyError;
use crate::http::response::relay;
use crate::routing::{ProbePolicy, UpstreamRequest};

/// Shared outbound client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
}

impl Forwarder {
    /// Build the outbound client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch `request.url` and relay the response with CORS enabled.
    pub async fn forward(&self, request: &UpstreamRequest) -> Result<Response, ProxyError> {
        if request.probe_policy() == ProbePolicy::ProbeFirst {
            self.probe(&request.url).await?;
        }

        let upstream = self.client.get(&request.url).send().await?;

        tracing::debug!(
            url = %request.url,
            shape = request.shape.as_str(),
            status = %upstream.status(),
            "Relaying upstream response"
        );

        Ok(relay(upstream))
    }

    /// Existence check. The probe body is dropped unread.
    async fn probe(&self, url: &str) -> Result<(), ProxyError> {
        let status = self.client.get(url).send().await?.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = %status, "Probe failed");
            return Err(ProxyError::UpstreamMissing { status });
        }
        Ok(())
    }
}

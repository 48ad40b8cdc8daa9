//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Enforce the access prefix and the `/gh/` routing prefix
//! - Classify the remainder into a shape and build the upstream URL
//! - Return an explicit decision: forward or reject
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Pure: no I/O, so every decision is unit-testable
//! - Prefix failures are plain 404s, indistinguishable from unknown paths

use crate::config::schema::{RoutingConfig, UpstreamConfig};
use crate::error::ProxyError;
use crate::routing::matcher::{self, ProbePolicy, Shape, UpstreamBases};

/// Literal segment that introduces a GitHub path after the access prefix.
pub const ROUTING_PREFIX: &str = "/gh/";

/// Outcome of routing one inbound path.
#[derive(Debug)]
pub enum RouteDecision {
    Rejected(ProxyError),
    Forward(UpstreamRequest),
}

/// A fully resolved upstream fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub url: String,
    pub shape: Shape,
}

impl UpstreamRequest {
    pub fn probe_policy(&self) -> ProbePolicy {
        self.shape.probe_policy()
    }
}

/// Path router for the proxy.
#[derive(Debug, Clone)]
pub struct Router {
    access_prefix: String,
    bases: UpstreamBases,
    strict_names: bool,
}

impl Router {
    pub fn new(access_prefix: impl Into<String>, bases: UpstreamBases, strict_names: bool) -> Self {
        Self {
            access_prefix: access_prefix.into(),
            bases,
            strict_names,
        }
    }

    /// Build a router from validated configuration.
    pub fn from_config(routing: &RoutingConfig, upstream: &UpstreamConfig) -> Self {
        Self::new(
            routing.access_prefix.clone(),
            UpstreamBases {
                github: upstream.github_base.clone(),
                raw: upstream.raw_base.clone(),
            },
            routing.strict_names,
        )
    }

    pub fn access_prefix(&self) -> &str {
        &self.access_prefix
    }

    /// Decide what to do with an inbound request path.
    pub fn route(&self, path: &str) -> RouteDecision {
        match self.resolve(path) {
            Ok(request) => RouteDecision::Forward(request),
            Err(err) => RouteDecision::Rejected(err),
        }
    }

    fn resolve(&self, path: &str) -> Result<UpstreamRequest, ProxyError> {
        let rest = path
            .strip_prefix(self.access_prefix.as_str())
            .ok_or(ProxyError::AccessDenied)?;
        let rest = rest
            .strip_prefix(ROUTING_PREFIX)
            .ok_or(ProxyError::AccessDenied)?;

        let (rule, m) = matcher::classify(rest, self.strict_names).ok_or(ProxyError::RouteUnmatched)?;

        Ok(UpstreamRequest {
            url: rule.upstream_url(&m, &self.bases),
            shape: m.shape,
        })
    }
}

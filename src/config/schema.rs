//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the TOML config file.
//! Every section is optional; missing fields take their defaults.

use serde::{Deserialize, Serialize};

/// Placeholder access prefix. Startup warns while it is still in use.
pub const DEFAULT_ACCESS_PREFIX: &str = "/changeme";

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Access prefix and shape matching options.
    pub routing: RoutingConfig,

    /// Upstream hosts and outbound client settings.
    pub upstream: UpstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Path segment every request must start with, e.g. "/my-secret".
    /// Obscurity only, not authentication.
    pub access_prefix: String,

    /// Reject owner/repo/ref names outside `[A-Za-z0-9_.-]`.
    pub strict_names: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            // WARNING: This is a placeholder! Change this in production.
            access_prefix: DEFAULT_ACCESS_PREFIX.to_string(),
            strict_names: false,
        }
    }
}

/// Upstream configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base for release and tag URLs.
    pub github_base: String,

    /// Base for blob and raw URLs.
    pub raw_base: String,

    /// User-Agent sent on outbound requests.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            github_base: "https://github.com".to_string(),
            raw_base: "https://raw.githubusercontent.com".to_string(),
            user_agent: concat!("gh-cors-proxy/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

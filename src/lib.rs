//! GitHub download proxy with permissive CORS.
//!
//! Rewrites `/<access-prefix>/gh/...` paths into GitHub release, tag, blob
//! and raw URLs, fetches them, and relays the response with
//! `Access-Control-Allow-Origin: *` so browser code can download them.
//!
//! ```text
//!  Client ──▶ http::server ──▶ routing::Router ──▶ upstream::Forwarder ──▶ GitHub
//!    ▲                              │ reject                 │
//!    │                              ▼                        ▼
//!    └──────────────────── error::ProxyError / http::response::relay
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

//! Upstream subsystem.
//!
//! # Data Flow
//! ```text
//! UpstreamRequest (url, shape)
//!     → forwarder.rs (probe if the shape requires it, then fetch)
//!     → http::response::relay (headers + CORS, streamed body)
//!     → Response to client
//! ```

pub mod forwarder;

pub use forwarder::Forwarder;

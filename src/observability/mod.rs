//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (request_id, shape, upstream)
//! - Request ID assigned at the edge and echoed on the response
//! - Metrics are cheap (recorder no-ops when the exporter is disabled)

pub mod logging;
pub mod metrics;

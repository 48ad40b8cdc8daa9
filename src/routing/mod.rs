//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path
//!     → router.rs (access prefix, then /gh/ routing prefix)
//!     → matcher.rs (ordered shape table, first match wins)
//!     → Return: Forward(upstream URL) or Rejected(error)
//! ```
//!
//! # Design Decisions
//! - Prefixes fixed at startup, router immutable at runtime
//! - No regex (segment matching only)
//! - Deterministic: same path always yields the same decision

pub mod matcher;
pub mod router;

pub use matcher::{ProbePolicy, RouteMatch, Shape, UpstreamBases};
pub use router::{RouteDecision, Router, UpstreamRequest, ROUTING_PREFIX};

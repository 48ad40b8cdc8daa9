//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID + trace layers)
//!     → request.rs (request ID lookup)
//!     → [routing decides shape and upstream URL]
//!     → [upstream forwarder fetches]
//!     → response.rs (relay headers + CORS, stream body)
//!     → Send to client
//!
//! No shape matched → usage.rs (HTML guide, 400)
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod usage;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};

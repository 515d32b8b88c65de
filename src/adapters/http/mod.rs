//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own HTTP adapter for endpoint exposure.

pub mod auth_link;
pub mod conversation;
pub mod error;
pub mod middleware;
pub mod router;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, AppState};

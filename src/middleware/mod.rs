// ABOUTME: HTTP middleware for request correlation, tracing, and cross-origin access
// ABOUTME: Provides request ID generation, span creation, and CORS configuration

pub mod cors;
pub mod request_id;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request correlation
pub use request_id::{request_id_middleware, RequestId};

// Request tracing
pub use tracing::create_request_span;

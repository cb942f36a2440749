//! Middleware modules for request processing

use tower_http::cors::{Any, CorsLayer};

/// CORS layer for the patient-facing client
///
/// Interview endpoints are reached from a browser session opened via an
/// emailed link; cross-origin requests are expected.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

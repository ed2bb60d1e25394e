//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Creates a CORS layer accepting any origin, method and header.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}

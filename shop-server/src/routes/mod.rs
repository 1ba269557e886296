use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use http::HeaderValue;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;
use crate::middleware;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Catalog API
        .merge(api::products::router())
        // Shop settings API
        .merge(api::settings::router())
        // Orders API
        .merge(api::orders::router())
        // Health API
        .merge(api::health::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and the integration tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // Body limit - base64 screenshots can be large
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response (must sit inside SetRequestIdLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        // Request ID - Generate unique ID for each request, outermost
        .layer(SetRequestIdLayer::x_request_id(XRequestId))
}
